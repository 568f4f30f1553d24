//! Syntax Configuration
//!
//! The sub-patterns every classifier and builder call is parameterized by.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{SyntaxError, SyntaxResult};

/// Default legal characters of a name segment
pub const DEFAULT_NAME_PATTERN: &str = "[a-zA-Z0-9-]+";
/// Default separator between block and element
pub const DEFAULT_ELEMENT_SEPARATOR: &str = "__";
/// Default separator introducing a modifier
pub const DEFAULT_MODIFIER_SEPARATOR: &str = "_";
/// Default separator between modifier key and value
pub const DEFAULT_MODIFIER_DELIMITER: &str = "_";

/// Complete naming syntax
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxConfig {
    /// Regex fragment every block name must start with (e.g. `[a-z]-`)
    pub name_prefix: Option<String>,
    /// Regex character-class fragment for one name segment
    pub name_pattern: String,
    /// Literal joining block and element
    pub element_separator: String,
    /// Literal introducing a modifier
    pub modifier_separator: String,
    /// Literal between modifier key and value
    pub modifier_delimiter: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            name_prefix: None,
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
            element_separator: DEFAULT_ELEMENT_SEPARATOR.to_string(),
            modifier_separator: DEFAULT_MODIFIER_SEPARATOR.to_string(),
            modifier_delimiter: DEFAULT_MODIFIER_DELIMITER.to_string(),
        }
    }
}

/// Partial syntax, merged over an active [`SyntaxConfig`]
///
/// Absent fields keep their current value. `name_prefix: Some("")` clears
/// the prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialSyntax {
    pub name_prefix: Option<String>,
    pub name_pattern: Option<String>,
    pub element_separator: Option<String>,
    pub modifier_separator: Option<String>,
    pub modifier_delimiter: Option<String>,
}

impl PartialSyntax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = Some(prefix.into());
        self
    }

    pub fn name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = Some(pattern.into());
        self
    }

    pub fn element_separator(mut self, separator: impl Into<String>) -> Self {
        self.element_separator = Some(separator.into());
        self
    }

    pub fn modifier_separator(mut self, separator: impl Into<String>) -> Self {
        self.modifier_separator = Some(separator.into());
        self
    }

    pub fn modifier_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.modifier_delimiter = Some(delimiter.into());
        self
    }
}

impl SyntaxConfig {
    /// Merge `partial` over this configuration, returning the merged result
    /// without validating it.
    pub fn merged(&self, partial: &PartialSyntax) -> Self {
        let name_prefix = match &partial.name_prefix {
            Some(prefix) if prefix.is_empty() => None,
            Some(prefix) => Some(prefix.clone()),
            None => self.name_prefix.clone(),
        };

        Self {
            name_prefix,
            name_pattern: partial
                .name_pattern
                .clone()
                .unwrap_or_else(|| self.name_pattern.clone()),
            element_separator: partial
                .element_separator
                .clone()
                .unwrap_or_else(|| self.element_separator.clone()),
            modifier_separator: partial
                .modifier_separator
                .clone()
                .unwrap_or_else(|| self.modifier_separator.clone()),
            modifier_delimiter: partial
                .modifier_delimiter
                .clone()
                .unwrap_or_else(|| self.modifier_delimiter.clone()),
        }
    }

    /// Check that identifiers built under this syntax can be classified
    /// unambiguously.
    pub fn validate(&self) -> SyntaxResult<()> {
        let separators = [
            ("element_separator", &self.element_separator),
            ("modifier_separator", &self.modifier_separator),
            ("modifier_delimiter", &self.modifier_delimiter),
        ];

        for (field, value) in separators {
            if value.is_empty() {
                return Err(SyntaxError::Config(format!("{field} must not be empty")));
            }
            if value.chars().any(char::is_whitespace) {
                return Err(SyntaxError::Config(format!(
                    "{field} '{value}' contains whitespace"
                )));
            }
        }

        if self.element_separator == self.modifier_separator {
            return Err(SyntaxError::Config(format!(
                "element_separator and modifier_separator are both '{}'",
                self.element_separator
            )));
        }

        let name = Regex::new(&format!("^(?:{})$", self.name_pattern)).map_err(|e| {
            SyntaxError::Config(format!("name_pattern '{}': {e}", self.name_pattern))
        })?;

        if name.is_match("") {
            return Err(SyntaxError::Config(format!(
                "name_pattern '{}' matches the empty string",
                self.name_pattern
            )));
        }

        if name.is_match(&self.element_separator) {
            return Err(SyntaxError::Config(format!(
                "element_separator '{}' is a valid name under '{}'",
                self.element_separator, self.name_pattern
            )));
        }

        if let Some(prefix) = &self.name_prefix {
            Regex::new(&format!("^(?:{prefix})")).map_err(|e| {
                SyntaxError::Config(format!("name_prefix '{prefix}': {e}"))
            })?;
        }

        Ok(())
    }
}
