//! Name Synthesizer
//!
//! Builds canonical identifiers and selectors from structured descriptors.

use std::str::FromStr;

use crate::{ModValue, NameKind, ParsedName, Syntax, SyntaxError, SyntaxResult};

/// Modifier part of a [`NameDescriptor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierDescriptor {
    pub key: String,
    pub value: ModValue,
}

impl ModifierDescriptor {
    pub fn new(key: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            key: key.into(),
            value: ModValue::from_option(value),
        }
    }

    pub fn flag(key: impl Into<String>) -> Self {
        Self::new(key, None)
    }
}

/// Parses the `key:value` shorthand; a bare `key` is a flag.
impl FromStr for ModifierDescriptor {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = match s.split_once(':') {
            Some((key, value)) => (key, Some(value)),
            None => (s, None),
        };

        if key.is_empty() {
            return Err(SyntaxError::InvalidName {
                segment: s.to_string(),
                pattern: "key[:value]".to_string(),
            });
        }

        Ok(Self::new(key, value))
    }
}

/// Structured name: block, optional element, optional modifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDescriptor {
    pub block: String,
    pub element: Option<String>,
    pub modifier: Option<ModifierDescriptor>,
}

impl NameDescriptor {
    pub fn block(block: impl Into<String>) -> Self {
        Self {
            block: block.into(),
            element: None,
            modifier: None,
        }
    }

    pub fn element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn modifier(mut self, key: impl Into<String>, value: Option<&str>) -> Self {
        self.modifier = Some(ModifierDescriptor::new(key, value));
        self
    }

    pub fn flag(self, key: impl Into<String>) -> Self {
        self.modifier(key, None)
    }
}

/// Selector input: a raw selector or a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorSource {
    Raw(String),
    Name(NameDescriptor),
}

impl From<&str> for SelectorSource {
    fn from(s: &str) -> Self {
        Self::Raw(s.to_string())
    }
}

impl From<String> for SelectorSource {
    fn from(s: String) -> Self {
        Self::Raw(s)
    }
}

impl From<NameDescriptor> for SelectorSource {
    fn from(d: NameDescriptor) -> Self {
        Self::Name(d)
    }
}

/// `listItem` -> `list-item`
pub fn camel_to_element(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl Syntax {
    pub(crate) fn join_element(&self, block: &str, element: &str) -> String {
        format!("{block}{}{element}", self.config().element_separator)
    }

    pub(crate) fn join_modifier(&self, base: &str, key: &str, value: Option<&str>) -> String {
        let config = self.config();
        match value {
            Some(v) if !v.is_empty() => format!(
                "{base}{}{key}{}{v}",
                config.modifier_separator, config.modifier_delimiter
            ),
            _ => format!("{base}{}{key}", config.modifier_separator),
        }
    }

    /// Validated block identifier
    pub fn build_block_name(&self, block: &str) -> SyntaxResult<String> {
        self.check_block(block)?;
        self.verify(
            block.to_string(),
            ParsedName::Block {
                block: block.to_string(),
            },
        )
    }

    /// `block` + element separator + `element`
    pub fn build_element_name(&self, block: &str, element: &str) -> SyntaxResult<String> {
        self.check_block(block)?;
        self.check_segment(element)?;
        self.verify(
            self.join_element(block, element),
            ParsedName::Element {
                block: block.to_string(),
                element: element.to_string(),
            },
        )
    }

    /// `base` + modifier separator + `key` [+ delimiter + `value`].
    ///
    /// `base` must itself classify as a block or element identifier. A
    /// missing or empty `value` produces the flag form.
    pub fn build_modifier_name(
        &self,
        base: &str,
        key: &str,
        value: Option<&str>,
    ) -> SyntaxResult<String> {
        if !matches!(
            self.classify_kind(base),
            Some(NameKind::Block | NameKind::Element)
        ) {
            return Err(SyntaxError::InvalidName {
                segment: base.to_string(),
                pattern: "block or element identifier".to_string(),
            });
        }
        self.check_segment(key)?;
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.check_segment(v)?;
        }
        self.verify(
            self.join_modifier(base, key, value),
            ParsedName::Modifier {
                base: base.to_string(),
                key: key.to_string(),
                value: ModValue::from_option(value),
            },
        )
    }

    /// Reject identifiers that would not classify back into their parts,
    /// e.g. a segment containing the modifier separator.
    fn verify(&self, identifier: String, parts: ParsedName) -> SyntaxResult<String> {
        if self.classify(&identifier) == parts {
            return Ok(identifier);
        }

        let config = self.config();
        tracing::debug!("Ambiguous identifier '{}' for {:?}", identifier, parts);
        Err(SyntaxError::InvalidName {
            segment: identifier,
            pattern: format!(
                "segments free of '{}', '{}' and '{}'",
                config.element_separator, config.modifier_separator, config.modifier_delimiter
            ),
        })
    }

    /// Identifier for a descriptor
    pub fn build_name(&self, descriptor: &NameDescriptor) -> SyntaxResult<String> {
        let mut name = self.build_block_name(&descriptor.block)?;

        if let Some(element) = &descriptor.element {
            name = self.build_element_name(&name, element)?;
        }

        if let Some(modifier) = &descriptor.modifier {
            name = self.build_modifier_name(&name, &modifier.key, modifier.value.as_str())?;
        }

        Ok(name)
    }

    /// Selector for a raw string (passed through) or a descriptor, with
    /// `prefix` prepended.
    pub fn build_selector(&self, source: &SelectorSource, prefix: &str) -> SyntaxResult<String> {
        match source {
            SelectorSource::Raw(raw) => Ok(format!("{prefix}{raw}")),
            SelectorSource::Name(descriptor) => {
                Ok(format!("{prefix}{}", self.build_name(descriptor)?))
            }
        }
    }

    /// Class selector (`.` prefix)
    pub fn selector(&self, source: impl Into<SelectorSource>) -> SyntaxResult<String> {
        self.build_selector(&source.into(), ".")
    }
}

/// Class tokens of a compound selector: `div.b-a.b-a_on:hover` -> `[b-a, b-a_on]`
pub fn split_selector(selector: &str) -> Vec<&str> {
    selector
        .split('.')
        .skip(1)
        .map(|token| {
            let end = token
                .find(|c: char| c.is_whitespace() || ":#[>+~,".contains(c))
                .unwrap_or(token.len());
            &token[..end]
        })
        .filter(|token| !token.is_empty())
        .collect()
}
