//! Syntax - configuration plus compiled name patterns

use regex::Regex;

use crate::{PartialSyntax, SyntaxConfig, SyntaxError, SyntaxResult};

/// Active naming syntax
///
/// Patterns are recompiled on every successful [`Syntax::configure`], so each
/// classification observes the configuration current at call time.
#[derive(Debug, Clone)]
pub struct Syntax {
    config: SyntaxConfig,
    patterns: Patterns,
}

/// Anchored patterns derived from a [`SyntaxConfig`]
#[derive(Debug, Clone)]
pub(crate) struct Patterns {
    /// One name segment
    pub name: Regex,
    /// Block identifier (prefix + name)
    pub block: Regex,
    /// `block` ESEP `element`
    pub element: Regex,
    /// `base` MSEP `key` [DLM `value`], base greedy
    pub modifier: Regex,
}

impl Patterns {
    fn compile(config: &SyntaxConfig) -> SyntaxResult<Self> {
        let name = format!("(?:{})", config.name_pattern);
        let prefix = config
            .name_prefix
            .as_deref()
            .map(|p| format!("(?:{p})"))
            .unwrap_or_default();
        let block = format!("{prefix}{name}");
        let esep = regex::escape(&config.element_separator);
        let msep = regex::escape(&config.modifier_separator);
        let dlm = regex::escape(&config.modifier_delimiter);

        let build = |source: String| {
            Regex::new(&source).map_err(|e| SyntaxError::Config(format!("{source}: {e}")))
        };

        // User fragments may carry their own groups; read captures by name only
        Ok(Self {
            name: build(format!("^{name}$"))?,
            block: build(format!("^{block}$"))?,
            element: build(format!("^(?P<block>{block}){esep}(?P<element>{name})$"))?,
            modifier: build(format!(
                "^(?P<base>{block}(?:{esep}{name})?){msep}(?P<key>{name})(?:{dlm}(?P<value>{name}))?$"
            ))?,
        })
    }
}

impl Syntax {
    /// Create a syntax from a complete configuration
    pub fn new(config: SyntaxConfig) -> SyntaxResult<Self> {
        config.validate()?;
        let patterns = Patterns::compile(&config)?;
        Ok(Self { config, patterns })
    }

    /// Merge `partial` over the active configuration.
    ///
    /// On error the previous configuration stays active.
    pub fn configure(&mut self, partial: &PartialSyntax) -> SyntaxResult<()> {
        let merged = self.config.merged(partial);

        match Self::new(merged) {
            Ok(next) => {
                tracing::info!(
                    element_separator = %next.config.element_separator,
                    modifier_separator = %next.config.modifier_separator,
                    modifier_delimiter = %next.config.modifier_delimiter,
                    "BEM syntax reconfigured"
                );
                *self = next;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Rejected BEM syntax change: {}", e);
                Err(e)
            }
        }
    }

    /// Restore the built-in defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Active configuration
    pub fn config(&self) -> &SyntaxConfig {
        &self.config
    }

    pub(crate) fn patterns(&self) -> &Patterns {
        &self.patterns
    }

    /// Check a single name segment (element name, modifier key or value)
    pub(crate) fn check_segment(&self, segment: &str) -> SyntaxResult<()> {
        if self.patterns.name.is_match(segment) {
            Ok(())
        } else {
            Err(SyntaxError::InvalidName {
                segment: segment.to_string(),
                pattern: self.config.name_pattern.clone(),
            })
        }
    }

    /// Check a block name, including the optional prefix
    pub(crate) fn check_block(&self, block: &str) -> SyntaxResult<()> {
        if self.patterns.block.is_match(block) {
            Ok(())
        } else {
            let pattern = match &self.config.name_prefix {
                Some(prefix) => format!("{prefix}{}", self.config.name_pattern),
                None => self.config.name_pattern.clone(),
            };
            Err(SyntaxError::InvalidName {
                segment: block.to_string(),
                pattern,
            })
        }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::new(SyntaxConfig::default()).expect("built-in BEM syntax is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_rejects_and_keeps_previous() {
        let mut syntax = Syntax::default();
        let result = syntax.configure(&PartialSyntax::new().element_separator("_"));

        assert!(matches!(result, Err(SyntaxError::Config(_))));
        assert_eq!(syntax.config().element_separator, "__");
    }

    #[test]
    fn test_configure_then_reset() {
        let mut syntax = Syntax::default();
        syntax
            .configure(&PartialSyntax::new().modifier_separator("--"))
            .unwrap();
        assert_eq!(syntax.config().modifier_separator, "--");

        syntax.reset();
        assert_eq!(syntax.config(), &SyntaxConfig::default());
    }

    #[test]
    fn test_separators_are_literal() {
        let mut syntax = Syntax::default();
        syntax
            .configure(&PartialSyntax::new().element_separator(".."))
            .unwrap();

        assert!(syntax.patterns().element.is_match("block..elem"));
        assert!(!syntax.patterns().element.is_match("blockxxelem"));
    }

    #[test]
    fn test_prefix_applies_to_blocks_only() {
        let syntax = Syntax::new(SyntaxConfig {
            name_prefix: Some("[a-z]-".into()),
            ..SyntaxConfig::default()
        })
        .unwrap();

        assert!(syntax.check_block("b-select").is_ok());
        assert!(syntax.check_block("select").is_err());
        assert!(syntax.check_segment("item").is_ok());
    }
}
