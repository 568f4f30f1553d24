//! Process-wide default syntax
//!
//! Convenience layer over one shared [`Syntax`] for callers that do not
//! thread an instance through. Changes are visible to every later call and
//! to every engine built on [`shared`].

use once_cell::sync::Lazy;

use crate::{ParsedName, PartialSyntax, SelectorSource, SharedSyntax, Syntax, SyntaxConfig, SyntaxResult};

static DEFAULT_SYNTAX: Lazy<SharedSyntax> = Lazy::new(SharedSyntax::default);

/// Handle to the default syntax
pub fn shared() -> SharedSyntax {
    DEFAULT_SYNTAX.clone()
}

/// Run `f` against the current default syntax
pub fn with<R>(f: impl FnOnce(&Syntax) -> R) -> R {
    f(&DEFAULT_SYNTAX.current())
}

/// Merge `partial` over the default syntax
pub fn configure(partial: &PartialSyntax) -> SyntaxResult<()> {
    DEFAULT_SYNTAX.configure(partial)
}

/// Restore built-in defaults
pub fn reset() {
    DEFAULT_SYNTAX.reset();
}

/// Copy of the active configuration
pub fn snapshot() -> SyntaxConfig {
    with(|syntax| syntax.config().clone())
}

pub fn classify(identifier: &str) -> ParsedName {
    with(|syntax| syntax.classify(identifier))
}

pub fn build_selector(source: impl Into<SelectorSource>) -> SyntaxResult<String> {
    let source = source.into();
    with(|syntax| syntax.build_selector(&source, "."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NameDescriptor, NameKind};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_reconfiguration_is_visible() {
        reset();
        assert_eq!(classify("b-x_k_v").kind(), Some(NameKind::Modifier));

        configure(&PartialSyntax::new().modifier_separator("--")).unwrap();
        assert_eq!(classify("b-x_k_v").kind(), None);
        assert_eq!(
            build_selector(NameDescriptor::block("b-x").flag("k")).unwrap(),
            ".b-x--k"
        );

        reset();
        assert_eq!(snapshot(), SyntaxConfig::default());
    }

    #[test]
    #[serial]
    fn test_handles_share_the_default() {
        reset();
        let handle = shared();

        configure(&PartialSyntax::new().element_separator("==")).unwrap();
        assert_eq!(handle.current().config().element_separator, "==");
        assert!(handle.same_as(&shared()));

        reset();
    }

    #[test]
    #[serial]
    fn test_rejected_change_keeps_config() {
        reset();
        assert!(configure(&PartialSyntax::new().element_separator("")).is_err());
        assert_eq!(snapshot(), SyntaxConfig::default());
    }
}
