//! Name Classifier
//!
//! Decides whether an identifier is a block, an element or a modifier.

use std::fmt;

use crate::Syntax;

/// Modifier value: a bare flag or a key/value payload
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModValue {
    /// `block_key`
    Flag,
    /// `block_key_value`
    Value(String),
}

impl ModValue {
    /// `None` and `Some("")` are flags
    pub fn from_option(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Value(v.to_string()),
            _ => Self::Flag,
        }
    }

    /// Value payload, `None` for flags
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Value(v) => Some(v),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl From<&str> for ModValue {
    fn from(value: &str) -> Self {
        Self::from_option(Some(value))
    }
}

impl From<bool> for ModValue {
    fn from(_: bool) -> Self {
        Self::Flag
    }
}

impl fmt::Display for ModValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "true"),
            Self::Value(v) => write!(f, "{v}"),
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName {
    Block {
        block: String,
    },
    Element {
        block: String,
        element: String,
    },
    Modifier {
        /// Block or element identifier the modifier is layered on
        base: String,
        key: String,
        value: ModValue,
    },
    Unrecognized,
}

/// Category of a recognized identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Block,
    Element,
    Modifier,
}

impl ParsedName {
    pub fn kind(&self) -> Option<NameKind> {
        match self {
            Self::Block { .. } => Some(NameKind::Block),
            Self::Element { .. } => Some(NameKind::Element),
            Self::Modifier { .. } => Some(NameKind::Modifier),
            Self::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl Syntax {
    /// Classify one identifier.
    ///
    /// Modifiers are tried first: a modifier suffix on a block or element
    /// would otherwise read as a longer block/element name. The base match is
    /// greedy, so the last modifier separator that still leaves a valid base
    /// introduces the payload.
    pub fn classify(&self, identifier: &str) -> ParsedName {
        let patterns = self.patterns();

        if let Some(caps) = patterns.modifier.captures(identifier) {
            return ParsedName::Modifier {
                base: caps["base"].to_string(),
                key: caps["key"].to_string(),
                value: ModValue::from_option(caps.name("value").map(|m| m.as_str())),
            };
        }

        if let Some(caps) = patterns.element.captures(identifier) {
            return ParsedName::Element {
                block: caps["block"].to_string(),
                element: caps["element"].to_string(),
            };
        }

        if patterns.block.is_match(identifier) {
            return ParsedName::Block {
                block: identifier.to_string(),
            };
        }

        ParsedName::Unrecognized
    }

    /// Category only
    pub fn classify_kind(&self, identifier: &str) -> Option<NameKind> {
        self.classify(identifier).kind()
    }

    /// Block an identifier belongs to
    pub fn block_of(&self, identifier: &str) -> Option<String> {
        match self.classify(identifier) {
            ParsedName::Block { block } | ParsedName::Element { block, .. } => Some(block),
            ParsedName::Modifier { base, .. } => self.block_of(&base),
            ParsedName::Unrecognized => None,
        }
    }

    /// Re-synthesize the identifier a parsed name came from
    pub fn to_identifier(&self, parsed: &ParsedName) -> Option<String> {
        match parsed {
            ParsedName::Block { block } => Some(block.clone()),
            ParsedName::Element { block, element } => Some(self.join_element(block, element)),
            ParsedName::Modifier { base, key, value } => {
                Some(self.join_modifier(base, key, value.as_str()))
            }
            ParsedName::Unrecognized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartialSyntax;

    fn modifier(base: &str, key: &str, value: Option<&str>) -> ParsedName {
        ParsedName::Modifier {
            base: base.into(),
            key: key.into(),
            value: ModValue::from_option(value),
        }
    }

    #[test]
    fn test_class_types() {
        let syntax = Syntax::default();

        assert_eq!(syntax.classify_kind("block"), Some(NameKind::Block));
        assert_eq!(syntax.classify_kind("block__elem"), Some(NameKind::Element));
        assert_eq!(syntax.classify_kind("block_key_val"), Some(NameKind::Modifier));
        assert_eq!(syntax.classify_kind("block__elem_key_val"), Some(NameKind::Modifier));
        assert_eq!(syntax.classify_kind("block_mod"), Some(NameKind::Modifier));
        assert_eq!(syntax.classify_kind("block__elem_mod"), Some(NameKind::Modifier));
        assert_eq!(syntax.classify_kind("other-class_unknown_elem__mod"), None);
    }

    #[test]
    fn test_modifier_payload() {
        let syntax = Syntax::default();

        assert_eq!(
            syntax.classify("b-select__list-item_state_active"),
            modifier("b-select__list-item", "state", Some("active"))
        );
        assert_eq!(syntax.classify("b-menu_open"), modifier("b-menu", "open", None));
        assert_eq!(
            syntax.classify("b-select__list"),
            ParsedName::Element {
                block: "b-select".into(),
                element: "list".into()
            }
        );
    }

    #[test]
    fn test_overridden_syntax() {
        let mut syntax = Syntax::default();
        syntax
            .configure(
                &PartialSyntax::new()
                    .name_pattern("[a-z]+")
                    .element_separator("____")
                    .modifier_separator("--")
                    .modifier_delimiter("---"),
            )
            .unwrap();

        assert_eq!(syntax.classify_kind("block"), Some(NameKind::Block));
        assert_eq!(syntax.classify_kind("block____elem"), Some(NameKind::Element));
        assert_eq!(
            syntax.classify("block--key---val"),
            modifier("block", "key", Some("val"))
        );
        assert_eq!(
            syntax.classify("block____elem--key---val"),
            modifier("block____elem", "key", Some("val"))
        );
        assert_eq!(syntax.classify_kind("block--mod"), Some(NameKind::Modifier));
        assert_eq!(syntax.classify_kind("block____elem--mod"), Some(NameKind::Modifier));
        assert_eq!(syntax.classify_kind("other-class--unknown---elem__mod"), None);
    }

    #[test]
    fn test_last_separator_wins_on_overlap() {
        let mut syntax = Syntax::default();
        syntax
            .configure(&PartialSyntax::new().modifier_separator("--"))
            .unwrap();

        // '-' is a name character, so the base swallows every earlier "--"
        assert_eq!(syntax.classify("b-x--k--v"), modifier("b-x--k", "v", None));
        assert_eq!(syntax.classify("b-x--k_v"), modifier("b-x", "k", Some("v")));
        assert_eq!(syntax.classify_kind("b-x_k_v"), None);
    }

    #[test]
    fn test_prefixed_blocks() {
        let mut syntax = Syntax::default();
        syntax
            .configure(&PartialSyntax::new().name_prefix("[a-z]{1,2}-"))
            .unwrap();

        assert_eq!(syntax.classify_kind("b-menu"), Some(NameKind::Block));
        assert_eq!(syntax.classify_kind("menu"), None);
        assert_eq!(syntax.classify_kind("menu__item"), None);
        assert_eq!(syntax.classify_kind("b-menu__item_open"), Some(NameKind::Modifier));
    }

    #[test]
    fn test_pattern_with_own_groups() {
        let mut syntax = Syntax::default();
        syntax
            .configure(&PartialSyntax::new().name_pattern("[a-z]+(-[a-z]+)*"))
            .unwrap();

        assert_eq!(
            syntax.classify("b-menu__item"),
            ParsedName::Element {
                block: "b-menu".into(),
                element: "item".into()
            }
        );
        assert_eq!(
            syntax.classify("b-menu__list-item_state_on"),
            modifier("b-menu__list-item", "state", Some("on"))
        );
        assert_eq!(syntax.classify("b-menu_open"), modifier("b-menu", "open", None));
        assert_eq!(syntax.classify_kind("b--menu"), None);
    }

    #[test]
    fn test_block_of() {
        let syntax = Syntax::default();

        assert_eq!(syntax.block_of("b-menu").as_deref(), Some("b-menu"));
        assert_eq!(syntax.block_of("b-menu__item").as_deref(), Some("b-menu"));
        assert_eq!(syntax.block_of("b-menu__item_state_on").as_deref(), Some("b-menu"));
        assert_eq!(syntax.block_of("has space"), None);
    }

    #[test]
    fn test_flag_is_not_empty_value() {
        let syntax = Syntax::default();

        match syntax.classify("b-menu_open") {
            ParsedName::Modifier { value, .. } => {
                assert!(value.is_flag());
                assert_eq!(value.as_str(), None);
            }
            other => panic!("expected modifier, got {other:?}"),
        }
    }
}
