//! Selector matching
//!
//! Compound simple selectors only: `div`, `.a`, `#id`, `*`, `div.a.b#id`.
//! The pseudo-selector `document` matches the document root.

use crate::{DomError, DomResult};

/// Root pseudo-selector
pub const DOCUMENT_SELECTOR: &str = "document";

/// Parsed compound selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub document: bool,
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

/// Element view a selector is matched against
#[derive(Debug, Clone, Copy)]
pub struct ElementContext<'a> {
    pub is_document: bool,
    pub tag_name: &'a str,
    pub id: Option<&'a str>,
    pub classes: &'a [String],
}

impl Selector {
    pub fn parse(s: &str) -> DomResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DomError::InvalidSelector(s.to_string()));
        }
        if s == DOCUMENT_SELECTOR {
            return Ok(Self {
                document: true,
                ..Self::default()
            });
        }

        let mut selector = Self::default();
        let mut rest = s;

        // leading tag or universal
        let tag_end = rest.find(['.', '#']).unwrap_or(rest.len());
        let tag = &rest[..tag_end];
        if !tag.is_empty() && tag != "*" {
            selector.tag = Some(tag.to_ascii_lowercase());
        }
        rest = &rest[tag_end..];

        while !rest.is_empty() {
            let marker = rest.as_bytes()[0];
            let body = &rest[1..];
            let end = body.find(['.', '#']).unwrap_or(body.len());
            let name = &body[..end];

            if name.is_empty() || name.contains(|c: char| c.is_whitespace() || ":[>+~,".contains(c)) {
                return Err(DomError::InvalidSelector(s.to_string()));
            }

            match marker {
                b'.' => selector.classes.push(name.to_string()),
                _ => selector.id = Some(name.to_string()),
            }
            rest = &body[end..];
        }

        if let Some(tag) = &selector.tag {
            if tag.contains(|c: char| !c.is_ascii_alphanumeric() && c != '-') {
                return Err(DomError::InvalidSelector(s.to_string()));
            }
        }

        Ok(selector)
    }

    pub fn matches(&self, element: &ElementContext<'_>) -> bool {
        if self.document {
            return element.is_document;
        }
        if element.is_document {
            return false;
        }
        if let Some(tag) = &self.tag {
            if !element.tag_name.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id != Some(id.as_str()) {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|class| element.classes.iter().any(|c| c == class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element<'a>(tag: &'a str, id: Option<&'a str>, classes: &'a [String]) -> ElementContext<'a> {
        ElementContext {
            is_document: false,
            tag_name: tag,
            id,
            classes,
        }
    }

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("div.b-select.b-select_state_active#main").unwrap();
        assert_eq!(sel.tag.as_deref(), Some("div"));
        assert_eq!(sel.id.as_deref(), Some("main"));
        assert_eq!(sel.classes, vec!["b-select", "b-select_state_active"]);

        assert!(Selector::parse(".b-select").unwrap().tag.is_none());
        assert!(Selector::parse("*").unwrap().tag.is_none());
        assert!(Selector::parse("document").unwrap().document);
    }

    #[test]
    fn test_parse_rejects() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse(".a:hover").is_err());
        assert!(Selector::parse("div .a").is_err());
    }

    #[test]
    fn test_matches() {
        let classes = vec!["b-menu".to_string(), "b-menu_open".to_string()];
        let ctx = element("div", Some("nav"), &classes);

        assert!(Selector::parse(".b-menu").unwrap().matches(&ctx));
        assert!(Selector::parse("div.b-menu.b-menu_open").unwrap().matches(&ctx));
        assert!(Selector::parse("#nav").unwrap().matches(&ctx));
        assert!(!Selector::parse("span.b-menu").unwrap().matches(&ctx));
        assert!(!Selector::parse(".b-menu_closed").unwrap().matches(&ctx));
        assert!(!Selector::parse("document").unwrap().matches(&ctx));
    }
}
