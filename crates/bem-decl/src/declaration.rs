//! Declarations
//!
//! [`Declaration`] collects raw `key -> value` entries the way a caller
//! writes them; [`DeclarationNode::parse`] validates their shape once, up
//! front, into event and element entries.

use std::rc::Rc;

use crate::host::{Event, NodeQuery};
use crate::{DeclError, DeclResult};

/// User handler: shared scope, host, matched node, event
pub type Handler<S, H> = Rc<
    dyn Fn(&S, &mut H, &<H as NodeQuery>::Node, &mut Event<<H as NodeQuery>::Node>),
>;

/// Raw declaration value
pub enum RawValue<F> {
    /// One or more handlers, run in order
    Handlers(Vec<F>),
    /// Nested declaration for an element
    Nested(Declaration<F>),
}

/// Raw declaration: ordered `key -> value` entries
pub struct Declaration<F> {
    entries: Vec<(String, RawValue<F>)>,
}

impl<F> Default for Declaration<F> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<F> Declaration<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry, validated later by [`DeclarationNode::parse`]
    pub fn entry(mut self, key: impl Into<String>, value: RawValue<F>) -> Self {
        self.entries.push((key.into(), value));
        self
    }

    /// Handler sequence for an event key (`onClick`)
    pub fn on_all(self, key: impl Into<String>, handlers: Vec<F>) -> Self {
        self.entry(key, RawValue::Handlers(handlers))
    }

    /// Nested declaration for an element key (`listItem`)
    pub fn element(self, key: impl Into<String>, nested: Declaration<F>) -> Self {
        self.entry(key, RawValue::Nested(nested))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: 'static, H: NodeQuery + 'static> Declaration<Handler<S, H>> {
    /// Single handler for an event key (`onClick`)
    pub fn on(
        self,
        key: impl Into<String>,
        handler: impl Fn(&S, &mut H, &H::Node, &mut Event<H::Node>) + 'static,
    ) -> Self {
        self.on_all(key, vec![Rc::new(handler) as Handler<S, H>])
    }
}

/// Validated declaration entry
pub enum DeclEntry<F> {
    Event {
        /// Lowercase event name
        event: String,
        handlers: Vec<F>,
    },
    Element {
        /// Key as declared (`listItem`)
        key: String,
        /// Separator-joined element name (`list-item`)
        element: String,
        node: DeclarationNode<F>,
    },
}

/// Validated declaration tree
pub struct DeclarationNode<F> {
    entries: Vec<DeclEntry<F>>,
}

impl<F> DeclarationNode<F> {
    /// Validate a raw declaration. Event keys are `event_prefix` followed by
    /// the event name; other keys name elements. Fails on the first
    /// malformed entry, before anything is bound.
    pub fn parse(raw: Declaration<F>, event_prefix: &str) -> DeclResult<Self> {
        let mut entries = Vec::with_capacity(raw.entries.len());

        for (key, value) in raw.entries {
            if key.is_empty() {
                return Err(shape(&key, "empty key"));
            }

            match value {
                RawValue::Handlers(handlers) => {
                    let event = match key.strip_prefix(event_prefix) {
                        Some(name) if !name.is_empty() => name.to_lowercase(),
                        _ => {
                            return Err(shape(
                                &key,
                                &format!("handler key must start with '{event_prefix}'"),
                            ));
                        }
                    };
                    if handlers.is_empty() {
                        return Err(shape(&key, "empty handler list"));
                    }
                    entries.push(DeclEntry::Event { event, handlers });
                }
                RawValue::Nested(nested) => {
                    if is_event_key(&key, event_prefix) {
                        return Err(shape(&key, "event key cannot hold a nested declaration"));
                    }
                    let node = Self::parse(nested, event_prefix).map_err(|e| match e {
                        DeclError::Shape { key: inner, reason } => DeclError::Shape {
                            key: format!("{key}.{inner}"),
                            reason,
                        },
                        other => other,
                    })?;
                    entries.push(DeclEntry::Element {
                        element: bem_syntax::camel_to_element(&key),
                        key,
                        node,
                    });
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[DeclEntry<F>] {
        &self.entries
    }

    /// Rebuild the tree with every handler passed through `f`
    pub fn map<G>(self, f: &impl Fn(F) -> G) -> DeclarationNode<G> {
        let entries = self
            .entries
            .into_iter()
            .map(|entry| match entry {
                DeclEntry::Event { event, handlers } => DeclEntry::Event {
                    event,
                    handlers: handlers.into_iter().map(f).collect(),
                },
                DeclEntry::Element { key, element, node } => DeclEntry::Element {
                    key,
                    element,
                    node: node.map(f),
                },
            })
            .collect();

        DeclarationNode { entries }
    }
}

/// `onClick` with prefix `on`: prefix followed by an uppercase letter
fn is_event_key(key: &str, event_prefix: &str) -> bool {
    key.strip_prefix(event_prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

fn shape(key: &str, reason: &str) -> DeclError {
    DeclError::Shape {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Raw = Declaration<u32>;

    fn events(node: &DeclarationNode<u32>) -> Vec<(String, Vec<u32>)> {
        node.entries()
            .iter()
            .filter_map(|e| match e {
                DeclEntry::Event { event, handlers } => Some((event.clone(), handlers.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_parse_events_and_elements() {
        let raw = Raw::new()
            .on_all("onClick", vec![1])
            .on_all("onMouseOver", vec![2, 3])
            .element("listItem", Raw::new().on_all("onMouseout", vec![4]));

        let node = DeclarationNode::parse(raw, "on").unwrap();
        assert_eq!(
            events(&node),
            vec![("click".to_string(), vec![1]), ("mouseover".to_string(), vec![2, 3])]
        );

        match &node.entries()[2] {
            DeclEntry::Element { key, element, node } => {
                assert_eq!(key, "listItem");
                assert_eq!(element, "list-item");
                assert_eq!(events(node), vec![("mouseout".to_string(), vec![4])]);
            }
            _ => panic!("expected element entry"),
        }
    }

    #[test]
    fn test_handler_without_event_prefix() {
        let raw = Raw::new().on_all("click", vec![1]);
        let err = DeclarationNode::parse(raw, "on").err().unwrap();

        assert!(matches!(err, DeclError::Shape { ref key, .. } if key == "click"));
    }

    #[test]
    fn test_bare_prefix_and_empty_handlers() {
        assert!(DeclarationNode::parse(Raw::new().on_all("on", vec![1]), "on").is_err());
        assert!(DeclarationNode::parse(Raw::new().on_all("onClick", vec![]), "on").is_err());
        assert!(DeclarationNode::parse(Raw::new().on_all("", vec![1]), "on").is_err());
    }

    #[test]
    fn test_event_key_with_nested_value() {
        let raw = Raw::new().element("onSetMod", Raw::new());
        assert!(DeclarationNode::parse(raw, "on").is_err());

        // lowercase after the prefix is an element name
        let raw = Raw::new().element("online", Raw::new());
        assert!(DeclarationNode::parse(raw, "on").is_ok());
    }

    #[test]
    fn test_nested_error_names_path() {
        let raw = Raw::new().element("list", Raw::new().element("item", Raw::new().on_all("hover", vec![1])));
        let err = DeclarationNode::parse(raw, "on").err().unwrap();

        assert!(matches!(err, DeclError::Shape { ref key, .. } if key == "list.item.hover"));
    }

    #[test]
    fn test_custom_prefix() {
        let raw = Raw::new().on_all("handleClick", vec![1]);
        let node = DeclarationNode::parse(raw, "handle").unwrap();
        assert_eq!(events(&node), vec![("click".to_string(), vec![1])]);
    }

    #[test]
    fn test_map_handlers() {
        let raw = Raw::new()
            .on_all("onClick", vec![1, 2])
            .element("item", Raw::new().on_all("onClick", vec![3]));
        let node = DeclarationNode::parse(raw, "on").unwrap().map(&|h| h * 10);

        assert_eq!(events(&node), vec![("click".to_string(), vec![10, 20])]);
    }
}
