//! fOS BEM Document Host
//!
//! A small arena-backed document that implements [`bem_decl::NodeQuery`]:
//! class lists, compound selectors and delegated event dispatch with
//! bubbling. It lets declarations and modifier operations run without a
//! browser.
//!
//! # Example
//! ```rust
//! use bem_decl::NodeQuery;
//! use bem_dom::{Document, NodeId};
//!
//! let mut doc = Document::new();
//! let select = doc.element(NodeId::ROOT, "div", "b-select").unwrap();
//! let item = doc.element(select, "li", "b-select__list-item").unwrap();
//!
//! assert_eq!(doc.closest(&item, ".b-select"), Some(select));
//! ```

mod classlist;
mod document;
mod events;
mod node;
mod selector;
mod tree;

pub use classlist::ClassList;
pub use document::Document;
pub use events::{Listener, ListenerList};
pub use node::{ElementData, Node, NodeData};
pub use selector::{ElementContext, Selector, DOCUMENT_SELECTOR};
pub use tree::DomTree;

/// Node identifier (index into the arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The document node
    pub const ROOT: NodeId = NodeId(0);
    /// No node
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result type for document operations
pub type DomResult<T> = Result<T, DomError>;

/// Document operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NotFound(NodeId),

    #[error("Hierarchy request error: cannot append {child} to {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Unsupported selector: '{0}'")]
    InvalidSelector(String),
}
