//! fOS BEM
//!
//! Block-Element-Modifier naming engine with declarative event binding.
//!
//! # Components
//! - [`syntax`]: configurable syntax, classifier, synthesizer, modifier store
//! - [`decl`]: declarations expanded into delegated (selector, event) bindings
//! - [`dom`]: in-memory document host (feature `dom`)
//!
//! # Example
//! ```rust
//! use std::rc::Rc;
//!
//! use bem::dom::{Document, NodeId};
//! use bem::{Bem, Config, Declaration, Event, SharedSyntax};
//!
//! fn on_click(syntax: &SharedSyntax, doc: &mut Document, node: &NodeId, _: &mut Event<NodeId>) {
//!     bem::del_mod(&syntax.current(), doc, node, "open", None);
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut bem = Bem::new(Config::default())?;
//! let mut doc = Document::new();
//! let select = doc.element(NodeId::ROOT, "div", "b-select")?;
//!
//! let scope = Rc::new(bem.shared_syntax());
//! bem.declare(&mut doc, "b-select", Declaration::new().on("onClick", on_click), scope)?;
//!
//! bem.set_mod(&mut doc, &select, "open", None)?;
//! assert!(doc.has_class(select, "b-select_open"));
//!
//! doc.dispatch(select, "click", &[]);
//! assert!(!bem.has_mod(&doc, &select, "open", None));
//! # Ok(())
//! # }
//! ```

mod config;
mod engine;
mod nodes;

pub use config::Config;
pub use engine::Bem;
pub use nodes::{
    block, block_elem, by_mod, by_not_mod, del_mod, find_elem, get_mod, has_mod, mods, set_mod,
};

pub use bem_decl::{DeclConfig, DeclError, Declaration, Event, Handler, NodeQuery};
pub use bem_syntax::{
    ModValue, Modifiers, NameDescriptor, ParsedName, PartialSyntax, SelectorSource, SharedSyntax,
    Syntax, SyntaxConfig, SyntaxError,
};

// Re-export sub-crates for advanced usage
pub use bem_decl as decl;
#[cfg(feature = "dom")]
pub use bem_dom as dom;
pub use bem_syntax as syntax;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for facade operations
pub type BemResult<T> = Result<T, BemError>;

/// Facade error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BemError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Decl(#[from] DeclError),

    /// Modifier edits need a block or element identifier to attach to
    #[error("Node {0} carries no block or element identifier")]
    NoBase(String),
}
