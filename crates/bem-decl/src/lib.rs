//! fOS BEM Declarations
//!
//! Binds nested event declarations to BEM selectors.
//!
//! A declaration maps event keys (`onClick`) to handlers and element keys
//! (`listItem`) to nested declarations. Declaring it against a block expands
//! every scope into a concrete selector (`.b-select`, `.b-select__list-item`)
//! and installs one delegated dispatcher per (selector, event) on the host.
//!
//! # Example
//! ```rust
//! # use bem_decl::{DelegatedHandler, EmitTarget, NodeQuery};
//! # #[derive(Default)]
//! # struct Page;
//! # impl NodeQuery for Page {
//! #     type Node = usize;
//! #     fn query_all(&self, _: &str) -> Vec<usize> { Vec::new() }
//! #     fn read_class_list(&self, _: &usize) -> Vec<String> { Vec::new() }
//! #     fn write_class_list(&mut self, _: &usize, _: Vec<String>) {}
//! #     fn closest(&self, _: &usize, _: &str) -> Option<usize> { None }
//! #     fn find_within(&self, _: &usize, _: &str) -> Vec<usize> { Vec::new() }
//! #     fn delegate_on(&mut self, _: &str, _: &str, _: &str, _: DelegatedHandler<Self>) {}
//! #     fn undelegate(&mut self, _: &str, _: &str, _: &str) {}
//! #     fn emit(&mut self, _: EmitTarget<'_, usize>, _: &str, _: &[String]) {}
//! # }
//! use std::rc::Rc;
//!
//! use bem_decl::{DeclConfig, Declaration, Declarator, Event};
//! use bem_syntax::Syntax;
//!
//! fn noop(_: &(), _: &mut Page, _: &usize, _: &mut Event<usize>) {}
//!
//! let syntax = Syntax::default();
//! let mut page = Page::default();
//! let mut declarator = Declarator::new(DeclConfig::default());
//!
//! let resolved = declarator.declare(
//!     &syntax,
//!     &mut page,
//!     "b-select",
//!     Declaration::new()
//!         .on("onClick", noop)
//!         .element("listItem", Declaration::new().on("onMouseover", noop)),
//!     Rc::new(()),
//! )?;
//!
//! assert_eq!(resolved, ".b-select");
//! assert!(declarator.registry().handlers(".b-select__list-item", "mouseover").is_some());
//! # Ok::<(), bem_decl::DeclError>(())
//! ```

mod host;
mod declaration;
mod registry;
mod declarator;

pub use host::{DelegatedHandler, EmitTarget, Event, NodeQuery};
pub use declaration::{DeclEntry, Declaration, DeclarationNode, Handler, RawValue};
pub use registry::{BindingKey, HandlerRegistry};
pub use declarator::Declarator;

use serde::{Deserialize, Serialize};

/// Result type for declaration operations
pub type DeclResult<T> = Result<T, DeclError>;

/// Declaration error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclError {
    #[error("Malformed declaration at '{key}': {reason}")]
    Shape { key: String, reason: String },

    #[error("Name error: {0}")]
    Name(#[from] bem_syntax::SyntaxError),
}

/// Declaration engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclConfig {
    /// Delegation root selector
    pub root: String,
    /// Prefix marking event keys
    pub event_prefix: String,
    /// Emitted on every declared scope once bound
    pub ready_event: String,
    /// Stop bubbling after a dispatcher ran its handlers
    pub stop_propagation: bool,
}

impl Default for DeclConfig {
    fn default() -> Self {
        Self {
            root: "document".to_string(),
            event_prefix: "on".to_string(),
            ready_event: "init".to_string(),
            stop_propagation: true,
        }
    }
}
