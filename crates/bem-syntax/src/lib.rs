//! fOS BEM Syntax
//!
//! Block-Element-Modifier naming for class identifiers.
//!
//! Features:
//! - Configurable syntax (name pattern, prefix, separators)
//! - Classification of identifiers into block, element and modifier
//! - Synthesis of canonical identifiers and selectors
//! - Modifier extraction and minimal class-list edits
//! - [`SharedSyntax`] handles and a process-wide default in [`global`]
//!
//! # Example
//! ```rust
//! use bem_syntax::{Syntax, ParsedName, ModValue};
//!
//! let syntax = Syntax::default();
//! let parsed = syntax.classify("b-select__list-item_state_active");
//!
//! assert_eq!(parsed, ParsedName::Modifier {
//!     base: "b-select__list-item".into(),
//!     key: "state".into(),
//!     value: ModValue::Value("active".into()),
//! });
//! ```

mod config;
mod syntax;
mod classify;
mod synth;
mod modifiers;
mod shared;
pub mod global;

pub use config::{
    PartialSyntax, SyntaxConfig, DEFAULT_ELEMENT_SEPARATOR, DEFAULT_MODIFIER_DELIMITER,
    DEFAULT_MODIFIER_SEPARATOR, DEFAULT_NAME_PATTERN,
};
pub use syntax::Syntax;
pub use classify::{ModValue, NameKind, ParsedName};
pub use synth::{
    camel_to_element, split_selector, ModifierDescriptor, NameDescriptor, SelectorSource,
};
pub use modifiers::{DeleteEdit, Modifiers, SetEdit};
pub use shared::SharedSyntax;

/// Result type for syntax operations
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Syntax error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Invalid syntax configuration: {0}")]
    Config(String),

    #[error("Invalid name segment '{segment}' (expected {pattern})")]
    InvalidName { segment: String, pattern: String },
}
