//! Engine Configuration

use bem_decl::DeclConfig;
use bem_syntax::SyntaxConfig;
use serde::{Deserialize, Serialize};

/// Engine configuration options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Naming syntax
    pub syntax: SyntaxConfig,

    /// Declaration engine
    pub decl: DeclConfig,
}
