//! Engine - Main entry point

use std::rc::Rc;
use std::sync::Arc;

use bem_decl::{DeclConfig, DeclError, Declaration, Declarator, Handler, NodeQuery};
use bem_syntax::{ModValue, Modifiers, PartialSyntax, SelectorSource, SharedSyntax, Syntax};

use crate::{nodes, BemResult, Config};

/// Syntax plus declaration engine, bound to one host type
///
/// The syntax lives behind a [`SharedSyntax`] handle. Handlers that need it
/// should keep a clone of [`Bem::shared_syntax`] in their scope and read
/// [`SharedSyntax::current`] on every call.
pub struct Bem<H: NodeQuery> {
    syntax: SharedSyntax,
    declarator: Declarator<H>,
}

impl<H: NodeQuery + 'static> Bem<H> {
    /// Create an engine; fails when the syntax configuration is invalid
    pub fn new(config: Config) -> BemResult<Self> {
        let syntax = Syntax::new(config.syntax)?;
        Ok(Self::with_syntax(syntax.into(), config.decl))
    }

    /// Engine over an existing handle, e.g. [`bem_syntax::global::shared`]
    pub fn with_syntax(syntax: SharedSyntax, decl: DeclConfig) -> Self {
        tracing::info!("fOS BEM {} initialized", crate::VERSION);
        Self {
            syntax,
            declarator: Declarator::new(decl),
        }
    }

    /// Syntax active right now
    pub fn syntax(&self) -> Arc<Syntax> {
        self.syntax.current()
    }

    pub fn shared_syntax(&self) -> SharedSyntax {
        self.syntax.clone()
    }

    pub fn declarator(&self) -> &Declarator<H> {
        &self.declarator
    }

    /// Merge `partial` into the active syntax. Existing bindings keep their
    /// old selectors until [`Bem::reload_all`].
    pub fn configure(&mut self, partial: &PartialSyntax) -> BemResult<()> {
        Ok(self.syntax.configure(partial)?)
    }

    pub fn reset(&mut self) {
        self.syntax.reset();
    }

    pub fn declare<S: 'static>(
        &mut self,
        host: &mut H,
        selector: impl Into<SelectorSource>,
        declaration: Declaration<Handler<S, H>>,
        scope: Rc<S>,
    ) -> BemResult<String> {
        let syntax = self.syntax.current();
        Ok(self
            .declarator
            .declare(&syntax, host, selector, declaration, scope)?)
    }

    /// Rebuild every binding; returns errors of dropped declarations
    pub fn reload_all(&mut self, host: &mut H) -> Vec<DeclError> {
        let syntax = self.syntax.current();
        self.declarator.reload_all(&syntax, host)
    }

    pub fn forget(&mut self, host: &mut H, selector: impl Into<SelectorSource>) -> usize {
        let syntax = self.syntax.current();
        self.declarator.forget(&syntax, host, &selector.into())
    }

    pub fn mods(&self, host: &H, node: &H::Node) -> Modifiers {
        nodes::mods(&self.syntax(), host, node)
    }

    pub fn get_mod(&self, host: &H, node: &H::Node, key: &str) -> Option<ModValue> {
        nodes::get_mod(&self.syntax(), host, node, key)
    }

    pub fn has_mod(&self, host: &H, node: &H::Node, key: &str, value: Option<&str>) -> bool {
        nodes::has_mod(&self.syntax(), host, node, key, value)
    }

    pub fn set_mod(&self, host: &mut H, node: &H::Node, key: &str, value: Option<&str>) -> BemResult<()> {
        nodes::set_mod(&self.syntax(), host, node, key, value)
    }

    pub fn del_mod(&self, host: &mut H, node: &H::Node, key: &str, value: Option<&str>) -> bool {
        nodes::del_mod(&self.syntax(), host, node, key, value)
    }

    pub fn by_mod(&self, host: &H, candidates: &[H::Node], key: &str, value: Option<&str>) -> Vec<H::Node> {
        nodes::by_mod(&self.syntax(), host, candidates, key, value)
    }

    pub fn by_not_mod(&self, host: &H, candidates: &[H::Node], key: &str, value: Option<&str>) -> Vec<H::Node> {
        nodes::by_not_mod(&self.syntax(), host, candidates, key, value)
    }

    pub fn find_elem(&self, host: &H, node: &H::Node, element: &str) -> BemResult<Vec<H::Node>> {
        nodes::find_elem(&self.syntax(), host, node, element)
    }

    pub fn block(&self, host: &H, node: &H::Node) -> Option<H::Node> {
        nodes::block(&self.syntax(), host, node)
    }

    pub fn block_elem(&self, host: &H, node: &H::Node, element: &str) -> BemResult<Vec<H::Node>> {
        nodes::block_elem(&self.syntax(), host, node, element)
    }
}

impl<H: NodeQuery + 'static> Default for Bem<H> {
    fn default() -> Self {
        Self {
            syntax: SharedSyntax::default(),
            declarator: Declarator::default(),
        }
    }
}
