//! Declaration Engine
//!
//! Expands declarations into (selector, event) bindings and installs them on
//! a [`NodeQuery`] host. Top-level declarations are logged, one entry per
//! selector, so that [`Declarator::reload_all`] can rebuild every binding
//! after the document or the syntax changed.

use std::rc::Rc;

use bem_syntax::{split_selector, SelectorSource, Syntax};

use crate::declaration::{DeclEntry, Declaration, DeclarationNode, Handler};
use crate::host::{DelegatedHandler, EmitTarget, Event, NodeQuery};
use crate::registry::{BindingKey, HandlerRegistry};
use crate::{DeclConfig, DeclError, DeclResult};

type BoundNode<H> = DeclarationNode<DelegatedHandler<H>>;

/// Logged top-level declaration, handlers already bound to their scope
struct LoggedDeclaration<H: NodeQuery> {
    selector: SelectorSource,
    node: Rc<BoundNode<H>>,
}

/// Bindings and scopes produced by expanding one declaration
struct Plan<H: NodeQuery> {
    /// Resolved scope selectors, outermost first
    scopes: Vec<String>,
    bindings: Vec<(BindingKey, Vec<DelegatedHandler<H>>)>,
}

impl<H: NodeQuery> Plan<H> {
    fn new() -> Self {
        Self {
            scopes: Vec::new(),
            bindings: Vec::new(),
        }
    }

    fn push(&mut self, selector: &str, event: &str, handlers: &[DelegatedHandler<H>]) {
        let existing = self
            .bindings
            .iter_mut()
            .find(|((s, e), _)| s == selector && e == event);

        match existing {
            Some((_, bound)) => bound.extend(handlers.iter().cloned()),
            None => self.bindings.push((
                (selector.to_string(), event.to_string()),
                handlers.to_vec(),
            )),
        }
    }
}

/// Declaration engine
pub struct Declarator<H: NodeQuery> {
    config: DeclConfig,
    registry: HandlerRegistry<H>,
    log: Vec<LoggedDeclaration<H>>,
}

impl<H: NodeQuery + 'static> Default for Declarator<H> {
    fn default() -> Self {
        Self::new(DeclConfig::default())
    }
}

impl<H: NodeQuery + 'static> Declarator<H> {
    pub fn new(config: DeclConfig) -> Self {
        Self {
            config,
            registry: HandlerRegistry::new(),
            log: Vec::new(),
        }
    }

    pub fn config(&self) -> &DeclConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry<H> {
        &self.registry
    }

    /// Logged top-level selectors, in declaration order
    pub fn declarations(&self) -> impl Iterator<Item = &SelectorSource> {
        self.log.iter().map(|entry| &entry.selector)
    }

    /// Declare behavior for `selector`.
    ///
    /// The whole declaration is validated and expanded before anything is
    /// bound; on error nothing from this call is installed or logged.
    /// Declaring a selector already in the log supersedes that entry: its
    /// bindings are dropped and the new declaration moves to the end of the
    /// log. Returns the resolved top-level selector.
    pub fn declare<S: 'static>(
        &mut self,
        syntax: &Syntax,
        host: &mut H,
        selector: impl Into<SelectorSource>,
        declaration: Declaration<Handler<S, H>>,
        scope: Rc<S>,
    ) -> DeclResult<String> {
        let selector = selector.into();

        let node = DeclarationNode::parse(declaration, &self.config.event_prefix)
            .inspect_err(|e| tracing::warn!("Declaration for {:?} rejected: {}", selector, e))?;
        let node = Rc::new(node.map(&|handler| bind_scope(handler, Rc::clone(&scope))));

        let plan = self
            .plan(syntax, &selector, &node)
            .inspect_err(|e| tracing::warn!("Declaration for {:?} rejected: {}", selector, e))?;

        if let Some(index) = self.log.iter().position(|entry| entry.selector == selector) {
            let previous = self.log.remove(index);
            tracing::debug!("Redeclaring {:?}", selector);
            self.unbind(syntax, host, &previous);
        }

        let resolved = self.install(host, plan);
        self.log.push(LoggedDeclaration { selector, node });
        Ok(resolved)
    }

    /// Drop every binding and re-run the logged declarations against the
    /// current host and syntax. Declarations that no longer expand are
    /// dropped from the log; their errors are returned.
    pub fn reload_all(&mut self, syntax: &Syntax, host: &mut H) -> Vec<DeclError> {
        for (selector, event) in self.registry.clear() {
            host.undelegate(&self.config.root, &event, &selector);
        }

        let log = std::mem::take(&mut self.log);
        let total = log.len();
        let mut failures = Vec::new();

        for entry in log {
            match self.plan(syntax, &entry.selector, &entry.node) {
                Ok(plan) => {
                    self.install(host, plan);
                    self.log.push(entry);
                }
                Err(e) => {
                    tracing::warn!("Dropping declaration {:?} on reload: {}", entry.selector, e);
                    failures.push(e);
                }
            }
        }

        tracing::info!("Reloaded {} of {} declarations", self.log.len(), total);
        failures
    }

    /// Remove the logged declaration for `selector` together with its
    /// bindings. Returns how many entries were removed.
    pub fn forget(&mut self, syntax: &Syntax, host: &mut H, selector: &SelectorSource) -> usize {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.log)
            .into_iter()
            .partition(|entry| &entry.selector == selector);
        self.log = kept;

        for entry in &removed {
            self.unbind(syntax, host, entry);
        }

        removed.len()
    }

    /// Remove the bindings `entry` expands to under `syntax`
    fn unbind(&mut self, syntax: &Syntax, host: &mut H, entry: &LoggedDeclaration<H>) {
        let Ok(plan) = self.plan(syntax, &entry.selector, &entry.node) else {
            return;
        };
        for ((selector, event), _) in plan.bindings {
            self.registry.remove(&selector, &event);
            host.undelegate(&self.config.root, &event, &selector);
        }
    }

    fn plan(
        &self,
        syntax: &Syntax,
        selector: &SelectorSource,
        node: &BoundNode<H>,
    ) -> DeclResult<Plan<H>> {
        let resolved = syntax.build_selector(selector, ".")?;
        let block = match selector {
            SelectorSource::Name(descriptor) => Some(descriptor.block.clone()),
            SelectorSource::Raw(_) => split_selector(&resolved)
                .into_iter()
                .rev()
                .find_map(|class| syntax.block_of(class)),
        };

        let mut plan = Plan::new();
        expand(syntax, resolved, block.as_deref(), node, &mut plan)?;
        Ok(plan)
    }

    /// Bind every planned (selector, event) and announce the scopes
    fn install(&mut self, host: &mut H, plan: Plan<H>) -> String {
        for ((selector, event), handlers) in plan.bindings {
            tracing::debug!("Binding {} handler(s) for '{}' on {}", handlers.len(), event, selector);
            let dispatcher = self.dispatcher(handlers.clone());
            self.registry.replace(&selector, &event, handlers);
            host.delegate_on(&self.config.root, &event, &selector, dispatcher);
        }

        for scope in &plan.scopes {
            host.emit(EmitTarget::Selector(scope), &self.config.ready_event, &[]);
        }

        plan.scopes.into_iter().next().unwrap_or_default()
    }

    /// One host binding running `handlers` in order
    fn dispatcher(&self, handlers: Vec<DelegatedHandler<H>>) -> DelegatedHandler<H> {
        let stop = self.config.stop_propagation;

        Rc::new(move |host: &mut H, node: &H::Node, event: &mut Event<H::Node>| {
            for handler in &handlers {
                handler(host, node, event);
            }
            if stop {
                event.stop_propagation();
            }
        })
    }
}

fn bind_scope<S: 'static, H: NodeQuery + 'static>(
    handler: Handler<S, H>,
    scope: Rc<S>,
) -> DelegatedHandler<H> {
    Rc::new(move |host: &mut H, node: &H::Node, event: &mut Event<H::Node>| {
        handler(&scope, host, node, event)
    })
}

/// Walk one scope. Elements nest under the block of the outermost scope,
/// so `list > item` resolves to `block__item`, not `block__list__item`.
fn expand<H: NodeQuery>(
    syntax: &Syntax,
    selector: String,
    block: Option<&str>,
    node: &BoundNode<H>,
    plan: &mut Plan<H>,
) -> DeclResult<()> {
    plan.scopes.push(selector.clone());

    for entry in node.entries() {
        match entry {
            DeclEntry::Event { event, handlers } => plan.push(&selector, event, handlers),
            DeclEntry::Element { key, element, node } => {
                let block = block.ok_or_else(|| DeclError::Shape {
                    key: key.clone(),
                    reason: format!("selector '{selector}' names no block"),
                })?;
                let child = format!(".{}", syntax.build_element_name(block, element)?);
                expand(syntax, child, Some(block), node, plan)?;
            }
        }
    }

    Ok(())
}
