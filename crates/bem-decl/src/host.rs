//! Node-query capability the declaration engine binds against
//!
//! The engine never walks a tree itself. A host (a live document, a test
//! double) answers selector queries, stores class lists and dispatches
//! delegated events.

use std::fmt;
use std::rc::Rc;

/// Event delivered to delegated handlers
#[derive(Debug, Clone)]
pub struct Event<N> {
    /// Lowercase event name (`click`, `setmod`, `init`)
    pub name: String,
    /// Node the event was dispatched on
    pub target: N,
    /// Extra arguments (`setmod` carries `[key, value]`)
    pub detail: Vec<String>,
    propagation_stopped: bool,
}

impl<N> Event<N> {
    pub fn new(name: impl Into<String>, target: N) -> Self {
        Self {
            name: name.into(),
            target,
            detail: Vec::new(),
            propagation_stopped: false,
        }
    }

    pub fn with_detail(mut self, detail: Vec<String>) -> Self {
        self.detail = detail;
        self
    }

    /// Stop bubbling past the node currently handling the event
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Handler installed on a host: receives the host, the node matching the
/// delegated selector, and the event.
pub type DelegatedHandler<H> =
    Rc<dyn Fn(&mut H, &<H as NodeQuery>::Node, &mut Event<<H as NodeQuery>::Node>)>;

/// Where to emit an event
#[derive(Debug, Clone, Copy)]
pub enum EmitTarget<'a, N> {
    Node(&'a N),
    Selector(&'a str),
}

/// Node-query collaborator
pub trait NodeQuery: Sized {
    type Node: Clone + PartialEq + fmt::Debug;

    /// All nodes matching `selector`, in document order
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Class identifiers of `node`, in attribute order
    fn read_class_list(&self, node: &Self::Node) -> Vec<String>;

    /// Replace the class identifiers of `node`
    fn write_class_list(&mut self, node: &Self::Node, classes: Vec<String>);

    /// Closest ancestor-or-self of `node` matching `selector`
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// Descendants of `node` matching `selector`
    fn find_within(&self, node: &Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Install `handler` for `event` on nodes matching `selector` below
    /// `root`. A binding for the same (root, event, selector) is replaced.
    fn delegate_on(
        &mut self,
        root: &str,
        event: &str,
        selector: &str,
        handler: DelegatedHandler<Self>,
    );

    /// Remove the binding for (root, event, selector), if any
    fn undelegate(&mut self, root: &str, event: &str, selector: &str);

    /// Dispatch `event` synchronously on the target node(s)
    fn emit(&mut self, target: EmitTarget<'_, Self::Node>, event: &str, detail: &[String]);
}
