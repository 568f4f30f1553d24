//! Document
//!
//! Tree plus delegated listeners. Implements [`NodeQuery`] so declarations
//! and modifier helpers can run against it.

use std::fmt;
use std::rc::Rc;

use bem_decl::{DelegatedHandler, EmitTarget, Event, NodeQuery};

use crate::{
    ClassList, DomError, DomResult, DomTree, ElementContext, ListenerList, NodeData, NodeId, Selector,
};

pub struct Document {
    tree: DomTree,
    listeners: ListenerList<Document>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.tree.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            tree: DomTree::new(),
            listeners: ListenerList::new(),
        }
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn listeners(&self) -> &ListenerList<Document> {
        &self.listeners
    }

    /// Create `<tag class="classes">` as the last child of `parent`
    pub fn element(&mut self, parent: NodeId, tag: &str, classes: &str) -> DomResult<NodeId> {
        let id = self.tree.create_element(tag);
        if let Some(el) = self.tree.get_mut(id).and_then(|n| n.as_element_mut()) {
            el.classes = ClassList::parse(classes);
        }
        self.tree.append_child(parent, id)
    }

    pub fn text(&mut self, parent: NodeId, content: &str) -> DomResult<NodeId> {
        let id = self.tree.create_text(content);
        self.tree.append_child(parent, id)
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) -> DomResult<()> {
        let el = self
            .tree
            .get_mut(node)
            .ok_or(DomError::NotFound(node))?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(node))?;
        el.id = Some(id.to_string());
        Ok(())
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        self.tree.append_child(parent, child)
    }

    pub fn class_list(&self, node: NodeId) -> Option<&ClassList> {
        self.tree.get(node)?.as_element().map(|el| &el.classes)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.class_list(node).is_some_and(|list| list.contains(class))
    }

    /// Concatenated text of `node` and its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        std::iter::once(node)
            .chain(self.tree.descendants(node))
            .filter_map(|n| match &self.tree.get(n)?.data {
                NodeData::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replace the children of `node` with a single text node
    pub fn set_text_content(&mut self, node: NodeId, content: &str) -> DomResult<NodeId> {
        let children: Vec<NodeId> = self.tree.children(node).collect();
        for child in children {
            self.tree.detach(child);
        }
        self.text(node, content)
    }

    /// Dispatch `event` on `target` and bubble it towards the document.
    ///
    /// At each node every listener whose selector matches runs in bind
    /// order; bubbling ends after the node on which propagation was
    /// stopped.
    pub fn dispatch(&mut self, target: NodeId, event: &str, detail: &[String]) -> Event<NodeId> {
        let name = event.to_ascii_lowercase();
        let mut ev = Event::new(name.clone(), target).with_detail(detail.to_vec());

        if self.tree.get(target).is_none() {
            tracing::warn!("Dispatch of '{}' on missing node {}", name, target);
            return ev;
        }

        let path: Vec<NodeId> = std::iter::once(target).chain(self.tree.ancestors(target)).collect();

        for current in path {
            let handlers: Vec<DelegatedHandler<Document>> = self
                .listeners
                .for_event(&name)
                .filter(|l| self.delegates_to(current, &l.root_match, &l.target_match))
                .map(|l| Rc::clone(&l.handler))
                .collect();

            if !handlers.is_empty() {
                tracing::trace!("Dispatching '{}' to {} handler(s) on {}", name, handlers.len(), current);
            }
            for handler in handlers {
                handler(self, &current, &mut ev);
            }

            if ev.is_propagation_stopped() {
                break;
            }
        }

        ev
    }

    fn context(&self, node: NodeId) -> Option<ElementContext<'_>> {
        let node = self.tree.get(node)?;
        if node.is_document() {
            return Some(ElementContext {
                is_document: true,
                tag_name: "",
                id: None,
                classes: &[],
            });
        }
        node.as_element().map(|el| ElementContext {
            is_document: false,
            tag_name: &el.tag,
            id: el.id.as_deref(),
            classes: el.classes.tokens(),
        })
    }

    fn matches(&self, node: NodeId, selector: &Selector) -> bool {
        self.context(node).is_some_and(|ctx| selector.matches(&ctx))
    }

    /// `node` matches `target` and lies below a node matching `root`
    fn delegates_to(&self, node: NodeId, root: &Selector, target: &Selector) -> bool {
        self.matches(node, target) && self.tree.ancestors(node).any(|a| self.matches(a, root))
    }

    fn parse(&self, selector: &str) -> Option<Selector> {
        Selector::parse(selector)
            .inspect_err(|e| tracing::warn!("{}", e))
            .ok()
    }
}

impl NodeQuery for Document {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(selector) = self.parse(selector) else {
            return Vec::new();
        };
        std::iter::once(NodeId::ROOT)
            .chain(self.tree.descendants(NodeId::ROOT))
            .filter(|&n| self.matches(n, &selector))
            .collect()
    }

    fn read_class_list(&self, node: &NodeId) -> Vec<String> {
        self.class_list(*node).map(ClassList::to_vec).unwrap_or_default()
    }

    fn write_class_list(&mut self, node: &NodeId, classes: Vec<String>) {
        match self.tree.get_mut(*node).and_then(|n| n.as_element_mut()) {
            Some(el) => el.classes.set(classes),
            None => tracing::warn!("Cannot write class list of {}", node),
        }
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let selector = self.parse(selector)?;
        std::iter::once(*node)
            .chain(self.tree.ancestors(*node))
            .find(|&n| self.matches(n, &selector))
    }

    fn find_within(&self, node: &NodeId, selector: &str) -> Vec<NodeId> {
        let Some(selector) = self.parse(selector) else {
            return Vec::new();
        };
        self.tree
            .descendants(*node)
            .into_iter()
            .filter(|&n| self.matches(n, &selector))
            .collect()
    }

    fn delegate_on(
        &mut self,
        root: &str,
        event: &str,
        selector: &str,
        handler: DelegatedHandler<Self>,
    ) {
        if let Err(e) = self.listeners.bind(root, event, selector, handler) {
            tracing::warn!("Listener for '{}' on {} not bound: {}", event, selector, e);
        }
    }

    fn undelegate(&mut self, root: &str, event: &str, selector: &str) {
        self.listeners.unbind(root, event, selector);
    }

    fn emit(&mut self, target: EmitTarget<'_, NodeId>, event: &str, detail: &[String]) {
        match target {
            EmitTarget::Node(node) => {
                self.dispatch(*node, event, detail);
            }
            EmitTarget::Selector(selector) => {
                for node in self.query_all(selector) {
                    self.dispatch(node, event, detail);
                }
            }
        }
    }
}
