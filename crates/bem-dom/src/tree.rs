//! Document tree (arena-based allocation)

use crate::{DomError, DomResult, Node, NodeId};

/// Arena-based tree; index 0 is always the document node
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::document()],
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the document node exists from construction
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a detached node
    pub fn create(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.create(Node::element(tag))
    }

    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.create(Node::text(content))
    }

    /// Append `child` as the last child of `parent`, detaching it first
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> DomResult<NodeId> {
        if self.get(parent).is_none() {
            return Err(DomError::NotFound(parent));
        }
        let Some(node) = self.get(child) else {
            return Err(DomError::NotFound(child));
        };
        if node.is_document() || parent == child || self.ancestors(parent).any(|a| a == child) {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.detach(child);

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_none() {
            self.nodes[parent.index()].first_child = child;
        } else {
            self.nodes[last.index()].next_sibling = child;
        }
        self.nodes[parent.index()].last_child = child;

        Ok(child)
    }

    /// Unlink `id` from its parent and siblings
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if parent.is_none() {
            return;
        }

        if prev.is_none() {
            self.nodes[parent.index()].first_child = next;
        } else {
            self.nodes[prev.index()].next_sibling = next;
        }
        if next.is_none() {
            self.nodes[parent.index()].last_child = prev;
        } else {
            self.nodes[next.index()].prev_sibling = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.first_child),
        }
    }

    /// Strict ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).map_or(NodeId::NONE, |n| n.parent),
        }
    }

    /// Strict descendants in document (pre-)order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).collect();
        stack.reverse();

        while let Some(current) = stack.pop() {
            out.push(current);
            let start = stack.len();
            stack.extend(self.children(current));
            stack[start..].reverse();
        }
        out
    }
}

pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Children<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.next_sibling);
        Some(current)
    }
}

pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next.is_none() {
            return None;
        }
        let current = self.next;
        self.next = self.tree.get(current).map_or(NodeId::NONE, |n| n.parent);
        Some(current)
    }
}
