//! Document nodes

use crate::{ClassList, NodeId};

/// Arena node with sibling links
#[derive(Debug, Clone)]
pub struct Node {
    pub parent: NodeId,
    pub first_child: NodeId,
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
    pub data: NodeData,
}

#[derive(Debug, Clone)]
pub enum NodeData {
    Document,
    Element(ElementData),
    Text(String),
}

/// Element payload
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    pub id: Option<String>,
    pub classes: ClassList,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: ClassList::new(),
        }
    }
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    #[inline]
    pub fn is_document(&self) -> bool {
        matches!(self.data, NodeData::Document)
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(el) => Some(el),
            _ => None,
        }
    }
}
