//! Handler registry
//!
//! One ordered handler sequence per (selector, event). Declaring the same
//! pair again replaces the sequence instead of stacking onto it.

use std::collections::HashMap;

use crate::host::{DelegatedHandler, NodeQuery};

/// (selector, event)
pub type BindingKey = (String, String);

pub struct HandlerRegistry<H: NodeQuery> {
    bindings: HashMap<BindingKey, Vec<DelegatedHandler<H>>>,
}

impl<H: NodeQuery> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<H: NodeQuery> HandlerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `handlers` for (selector, event), returning the sequence it
    /// replaced.
    pub fn replace(
        &mut self,
        selector: &str,
        event: &str,
        handlers: Vec<DelegatedHandler<H>>,
    ) -> Option<Vec<DelegatedHandler<H>>> {
        self.bindings
            .insert((selector.to_string(), event.to_string()), handlers)
    }

    pub fn remove(&mut self, selector: &str, event: &str) -> Option<Vec<DelegatedHandler<H>>> {
        self.bindings
            .remove(&(selector.to_string(), event.to_string()))
    }

    pub fn handlers(&self, selector: &str, event: &str) -> Option<&[DelegatedHandler<H>]> {
        self.bindings
            .get(&(selector.to_string(), event.to_string()))
            .map(Vec::as_slice)
    }

    /// Every bound (selector, event)
    pub fn keys(&self) -> impl Iterator<Item = &BindingKey> {
        self.bindings.keys()
    }

    /// Drain every binding
    pub fn clear(&mut self) -> Vec<BindingKey> {
        self.bindings.drain().map(|(key, _)| key).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
