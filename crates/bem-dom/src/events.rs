//! Delegated listeners
//!
//! Listeners live on a root selector and fire for bubbling events whose
//! current node matches their selector. One listener per
//! (root, event, selector); binding the same triple again replaces the
//! handler in place so dispatch order stays stable.

use bem_decl::{DelegatedHandler, NodeQuery};

use crate::{DomResult, Selector};

pub struct Listener<H: NodeQuery> {
    pub root: String,
    pub event: String,
    pub selector: String,
    pub(crate) root_match: Selector,
    pub(crate) target_match: Selector,
    pub(crate) handler: DelegatedHandler<H>,
}

impl<H: NodeQuery> Listener<H> {
    fn is(&self, root: &str, event: &str, selector: &str) -> bool {
        self.root == root && self.event == event && self.selector == selector
    }
}

/// Ordered listener table
pub struct ListenerList<H: NodeQuery> {
    listeners: Vec<Listener<H>>,
}

impl<H: NodeQuery> Default for ListenerList<H> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }
}

impl<H: NodeQuery> ListenerList<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or replace the listener for (root, event, selector)
    pub fn bind(
        &mut self,
        root: &str,
        event: &str,
        selector: &str,
        handler: DelegatedHandler<H>,
    ) -> DomResult<()> {
        let root_match = Selector::parse(root)?;
        let target_match = Selector::parse(selector)?;
        let event = event.to_ascii_lowercase();

        if let Some(existing) = self
            .listeners
            .iter_mut()
            .find(|l| l.is(root, &event, selector))
        {
            existing.handler = handler;
            return Ok(());
        }

        self.listeners.push(Listener {
            root: root.to_string(),
            event,
            selector: selector.to_string(),
            root_match,
            target_match,
            handler,
        });
        Ok(())
    }

    pub fn unbind(&mut self, root: &str, event: &str, selector: &str) -> bool {
        let event = event.to_ascii_lowercase();
        let before = self.listeners.len();
        self.listeners.retain(|l| !l.is(root, &event, selector));
        self.listeners.len() != before
    }

    /// Listeners for `event`, in bind order
    pub fn for_event<'a>(&'a self, event: &'a str) -> impl Iterator<Item = &'a Listener<H>> + 'a {
        self.listeners.iter().filter(move |l| l.event == event)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}
