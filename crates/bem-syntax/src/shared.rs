//! Shared syntax handle
//!
//! One live [`Syntax`] behind a cloneable handle. Every clone observes a
//! reconfiguration made through any other clone; readers get the syntax
//! that is current at call time, never a copy taken earlier.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{PartialSyntax, Syntax, SyntaxResult};

#[derive(Debug, Clone, Default)]
pub struct SharedSyntax {
    inner: Arc<RwLock<Arc<Syntax>>>,
}

impl SharedSyntax {
    pub fn new(syntax: Syntax) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(syntax))),
        }
    }

    /// Syntax active right now. The lock is released before returning, so
    /// callers may hold the result across nested dispatches.
    pub fn current(&self) -> Arc<Syntax> {
        Arc::clone(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Merge `partial` over the active syntax; on error nothing changes
    pub fn configure(&self, partial: &PartialSyntax) -> SyntaxResult<()> {
        let mut active = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Syntax::clone(&active);
        next.configure(partial)?;
        *active = Arc::new(next);
        Ok(())
    }

    /// Restore built-in defaults
    pub fn reset(&self) {
        self.replace(Syntax::default());
    }

    pub fn replace(&self, syntax: Syntax) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(syntax);
    }

    /// Whether both handles point at the same live syntax
    pub fn same_as(&self, other: &SharedSyntax) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<Syntax> for SharedSyntax {
    fn from(syntax: Syntax) -> Self {
        Self::new(syntax)
    }
}
