//! Scoped "outside interaction" listeners.
//!
//! A component that wants to know about pointer presses landing outside of it
//! registers here and keeps the returned [`OutsideInteractionGuard`] for as
//! long as it is mounted. Dropping the guard deregisters that registration,
//! so a dropped component can never be notified again.
//!
//! The plugin runs on Zellij's single-threaded event loop, so the registry is
//! shared through `Rc<RefCell<_>>` rather than a lock.

use super::ComponentId;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

#[derive(Debug, Default)]
struct Registry {
    next_token: u64,
    listeners: BTreeMap<u64, ComponentId>,
}

/// Registry of live outside-interaction listeners.
///
/// Cloning yields another handle to the same registry.
///
/// # Example
///
/// ```
/// use autocomplete::search::{ComponentId, OutsideInteractions};
///
/// let registry = OutsideInteractions::default();
/// let guard = registry.register(ComponentId::Remote);
/// assert_eq!(registry.listeners_outside(Some(ComponentId::Local)), vec![ComponentId::Remote]);
///
/// drop(guard);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutsideInteractions {
    inner: Rc<RefCell<Registry>>,
}

impl OutsideInteractions {
    /// Registers `component` for outside-interaction notifications.
    ///
    /// Each call creates an independent registration; the returned guard
    /// releases only its own.
    pub fn register(&self, component: ComponentId) -> OutsideInteractionGuard {
        let mut registry = self.inner.borrow_mut();
        let token = registry.next_token;
        registry.next_token += 1;
        registry.listeners.insert(token, component);

        tracing::debug!(?component, token, "outside interaction listener registered");

        OutsideInteractionGuard {
            token,
            component,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Returns the components with a live registration other than `target`.
    ///
    /// `target` is the component the pointer landed on, or `None` when it hit
    /// no component at all. Each component appears once.
    #[must_use]
    pub fn listeners_outside(&self, target: Option<ComponentId>) -> Vec<ComponentId> {
        let registry = self.inner.borrow();
        let mut outside: Vec<ComponentId> = registry
            .listeners
            .values()
            .copied()
            .filter(|component| Some(*component) != target)
            .collect();
        outside.sort();
        outside.dedup();
        outside
    }

    /// Number of live registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().listeners.is_empty()
    }
}

/// Keeps one outside-interaction registration alive.
#[derive(Debug)]
#[must_use = "dropping the guard immediately deregisters the listener"]
pub struct OutsideInteractionGuard {
    token: u64,
    component: ComponentId,
    registry: Weak<RefCell<Registry>>,
}

impl OutsideInteractionGuard {
    /// Component this registration belongs to.
    #[must_use]
    pub const fn component(&self) -> ComponentId {
        self.component
    }
}

impl Drop for OutsideInteractionGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.token);
            tracing::debug!(
                component = ?self.component,
                token = self.token,
                "outside interaction listener released"
            );
        }
    }
}
