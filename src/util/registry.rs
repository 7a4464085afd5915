//! Single-owner handler slot used for app-wide imperative entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login modal and the toast surface both expose an entry point that
//! code outside their component subtree can call. Each surface installs a
//! handler on mount and holds the returned [`Registration`]; dropping it
//! (component cleanup) uninstalls the handler.
//!
//! DESIGN
//! ======
//! - Last installation wins. Dropping a superseded registration leaves the
//!   newer handler in place.
//! - Dispatch with nothing installed is a no-op reported as `false`.
//! - The handler is cloned out of the lock before it runs, so a handler may
//!   dispatch or reinstall without deadlocking.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Handler<T> = Arc<dyn Fn(T) + Send + Sync>;

struct Slot<T> {
    next_token: u64,
    active: Option<(u64, Handler<T>)>,
}

fn lock<T>(slot: &Mutex<Slot<T>>) -> MutexGuard<'_, Slot<T>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Shared slot holding at most one active handler.
pub struct HandlerSlot<T> {
    inner: Arc<Mutex<Slot<T>>>,
}

impl<T> Clone for HandlerSlot<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T> Default for HandlerSlot<T> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Slot { next_token: 0, active: None })),
        }
    }
}

impl<T> std::fmt::Debug for HandlerSlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerSlot")
            .field("installed", &self.is_installed())
            .finish()
    }
}

impl<T> HandlerSlot<T> {
    /// Install `handler`, superseding any current one.
    #[must_use = "dropping the registration uninstalls the handler immediately"]
    pub fn install<F>(&self, handler: F) -> Registration<T>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let mut slot = lock(&self.inner);
        slot.next_token += 1;
        let token = slot.next_token;
        slot.active = Some((token, Arc::new(handler)));
        Registration {
            slot: Arc::downgrade(&self.inner),
            token,
        }
    }

    pub fn is_installed(&self) -> bool {
        lock(&self.inner).active.is_some()
    }

    /// Deliver `value` to the active handler. Returns `false` if none is installed.
    pub fn dispatch(&self, value: T) -> bool {
        let handler = lock(&self.inner).active.as_ref().map(|(_, h)| Arc::clone(h));
        match handler {
            Some(handler) => {
                handler(value);
                true
            }
            None => false,
        }
    }
}

/// Scoped ownership of a slot installation.
pub struct Registration<T> {
    slot: Weak<Mutex<Slot<T>>>,
    token: u64,
}

impl<T> Registration<T> {
    /// Whether this registration is still the active one.
    pub fn is_active(&self) -> bool {
        self.slot
            .upgrade()
            .is_some_and(|slot| lock(&slot).active.as_ref().is_some_and(|(t, _)| *t == self.token))
    }
}

impl<T> Drop for Registration<T> {
    fn drop(&mut self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        let mut slot = lock(&slot);
        if slot.active.as_ref().is_some_and(|(t, _)| *t == self.token) {
            slot.active = None;
        }
    }
}
