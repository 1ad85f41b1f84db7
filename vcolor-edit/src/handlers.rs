//! Registry of update handlers run on geometry/selection changes.
//!
//! Handlers are keyed by name so repeated enable/disable cycles never stack
//! duplicates: subscribing an already-registered name is a no-op, and so is
//! unsubscribing a name that is not there.

use crate::session::EditorContext;
use crate::sync;
use tracing::debug;

/// Registry name of the auto-pick guard.
pub const AUTO_PICK_HANDLER: &str = "auto_pick";

type Handler<M> = Box<dyn FnMut(&mut EditorContext<M>)>;

/// Named handlers dispatched, in subscription order, on every change
/// notification.
pub struct UpdateHandlers<M> {
    handlers: Vec<(&'static str, Handler<M>)>,
}

impl<M> UpdateHandlers<M> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler under a name. Returns false (and keeps the
    /// existing handler) if the name is already registered.
    pub fn subscribe(
        &mut self,
        name: &'static str,
        handler: impl FnMut(&mut EditorContext<M>) + 'static,
    ) -> bool {
        if self.is_subscribed(name) {
            return false;
        }
        debug!(name, "subscribing update handler");
        self.handlers.push((name, Box::new(handler)));
        true
    }

    /// Remove a handler by name. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, name: &str) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(n, _)| *n != name);
        let removed = self.handlers.len() != before;
        if removed {
            debug!(name, "unsubscribed update handler");
        }
        removed
    }

    /// Whether a handler name is registered.
    pub fn is_subscribed(&self, name: &str) -> bool {
        self.handlers.iter().any(|(n, _)| *n == name)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Dispatch a change notification to every handler in order.
    pub fn notify(&mut self, ctx: &mut EditorContext<M>) {
        for (_, handler) in &mut self.handlers {
            handler(ctx);
        }
    }
}

impl<M> Default for UpdateHandlers<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire the auto-pick guard into the registry. Idempotent.
pub fn register_auto_pick<M: crate::host::CornerMesh>(handlers: &mut UpdateHandlers<M>) -> bool {
    handlers.subscribe(AUTO_PICK_HANDLER, |ctx| {
        let _ = sync::auto_pick(ctx);
    })
}

/// Remove the auto-pick guard from the registry. Idempotent.
pub fn unregister_auto_pick<M>(handlers: &mut UpdateHandlers<M>) -> bool {
    handlers.unsubscribe(AUTO_PICK_HANDLER)
}
