/// Explicit subscription interface for wallet changes.
/// Components subscribe instead of listening for global browser events.
use crate::models::collaboration::CollaborationStatus;
use crate::models::review::Review;
use leptos::logging::log;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum WalletEvent {
    ReviewIssued(Review),
    ReviewRevoked(Review),
    CollaborationStatusChanged { id: u64, status: CollaborationStatus },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&WalletEvent)>;

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
}

/// Single-threaded event bus. Clones share the same listeners.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<Registry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&WalletEvent) + 'static,
    {
        let id = SubscriptionId(self.registry.next_id.get());
        self.registry.next_id.set(id.0 + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        log!("[EVENTS] Subscribed listener {}", id.0);
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.registry.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        let removed = listeners.len() != before;
        if removed {
            log!("[EVENTS] Unsubscribed listener {}", id.0);
        }
        removed
    }

    /// Delivers `event` to every listener in subscription order.
    pub fn emit(&self, event: &WalletEvent) {
        // Snapshot so listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
