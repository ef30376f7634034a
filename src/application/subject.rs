use crate::domain::order::{Order, OrderStatus};
use crate::domain::ports::ObserverRef;
use crate::error::Result;
use std::sync::Arc;
use tracing::debug;

/// Owns an order and tells registered observers about every status change.
pub struct OrderSubject {
    order: Order,
    observers: Vec<ObserverRef>,
}

impl OrderSubject {
    pub fn new(order: Order) -> Self {
        Self {
            order,
            observers: Vec::new(),
        }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn into_order(self) -> Order {
        self.order
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn add_observer(&mut self, observer: ObserverRef) {
        self.observers.push(observer);
    }

    /// Removes the first registration of this exact observer instance.
    /// Returns whether anything was removed.
    pub fn remove_observer(&mut self, observer: &ObserverRef) -> bool {
        match self.observers.iter().position(|o| Arc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Writes the new status, then notifies observers in registration order.
    ///
    /// The status change is kept even if an observer fails; the failing
    /// observer's error is returned and later observers are not notified.
    pub fn set_status(&mut self, status: OrderStatus) -> Result<()> {
        self.order.set_status(status);
        debug!(order = %self.order.id(), %status, observers = self.observers.len(), "Notifying observers");
        for observer in &self.observers {
            observer.on_status_changed(self.order.id(), status)?;
        }
        Ok(())
    }
}
