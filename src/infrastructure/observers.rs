use crate::domain::order::{OrderId, OrderStatus};
use crate::domain::ports::OrderObserver;
use crate::error::Result;
use std::sync::Mutex;
use tracing::info;

/// Reports every status change as a tracing event.
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl OrderObserver for LoggingObserver {
    fn on_status_changed(&self, order_id: &OrderId, status: OrderStatus) -> Result<()> {
        info!(order = %order_id, %status, "Order status changed");
        Ok(())
    }
}

/// Keeps every notification it receives, in arrival order.
#[derive(Debug, Default)]
pub struct StatusHistory {
    entries: Mutex<Vec<(OrderId, OrderStatus)>>,
}

impl StatusHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(OrderId, OrderStatus)> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl OrderObserver for StatusHistory {
    fn on_status_changed(&self, order_id: &OrderId, status: OrderStatus) -> Result<()> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((order_id.clone(), status));
        Ok(())
    }
}
