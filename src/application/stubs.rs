//! Hand-rolled collaborators for unit tests.

use crate::domain::order::{Amount, Order, OrderId};
use crate::domain::ports::{InventoryService, Notifier, PaymentGateway, ShippingService};
use crate::domain::receipt::{Receipt, TransactionId};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Clone, Copy, PartialEq)]
pub enum GatewayBehaviour {
    Approve,
    Decline,
    Error,
    Stall(Duration),
}

pub struct StubGateway {
    log: CallLog,
    behaviour: GatewayBehaviour,
    calls: AtomicUsize,
}

impl StubGateway {
    pub fn new(log: CallLog, behaviour: GatewayBehaviour) -> Self {
        Self {
            log,
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn pay(&self, _order_id: &OrderId, _amount: Amount) -> Result<Receipt> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push("payment");
        let id = TransactionId::from_parts("txn", 1_000 + self.calls() as i64);
        match self.behaviour {
            GatewayBehaviour::Approve => Ok(Receipt::completed(id)),
            GatewayBehaviour::Decline => Ok(Receipt::failed(id)),
            GatewayBehaviour::Error => Err(OrderError::Collaborator {
                service: "payment",
                reason: "card rejected".to_string(),
            }),
            GatewayBehaviour::Stall(delay) => {
                tokio::time::sleep(delay).await;
                Ok(Receipt::completed(id))
            }
        }
    }
}

/// One stub standing in for inventory, shipping and notification alike.
pub struct StubStep {
    log: CallLog,
    fail: bool,
}

impl StubStep {
    pub fn ok(log: CallLog) -> Self {
        Self { log, fail: false }
    }

    pub fn failing(log: CallLog) -> Self {
        Self { log, fail: true }
    }

    fn record(&self, name: &'static str) -> Result<()> {
        self.log.lock().unwrap().push(name);
        if self.fail {
            return Err(OrderError::Collaborator {
                service: name,
                reason: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl InventoryService for StubStep {
    async fn reserve(&self, _order: &Order) -> Result<String> {
        self.record("inventory")?;
        Ok("reserved".to_string())
    }
}

#[async_trait]
impl ShippingService for StubStep {
    async fn ship(&self, _order: &Order) -> Result<String> {
        self.record("shipping")?;
        Ok("shipped".to_string())
    }
}

#[async_trait]
impl Notifier for StubStep {
    async fn notify(&self, _order: &Order, _message: &str) -> Result<()> {
        self.record("notification")
    }
}
