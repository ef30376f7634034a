//! Collaborators that only pretend to talk to the outside world.

use crate::config::AppConfig;
use crate::domain::order::{Amount, Order, OrderId};
use crate::domain::ports::{InventoryService, Notifier, PaymentGateway, ShippingService};
use crate::domain::receipt::{Receipt, TransactionId};
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, info};

pub const PAYMENT_PREFIX: &str = "txn";

/// Approves every charge and stamps it with a `txn_<millis>` id.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentGateway {
    merchant: String,
}

impl SimulatedPaymentGateway {
    pub fn new(config: &AppConfig) -> Self {
        let key = config.api_key();
        // Only a short, non-secret prefix of the key is ever logged.
        let merchant = key.chars().take(4).collect::<String>() + "****";
        Self { merchant }
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn pay(&self, order_id: &OrderId, amount: Amount) -> Result<Receipt> {
        let transaction_id = TransactionId::generate(PAYMENT_PREFIX);
        info!(
            order = %order_id,
            %amount,
            merchant = %self.merchant,
            transaction = %transaction_id,
            "Payment charged"
        );
        Ok(Receipt::completed(transaction_id))
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedInventory;

#[async_trait]
impl InventoryService for SimulatedInventory {
    async fn reserve(&self, order: &Order) -> Result<String> {
        debug!(order = %order.id(), "Inventory reserved");
        Ok("reserved".to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct SimulatedShipping;

#[async_trait]
impl ShippingService for SimulatedShipping {
    async fn ship(&self, order: &Order) -> Result<String> {
        debug!(order = %order.id(), "Shipment scheduled");
        Ok("shipped".to_string())
    }
}

/// Emits notifications as tracing events.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, order: &Order, message: &str) -> Result<()> {
        info!(order = %order.id(), "{message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::time::Duration;

    #[tokio::test]
    async fn test_simulated_gateway_approves() {
        let config = AppConfig::new("abcdef", Duration::from_secs(1)).unwrap();
        let gateway = SimulatedPaymentGateway::new(&config);
        let order = Order::new("order1", dec!(10)).unwrap();

        let receipt = gateway.pay(order.id(), order.amount()).await.unwrap();
        assert!(receipt.is_completed());
        assert!(receipt.transaction_id.as_str().starts_with("txn_"));
    }

    #[test]
    fn test_merchant_label_hides_key() {
        let config = AppConfig::new("abcdef-secret", Duration::from_secs(1)).unwrap();
        let gateway = SimulatedPaymentGateway::new(&config);
        assert_eq!(gateway.merchant, "abcd****");
    }

    #[tokio::test]
    async fn test_fixed_tags() {
        let order = Order::new("order1", dec!(10)).unwrap();
        assert_eq!(SimulatedInventory.reserve(&order).await.unwrap(), "reserved");
        assert_eq!(SimulatedShipping.ship(&order).await.unwrap(), "shipped");
        assert!(LogNotifier.notify(&order, "hello").await.is_ok());
    }
}
