use super::processor::OrderProcessor;
use crate::domain::order::Order;
use crate::domain::ports::{InventoryServiceBox, NotifierBox, PaymentGatewayBox, ShippingServiceBox};
use crate::domain::receipt::Receipt;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Single entry point that runs an order through payment, inventory, shipping
/// and notification.
///
/// Collaborators are injected once at construction. Processing is fail-fast: the
/// first collaborator error is returned as is, with no compensation for the
/// steps that already ran.
pub struct OrderFacade {
    payment: PaymentGatewayBox,
    inventory: InventoryServiceBox,
    shipping: ShippingServiceBox,
    notifier: NotifierBox,
    step_timeout: Option<Duration>,
}

impl OrderFacade {
    /// Creates a new `OrderFacade`.
    ///
    /// # Arguments
    ///
    /// * `payment` - Charges the order; its transaction id ends up in the receipt.
    /// * `inventory` - Reserves stock.
    /// * `shipping` - Schedules delivery.
    /// * `notifier` - Tells the customer.
    pub fn new(
        payment: PaymentGatewayBox,
        inventory: InventoryServiceBox,
        shipping: ShippingServiceBox,
        notifier: NotifierBox,
    ) -> Self {
        Self {
            payment,
            inventory,
            shipping,
            notifier,
            step_timeout: None,
        }
    }

    /// Bounds every collaborator call by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.step_timeout = Some(timeout);
        self
    }

    async fn bounded<T>(
        &self,
        step: &'static str,
        call: impl Future<Output = Result<T>> + Send,
    ) -> Result<T> {
        match self.step_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| OrderError::Timeout { step })?,
            None => call.await,
        }
    }

    /// Processes an order.
    ///
    /// A declined payment returns the failed receipt straight away and leaves the
    /// order untouched. Otherwise the remaining collaborators run for their side
    /// effects, the order is completed, and a completed receipt carrying the
    /// payment's transaction id is returned.
    #[instrument(skip_all, fields(order = %order.id()))]
    pub async fn process_order(&self, order: &mut Order) -> Result<Receipt> {
        let payment = self
            .bounded("payment", self.payment.pay(order.id(), order.amount()))
            .await?;
        if !payment.is_completed() {
            warn!(transaction = %payment.transaction_id, "Payment declined");
            return Ok(payment);
        }

        let reserved = self.bounded("inventory", self.inventory.reserve(order)).await?;
        let shipped = self.bounded("shipping", self.shipping.ship(order)).await?;
        debug!(%reserved, %shipped, "Fulfilment steps done");

        let message = format!(
            "Payment {} received for order {}",
            payment.transaction_id,
            order.id()
        );
        self.bounded("notification", self.notifier.notify(order, &message))
            .await?;

        order.complete();
        Ok(Receipt::completed(payment.transaction_id))
    }
}

#[async_trait]
impl OrderProcessor for OrderFacade {
    async fn process(&self, order: &mut Order) -> Result<Receipt> {
        self.process_order(order).await
    }
}
