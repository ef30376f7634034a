//! Template-method workflows.
//!
//! `OrderWorkflow::run` fixes the order of the steps; implementors only fill in
//! the steps themselves.

use super::processor::OrderProcessor;
use crate::domain::order::Order;
use crate::domain::ports::{InventoryServiceBox, NotifierBox, PaymentGatewayBox, ShippingServiceBox};
use crate::domain::receipt::Receipt;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait OrderWorkflow: Send + Sync {
    /// Rejects orders this workflow cannot handle. Accepts everything by default.
    async fn validate(&self, _order: &Order) -> Result<()> {
        Ok(())
    }

    /// Charges the order. A failed receipt ends the run without fulfilment.
    async fn collect_payment(&self, order: &Order) -> Result<Receipt>;

    async fn fulfil(&self, order: &Order) -> Result<()>;

    async fn after_completion(&self, _order: &Order, _receipt: &Receipt) -> Result<()> {
        Ok(())
    }

    /// Runs validate, payment, fulfilment and the completion hook in that order.
    async fn run(&self, order: &mut Order) -> Result<Receipt> {
        self.validate(order).await?;
        let payment = self.collect_payment(order).await?;
        if !payment.is_completed() {
            return Ok(payment);
        }
        self.fulfil(order).await?;
        order.complete();
        let receipt = Receipt::completed(payment.transaction_id);
        self.after_completion(order, &receipt).await?;
        Ok(receipt)
    }
}

/// Ships a parcel: payment, then stock reservation, then shipping.
pub struct PhysicalGoodsWorkflow {
    payment: PaymentGatewayBox,
    inventory: InventoryServiceBox,
    shipping: ShippingServiceBox,
}

impl PhysicalGoodsWorkflow {
    pub fn new(
        payment: PaymentGatewayBox,
        inventory: InventoryServiceBox,
        shipping: ShippingServiceBox,
    ) -> Self {
        Self {
            payment,
            inventory,
            shipping,
        }
    }
}

#[async_trait]
impl OrderWorkflow for PhysicalGoodsWorkflow {
    async fn collect_payment(&self, order: &Order) -> Result<Receipt> {
        self.payment.pay(order.id(), order.amount()).await
    }

    async fn fulfil(&self, order: &Order) -> Result<()> {
        let reserved = self.inventory.reserve(order).await?;
        let shipped = self.shipping.ship(order).await?;
        debug!(order = %order.id(), %reserved, %shipped, "Physical fulfilment done");
        Ok(())
    }
}

/// Delivers by notification; there is nothing to reserve or ship.
pub struct DigitalGoodsWorkflow {
    payment: PaymentGatewayBox,
    notifier: NotifierBox,
}

impl DigitalGoodsWorkflow {
    pub fn new(payment: PaymentGatewayBox, notifier: NotifierBox) -> Self {
        Self { payment, notifier }
    }
}

#[async_trait]
impl OrderWorkflow for DigitalGoodsWorkflow {
    async fn validate(&self, order: &Order) -> Result<()> {
        if order.amount().value().is_zero() {
            return Err(OrderError::InvalidArgument(format!(
                "digital order {} must have a non-zero amount",
                order.id()
            )));
        }
        Ok(())
    }

    async fn collect_payment(&self, order: &Order) -> Result<Receipt> {
        self.payment.pay(order.id(), order.amount()).await
    }

    async fn fulfil(&self, order: &Order) -> Result<()> {
        self.notifier
            .notify(order, &format!("Download link ready for order {}", order.id()))
            .await
    }

    async fn after_completion(&self, order: &Order, receipt: &Receipt) -> Result<()> {
        self.notifier
            .notify(
                order,
                &format!("Receipt {} issued for order {}", receipt.transaction_id, order.id()),
            )
            .await
    }
}

/// Lets any workflow stand in wherever an `OrderProcessor` is expected.
pub struct WorkflowProcessor<W> {
    workflow: W,
}

impl<W: OrderWorkflow> WorkflowProcessor<W> {
    pub fn new(workflow: W) -> Self {
        Self { workflow }
    }
}

#[async_trait]
impl<W: OrderWorkflow> OrderProcessor for WorkflowProcessor<W> {
    async fn process(&self, order: &mut Order) -> Result<Receipt> {
        self.workflow.run(order).await
    }
}
