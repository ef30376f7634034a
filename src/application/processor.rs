//! The `OrderProcessor` seam and the decorators that stack on top of it.

use super::pricing::PriceAdjustment;
use crate::domain::order::Order;
use crate::domain::receipt::Receipt;
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, error, info};

/// Anything that can take an order through processing and hand back a receipt.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    async fn process(&self, order: &mut Order) -> Result<Receipt>;
}

pub type OrderProcessorBox = Box<dyn OrderProcessor>;

#[async_trait]
impl<P: OrderProcessor + ?Sized> OrderProcessor for Box<P> {
    async fn process(&self, order: &mut Order) -> Result<Receipt> {
        (**self).process(order).await
    }
}

/// Logs before and after delegating to the wrapped processor.
pub struct LoggingProcessor<P> {
    inner: P,
}

impl<P: OrderProcessor> LoggingProcessor<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: OrderProcessor> OrderProcessor for LoggingProcessor<P> {
    async fn process(&self, order: &mut Order) -> Result<Receipt> {
        info!(order = %order.id(), amount = %order.amount(), "Processing order");
        match self.inner.process(order).await {
            Ok(receipt) => {
                info!(
                    order = %order.id(),
                    transaction = %receipt.transaction_id,
                    status = %receipt.status,
                    "Order processed"
                );
                Ok(receipt)
            }
            Err(e) => {
                error!(order = %order.id(), error = %e, "Order processing failed");
                Err(e)
            }
        }
    }
}

/// Rewrites the order amount with a price adjustment, then delegates.
///
/// The adjusted amount only sticks when the inner processor completes the
/// payment; on an error or a failed receipt the order gets its original amount
/// back, so retrying never stacks the adjustment.
pub struct DiscountProcessor<P> {
    inner: P,
    adjustment: Box<dyn PriceAdjustment>,
}

impl<P: OrderProcessor> DiscountProcessor<P> {
    pub fn new(inner: P, adjustment: Box<dyn PriceAdjustment>) -> Self {
        Self { inner, adjustment }
    }
}

#[async_trait]
impl<P: OrderProcessor> OrderProcessor for DiscountProcessor<P> {
    async fn process(&self, order: &mut Order) -> Result<Receipt> {
        let original = order.amount();
        let adjusted = self.adjustment.apply(original)?;
        order.set_amount(adjusted);

        let outcome = self.inner.process(order).await;
        if !matches!(&outcome, Ok(receipt) if receipt.is_completed()) {
            debug!(order = %order.id(), amount = %original, "Restoring pre-adjustment amount");
            order.set_amount(original);
        }
        outcome
    }
}
