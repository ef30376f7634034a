use crate::domain::order::{Amount, OrderId};
use crate::domain::ports::PaymentGateway;
use crate::domain::receipt::Receipt;
use crate::domain::role::Role;
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, warn};

type CacheKey = (OrderId, Amount);

/// Guards a payment gateway behind a role check and memoizes its receipts.
///
/// The cache is keyed by order id and amount, never expires and is unbounded.
/// Only successful calls are cached.
pub struct AccessControlledGateway<G> {
    inner: G,
    role: Role,
    cache: RwLock<HashMap<CacheKey, Receipt>>,
}

impl<G: PaymentGateway> AccessControlledGateway<G> {
    pub fn new(inner: G, role: Role) -> Self {
        Self {
            inner,
            role,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub async fn cached_entries(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl<G: PaymentGateway> PaymentGateway for AccessControlledGateway<G> {
    async fn pay(&self, order_id: &OrderId, amount: Amount) -> Result<Receipt> {
        if !self.role.is_privileged() {
            warn!(role = %self.role, order = %order_id, "Payment refused");
            return Err(OrderError::AccessDenied { role: self.role });
        }

        let key = (order_id.clone(), amount);
        if let Some(receipt) = self.cache.read().await.get(&key) {
            debug!(order = %order_id, %amount, "Payment served from cache");
            return Ok(receipt.clone());
        }

        let receipt = self.inner.pay(order_id, amount).await?;
        self.cache.write().await.insert(key, receipt.clone());
        Ok(receipt)
    }
}
