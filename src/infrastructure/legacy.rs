//! Adapter from the old cents-based billing system to the `PaymentGateway` port.

use crate::domain::order::{Amount, OrderId};
use crate::domain::ports::PaymentGateway;
use crate::domain::receipt::{Receipt, TransactionId};
use crate::error::{OrderError, Result};
use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::warn;

pub const LEGACY_PREFIX: &str = "legacy";

/// Billing system with its own calling convention: integer cents in, a bare
/// approval flag out.
#[derive(Debug, Clone)]
pub struct LegacyBillingSystem {
    approval_limit_cents: i64,
}

impl LegacyBillingSystem {
    pub fn new(approval_limit_cents: i64) -> Self {
        Self {
            approval_limit_cents,
        }
    }

    pub fn submit_charge(&self, reference: &str, amount_cents: i64) -> bool {
        let approved = amount_cents <= self.approval_limit_cents;
        if !approved {
            warn!(reference, amount_cents, "Legacy billing declined charge");
        }
        approved
    }
}

pub struct LegacyBillingAdapter {
    legacy: LegacyBillingSystem,
}

impl LegacyBillingAdapter {
    pub fn new(legacy: LegacyBillingSystem) -> Self {
        Self { legacy }
    }
}

/// Converts an amount to whole cents, rounding half away from zero.
pub fn to_cents(amount: Amount) -> Result<i64> {
    let out_of_range = || OrderError::InvalidArgument(format!("amount {amount} is out of range"));
    amount
        .value()
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(out_of_range)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(out_of_range)
}

#[async_trait]
impl PaymentGateway for LegacyBillingAdapter {
    async fn pay(&self, order_id: &OrderId, amount: Amount) -> Result<Receipt> {
        let cents = to_cents(amount)?;
        let transaction_id = TransactionId::generate(LEGACY_PREFIX);
        if self.legacy.submit_charge(order_id.as_str(), cents) {
            Ok(Receipt::completed(transaction_id))
        } else {
            Ok(Receipt::failed(transaction_id))
        }
    }
}
