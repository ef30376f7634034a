//! Price adjustment strategies.
//!
//! Each strategy turns one amount into another. New pricing rules are added as
//! new types; callers only see the `PriceAdjustment` trait.

use crate::domain::order::Amount;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;

pub trait PriceAdjustment: Send + Sync {
    fn apply(&self, amount: Amount) -> Result<Amount>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjustment;

impl PriceAdjustment for NoAdjustment {
    fn apply(&self, amount: Amount) -> Result<Amount> {
        Ok(amount)
    }
}

fn check_percentage(percent: Decimal) -> Result<Decimal> {
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(OrderError::InvalidArgument(format!(
            "percentage must be between 0 and 100, got {percent}"
        )));
    }
    Ok(percent)
}

fn scale(amount: Amount, factor: Decimal) -> Result<Amount> {
    let scaled = amount.value().checked_mul(factor).ok_or_else(|| {
        OrderError::InvalidArgument(format!("adjusting {amount} overflows the amount range"))
    })?;
    Amount::new(scaled)
}

/// Takes a percentage off the amount.
#[derive(Debug, Clone, Copy)]
pub struct PercentageDiscount {
    percent: Decimal,
}

impl PercentageDiscount {
    pub fn new(percent: Decimal) -> Result<Self> {
        Ok(Self {
            percent: check_percentage(percent)?,
        })
    }
}

impl PriceAdjustment for PercentageDiscount {
    fn apply(&self, amount: Amount) -> Result<Amount> {
        let factor = (Decimal::ONE_HUNDRED - self.percent) / Decimal::ONE_HUNDRED;
        scale(amount, factor)
    }
}

/// Subtracts a fixed value, never going below zero.
#[derive(Debug, Clone, Copy)]
pub struct FixedDiscount {
    off: Amount,
}

impl FixedDiscount {
    pub fn new(off: Amount) -> Self {
        Self { off }
    }
}

impl PriceAdjustment for FixedDiscount {
    fn apply(&self, amount: Amount) -> Result<Amount> {
        Amount::new((amount.value() - self.off.value()).max(Decimal::ZERO))
    }
}

/// Adds a percentage on top, e.g. a handling fee.
#[derive(Debug, Clone, Copy)]
pub struct Surcharge {
    percent: Decimal,
}

impl Surcharge {
    pub fn new(percent: Decimal) -> Result<Self> {
        Ok(Self {
            percent: check_percentage(percent)?,
        })
    }
}

impl PriceAdjustment for Surcharge {
    fn apply(&self, amount: Amount) -> Result<Amount> {
        let factor = (Decimal::ONE_HUNDRED + self.percent) / Decimal::ONE_HUNDRED;
        scale(amount, factor)
    }
}
