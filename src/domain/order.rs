use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an order.
///
/// Guaranteed non-empty (ignoring surrounding whitespace) and immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(OrderError::MissingIdentifier);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A non-negative monetary amount.
///
/// Wraps `rust_decimal::Decimal` so that a negative value can never reach an order
/// or a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(OrderError::InvalidArgument(format!(
                "amount must be non-negative, got {value}"
            )));
        }
        Ok(Self(value.normalize()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial state. Some callers spell it `open`.
    #[default]
    #[serde(alias = "open")]
    Pending,
    Completed,
    Closed,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Closed => "closed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The order every coordinator works on.
///
/// Construction validates the identifier and the amount; afterwards the only
/// mutations are status changes and, for the discount decorator, the amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    amount: Amount,
    status: OrderStatus,
}

impl Order {
    /// Creates a pending order.
    ///
    /// # Errors
    ///
    /// * `MissingIdentifier` if `id` is empty or only whitespace.
    /// * `InvalidArgument` if `amount` is negative.
    pub fn new(id: impl Into<String>, amount: Decimal) -> Result<Self> {
        let id = OrderId::new(id)?;
        let amount = Amount::new(amount)?;
        Ok(Self {
            id,
            amount,
            status: OrderStatus::Pending,
        })
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Marks the order completed. Calling it again leaves the status unchanged.
    pub fn complete(&mut self) {
        self.status = OrderStatus::Completed;
    }

    /// Marks the order closed. Calling it again leaves the status unchanged.
    pub fn close(&mut self) {
        self.status = OrderStatus::Closed;
    }

    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    pub fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }
}
