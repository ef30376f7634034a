use crate::domain::order::Order;
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct OrderRecord {
    order: String,
    // Parsed from the field text; csv would otherwise route numbers through f64.
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
}

/// Reads orders from a CSV source with an `order,amount` header.
///
/// Each row is validated through `Order::new`, so the iterator yields either a
/// pending order or the reason the row was rejected.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates orders.
    pub fn orders(self) -> impl Iterator<Item = Result<Order>> {
        self.reader.into_deserialize().map(|result| {
            let record: OrderRecord = result.map_err(OrderError::from)?;
            Order::new(record.order, record.amount)
        })
    }
}
