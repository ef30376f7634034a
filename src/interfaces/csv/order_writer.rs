use crate::domain::order::{Amount, Order, OrderId, OrderStatus};
use crate::domain::receipt::{Receipt, TransactionId};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OrderSummary<'a> {
    order: &'a OrderId,
    amount: Amount,
    status: OrderStatus,
    transaction: Option<&'a TransactionId>,
}

/// Writes the final state of orders as CSV with an
/// `order,amount,status,transaction` header.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes one row per order. Orders without a receipt get an empty
    /// transaction column.
    pub fn write_orders<'a>(
        &mut self,
        rows: impl IntoIterator<Item = (&'a Order, Option<&'a Receipt>)>,
    ) -> Result<()> {
        let mut wrote_any = false;
        for (order, receipt) in rows {
            self.writer.serialize(OrderSummary {
                order: order.id(),
                amount: order.amount(),
                status: order.status(),
                transaction: receipt.map(|r| &r.transaction_id),
            })?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer
                .write_record(["order", "amount", "status", "transaction"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
