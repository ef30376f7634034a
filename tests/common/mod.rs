#![allow(dead_code)]

use async_trait::async_trait;
use orderflow::domain::order::{Amount, OrderId};
use orderflow::domain::ports::PaymentGateway;
use orderflow::domain::receipt::{Receipt, TransactionId};
use orderflow::error::Result;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn generate_csv(path: &Path, rows: usize) -> std::result::Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["order", "amount"])?;

    for i in 1..=rows {
        wtr.write_record([format!("order{i}"), format!("{i}.25")])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Approving gateway that counts how often it is reached.
#[derive(Default)]
pub struct CountingGateway {
    calls: AtomicUsize,
}

impl CountingGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for CountingGateway {
    async fn pay(&self, _order_id: &OrderId, _amount: Amount) -> Result<Receipt> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(Receipt::completed(TransactionId::from_parts("txn", n as i64)))
    }
}
