//! Human-readable status lines.

use crate::domain::order::Order;
use crate::domain::receipt::{Receipt, ReceiptStatus};
use crate::error::OrderError;

pub fn receipt_line(order: &Order, receipt: &Receipt) -> String {
    match receipt.status {
        ReceiptStatus::Completed => format!(
            "Order {} completed with transaction {}",
            order.id(),
            receipt.transaction_id
        ),
        ReceiptStatus::Failed => format!(
            "Order {} payment failed (transaction {})",
            order.id(),
            receipt.transaction_id
        ),
    }
}

pub fn error_line(order: &Order, error: &OrderError) -> String {
    format!("Order {} could not be processed: {}", order.id(), error)
}

/// Line for an order that was never processed.
pub fn status_line(order: &Order) -> String {
    format!("Order {} is {}", order.id(), order.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::receipt::TransactionId;
    use crate::domain::role::Role;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lines() {
        let order = Order::new("order123", dec!(100)).unwrap();
        let txn = TransactionId::from_parts("txn", 5);

        assert_eq!(
            receipt_line(&order, &Receipt::completed(txn.clone())),
            "Order order123 completed with transaction txn_5"
        );
        assert_eq!(
            receipt_line(&order, &Receipt::failed(txn)),
            "Order order123 payment failed (transaction txn_5)"
        );
        assert_eq!(
            error_line(&order, &OrderError::AccessDenied { role: Role::Guest }),
            "Order order123 could not be processed: Access denied for role 'guest'"
        );
        assert_eq!(status_line(&order), "Order order123 is pending");
    }
}
