use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier handed out by a payment gateway, formed as `<prefix>_<unix millis>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generates an identifier stamped with the current time.
    pub fn generate(prefix: &str) -> Self {
        Self::from_parts(prefix, Utc::now().timestamp_millis())
    }

    pub fn from_parts(prefix: &str, timestamp_millis: i64) -> Self {
        Self(format!("{prefix}_{timestamp_millis}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Completed,
    Failed,
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReceiptStatus::Completed => f.write_str("completed"),
            ReceiptStatus::Failed => f.write_str("failed"),
        }
    }
}

/// Result of a processing call: the gateway's transaction id plus the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_id: TransactionId,
    pub status: ReceiptStatus,
}

impl Receipt {
    pub fn completed(transaction_id: TransactionId) -> Self {
        Self {
            transaction_id,
            status: ReceiptStatus::Completed,
        }
    }

    pub fn failed(transaction_id: TransactionId) -> Self {
        Self {
            transaction_id,
            status: ReceiptStatus::Failed,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ReceiptStatus::Completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_format() {
        let id = TransactionId::from_parts("txn", 1_700_000_000_000);
        assert_eq!(id.as_str(), "txn_1700000000000");
    }

    #[test]
    fn test_generated_id_has_prefix_and_timestamp() {
        let id = TransactionId::generate("txn");
        let (prefix, ts) = id.as_str().split_once('_').unwrap();
        assert_eq!(prefix, "txn");
        assert!(ts.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn test_receipt_wire_shape() {
        let receipt = Receipt::completed(TransactionId::from_parts("txn", 42));
        let json = serde_json::to_string(&receipt).unwrap();
        assert_eq!(json, r#"{"transactionId":"txn_42","status":"completed"}"#);

        let back: Receipt =
            serde_json::from_str(r#"{"transactionId":"legacy_7","status":"failed"}"#).unwrap();
        assert!(!back.is_completed());
        assert_eq!(back.transaction_id.as_str(), "legacy_7");
    }
}
