//! Domain model for a borrow/return transaction.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Borrowed,
    Returned,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Borrowed => write!(f, "Borrowed"),
            TransactionStatus::Returned => write!(f, "Returned"),
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Borrowed" => Ok(TransactionStatus::Borrowed),
            "Returned" => Ok(TransactionStatus::Returned),
            _ => Err(format!("Unrecognized transaction status: '{}'", s)),
        }
    }
}

/// One loan record. Created on borrow, mutated exactly once on return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub member_id: String,
    pub book_id: String,
    pub borrow_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// None while the loan is open.
    pub return_date: Option<DateTime<Utc>>,
    /// Late fee in currency units; set on return, zero for on-time returns.
    pub fine: u32,
    pub status: TransactionStatus,
}

impl Transaction {
    /// Generate a short opaque transaction token.
    /// Example: "af3c91b2"
    pub fn generate_id() -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }

    pub fn is_open(&self) -> bool {
        self.status == TransactionStatus::Borrowed
    }

    /// Close the loan. Irreversible.
    pub fn mark_returned(&mut self, return_date: DateTime<Utc>, fine: u32) {
        self.return_date = Some(return_date);
        self.fine = fine;
        self.status = TransactionStatus::Returned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_is_unique() {
        let a = Transaction::generate_id();
        let b = Transaction::generate_id();
        assert_eq!(a.len(), 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!(
            TransactionStatus::Borrowed.to_string().parse::<TransactionStatus>(),
            Ok(TransactionStatus::Borrowed)
        );
        assert_eq!(
            TransactionStatus::Returned.to_string().parse::<TransactionStatus>(),
            Ok(TransactionStatus::Returned)
        );
        assert!("borrowed".parse::<TransactionStatus>().is_err());
    }

    #[test]
    fn test_mark_returned() {
        let now = Utc::now();
        let mut tx = Transaction {
            id: Transaction::generate_id(),
            member_id: "U1".to_string(),
            book_id: "B1".to_string(),
            borrow_date: now,
            due_date: now + chrono::Duration::days(14),
            return_date: None,
            fine: 0,
            status: TransactionStatus::Borrowed,
        };
        assert!(tx.is_open());

        tx.mark_returned(now, 15);
        assert!(!tx.is_open());
        assert_eq!(tx.return_date, Some(now));
        assert_eq!(tx.fine, 15);
        assert_eq!(tx.status, TransactionStatus::Returned);
    }
}
