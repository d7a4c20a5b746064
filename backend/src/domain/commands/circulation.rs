//! Commands and results for borrow/return operations.
use chrono::{DateTime, Utc};

use crate::domain::models::Transaction;

#[derive(Debug, Clone)]
pub struct BorrowBookCommand {
    pub member_id: String,
    pub book_id: String,
    /// Optional timestamp override; current time when not provided.
    pub borrow_date: Option<DateTime<Utc>>,
}

impl BorrowBookCommand {
    pub fn new(member_id: &str, book_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            book_id: book_id.to_string(),
            borrow_date: None,
        }
    }
}

/// The created transaction carries the due date for the confirmation message.
#[derive(Debug, Clone)]
pub struct BorrowBookResult {
    pub transaction: Transaction,
}

#[derive(Debug, Clone)]
pub struct ReturnBookCommand {
    pub member_id: String,
    pub book_id: String,
    /// Optional timestamp override; current time when not provided.
    pub return_date: Option<DateTime<Utc>>,
}

impl ReturnBookCommand {
    pub fn new(member_id: &str, book_id: &str) -> Self {
        Self {
            member_id: member_id.to_string(),
            book_id: book_id.to_string(),
            return_date: None,
        }
    }
}

/// The closed transaction carries the fine for the confirmation message.
#[derive(Debug, Clone)]
pub struct ReturnBookResult {
    pub transaction: Transaction,
}
