use serde::{Deserialize, Serialize};
use std::fmt;

/// A book in the catalog. Ids are sequential ("B1", "B2", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    /// ISBN as entered; no checksum validation is performed
    pub isbn: String,
    /// Number of physical copies the library owns
    pub total_copies: u32,
    /// Copies currently on the shelf (total minus open loans)
    pub available_copies: u32,
}

impl Book {
    /// Short availability label for list views, e.g. "2/5".
    pub fn availability_label(&self) -> String {
        format!("{}/{}", self.available_copies, self.total_copies)
    }
}

/// Membership role. Determines loan period and borrow limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    Student,
    Faculty,
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberRole::Student => write!(f, "Student"),
            MemberRole::Faculty => write!(f, "Faculty"),
        }
    }
}

/// A registered member. Ids are sequential ("U1", "U2", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    /// Ids of the books this member currently has on loan
    pub borrowed_books: Vec<String>,
}

/// Lifecycle state of a borrow/return transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    /// Open loan, no return recorded yet
    Borrowed,
    /// Closed; return date and fine are set
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

/// One borrow/return record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique token
    pub id: String,
    pub member_id: String,
    pub book_id: String,
    /// When the loan was opened (RFC 3339)
    pub borrow_date: String,
    /// When the loan falls due (RFC 3339)
    pub due_date: String,
    /// When the book came back (RFC 3339), empty while the loan is open
    pub return_date: Option<String>,
    /// Late fee in currency units; zero unless a student returned late
    pub fine: u32,
    pub status: TransactionStatus,
}

impl Transaction {
    pub fn is_open(&self) -> bool {
        self.status == TransactionStatus::Borrowed
    }
}
