//! Typed failures for the circulation rules engine.
//!
//! Business-rule rejections surface to the UI as messages; only `Storage`
//! aborts the operation outright.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("No book found with id '{0}'")]
    BookNotFound(String),

    #[error("No member found with id '{0}'")]
    MemberNotFound(String),

    #[error("No copies of '{title}' are available")]
    NoCopiesAvailable { title: String },

    #[error("Borrow limit reached ({limit} books max for students)")]
    BorrowLimitExceeded { limit: usize },

    #[error("Member {member_id} already has book {book_id} on loan")]
    AlreadyBorrowed { member_id: String, book_id: String },

    #[error("Member {member_id} did not borrow book {book_id}")]
    NotBorrowed { member_id: String, book_id: String },

    /// Borrowed list and transaction ledger disagree. A consistency fault,
    /// not a user error.
    #[error("No open transaction for member {member_id} and book {book_id}")]
    TransactionNotFound { member_id: String, book_id: String },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
