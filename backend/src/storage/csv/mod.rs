//! # CSV Storage Module
//!
//! File-based storage for the library tracker. Each collection lives in its
//! own CSV file under the configured data directory and is wholly rewritten
//! on every save.
//!
//! ## File Format
//!
//! ```csv
//! id,title,author,isbn,total_copies,available_copies
//! B1,The Rust Programming Language,Klabnik & Nichols,978-1718503106,3,2
//! ```
//!
//! Member records store the borrowed book ids joined with `;` in a single
//! field so every record stays flat. Transaction dates are RFC 3339 text.

pub mod book_repository;
pub mod connection;
pub mod member_repository;
pub mod store;
pub mod transaction_repository;

#[cfg(test)]
pub mod test_utils;

pub use book_repository::BookRepository;
pub use connection::CsvConnection;
pub use member_repository::MemberRepository;
pub use store::CsvLibraryStore;
pub use transaction_repository::TransactionRepository;
