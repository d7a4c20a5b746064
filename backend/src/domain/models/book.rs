//! Domain model for a catalog book.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: u32,
    /// Copies on the shelf. Invariant: `0 <= available_copies <= total_copies`.
    pub available_copies: u32,
}

impl Book {
    /// Format a book id from its sequence number.
    /// Example: 12 -> "B12"
    pub fn format_id(number: u64) -> String {
        format!("B{}", number)
    }

    /// Parse the sequence number out of a book id ("B12" -> 12).
    pub fn parse_id_number(id: &str) -> Option<u64> {
        id.strip_prefix('B').and_then(|n| n.parse().ok())
    }

    pub fn has_available_copy(&self) -> bool {
        self.available_copies > 0
    }
}
