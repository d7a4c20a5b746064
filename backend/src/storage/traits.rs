//! # Storage Traits
//!
//! Storage abstraction for the rules engine. The engine owns all three
//! collections in memory and hands the store the whole bundle on every
//! mutation; the store never retains references after a save/load cycle.

use anyhow::Result;

use crate::domain::models::{Book, Member, Transaction};

/// The three record collections, persisted as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryData {
    pub books: Vec<Book>,
    pub members: Vec<Member>,
    pub transactions: Vec<Transaction>,
}

/// Interface for durable storage backends.
///
/// Implementations rewrite the stored collections wholesale on every save;
/// there is no append log and no partial-write recovery. I/O errors
/// propagate to the caller.
pub trait LibraryStore: Send + Sync {
    /// Reconstruct all collections, defaulting to empty when storage is
    /// absent.
    fn load(&self) -> Result<LibraryData>;

    /// Overwrite all collections on disk.
    fn save(&self, data: &LibraryData) -> Result<()>;
}
