pub mod csv;
pub mod traits;

pub use traits::{LibraryData, LibraryStore};
