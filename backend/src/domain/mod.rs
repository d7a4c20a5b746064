pub mod commands;
pub mod errors;
pub mod library_service;
pub mod models;

pub use errors::LibraryError;
pub use library_service::LibraryService;
