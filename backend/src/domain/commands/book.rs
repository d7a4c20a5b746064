//! Commands and results for catalog operations.
use crate::domain::models::Book;

#[derive(Debug, Clone)]
pub struct AddBookCommand {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub total_copies: u32,
}

#[derive(Debug, Clone)]
pub struct AddBookResult {
    pub book: Book,
}
