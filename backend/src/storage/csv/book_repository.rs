use anyhow::{Context, Result};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use super::connection::CsvConnection;
use crate::domain::models::Book;

const HEADER: &str = "id,title,author,isbn,total_copies,available_copies";

/// CSV-based book repository. Reads and writes the whole catalog at once.
#[derive(Clone)]
pub struct BookRepository {
    connection: CsvConnection,
}

impl BookRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read the full catalog from `books.csv`.
    pub fn read_all(&self) -> Result<Vec<Book>> {
        let file_path = self.connection.books_file_path();
        self.connection.ensure_file_exists(&file_path, HEADER)?;

        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let mut csv_reader = Reader::from_reader(reader);

        let mut books = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            let id = record.get(0).unwrap_or("").to_string();

            let total_copies: u32 = record
                .get(4)
                .unwrap_or("")
                .parse()
                .with_context(|| format!("Invalid total_copies for book '{}'", id))?;
            let available_copies: u32 = record
                .get(5)
                .unwrap_or("")
                .parse()
                .with_context(|| format!("Invalid available_copies for book '{}'", id))?;

            books.push(Book {
                id,
                title: record.get(1).unwrap_or("").to_string(),
                author: record.get(2).unwrap_or("").to_string(),
                isbn: record.get(3).unwrap_or("").to_string(),
                total_copies,
                available_copies,
            });
        }

        Ok(books)
    }

    /// Overwrite `books.csv` with the given catalog.
    pub fn write_all(&self, books: &[Book]) -> Result<()> {
        let file_path = self.connection.books_file_path();

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let writer = BufWriter::new(file);
        let mut csv_writer = Writer::from_writer(writer);

        csv_writer.write_record(&[
            "id",
            "title",
            "author",
            "isbn",
            "total_copies",
            "available_copies",
        ])?;

        for book in books {
            csv_writer.write_record(&[
                &book.id,
                &book.title,
                &book.author,
                &book.isbn,
                &book.total_copies.to_string(),
                &book.available_copies.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::test_utils::TestEnvironment;

    fn sample_book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Some Author".to_string(),
            isbn: "978-0000000000".to_string(),
            total_copies: 3,
            available_copies: 2,
        }
    }

    #[test]
    fn test_read_empty_when_file_absent() {
        let env = TestEnvironment::new().unwrap();
        let repo = BookRepository::new(env.connection.clone());
        assert!(repo.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let env = TestEnvironment::new().unwrap();
        let repo = BookRepository::new(env.connection.clone());

        let books = vec![
            sample_book("B1", "Dune"),
            sample_book("B2", "Title, with comma"),
        ];
        repo.write_all(&books).unwrap();

        let read_back = repo.read_all().unwrap();
        assert_eq!(read_back, books);
    }

    #[test]
    fn test_write_all_overwrites() {
        let env = TestEnvironment::new().unwrap();
        let repo = BookRepository::new(env.connection.clone());

        repo.write_all(&[sample_book("B1", "Dune")]).unwrap();
        repo.write_all(&[sample_book("B2", "Emma")]).unwrap();

        let read_back = repo.read_all().unwrap();
        assert_eq!(read_back.len(), 1);
        assert_eq!(read_back[0].id, "B2");
    }

    #[test]
    fn test_invalid_copy_count_is_an_error() {
        let env = TestEnvironment::new().unwrap();
        let repo = BookRepository::new(env.connection.clone());

        let path = env.connection.books_file_path();
        std::fs::write(&path, format!("{}\nB1,Dune,Herbert,isbn,three,3\n", super::HEADER)).unwrap();

        assert!(repo.read_all().is_err());
    }
}
