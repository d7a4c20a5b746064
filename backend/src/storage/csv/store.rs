use anyhow::Result;
use log::{debug, info};

use super::{BookRepository, CsvConnection, MemberRepository, TransactionRepository};
use crate::storage::traits::{LibraryData, LibraryStore};

/// CSV implementation of [`LibraryStore`], composing one repository per
/// collection file.
#[derive(Clone)]
pub struct CsvLibraryStore {
    books: BookRepository,
    members: MemberRepository,
    transactions: TransactionRepository,
}

impl CsvLibraryStore {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            books: BookRepository::new(connection.clone()),
            members: MemberRepository::new(connection.clone()),
            transactions: TransactionRepository::new(connection),
        }
    }
}

impl LibraryStore for CsvLibraryStore {
    fn load(&self) -> Result<LibraryData> {
        let data = LibraryData {
            books: self.books.read_all()?,
            members: self.members.read_all()?,
            transactions: self.transactions.read_all()?,
        };

        info!(
            "Loaded {} books, {} members, {} transactions",
            data.books.len(),
            data.members.len(),
            data.transactions.len()
        );

        Ok(data)
    }

    fn save(&self, data: &LibraryData) -> Result<()> {
        self.books.write_all(&data.books)?;
        self.members.write_all(&data.members)?;
        self.transactions.write_all(&data.transactions)?;

        debug!(
            "Saved {} books, {} members, {} transactions",
            data.books.len(),
            data.members.len(),
            data.transactions.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Book, Member, MemberRole, Transaction, TransactionStatus};
    use crate::storage::csv::test_utils::TestEnvironment;
    use chrono::{Duration, Utc};

    fn sample_data() -> LibraryData {
        let now = Utc::now();
        let mut closed = Transaction {
            id: "aaaa1111".to_string(),
            member_id: "U1".to_string(),
            book_id: "B1".to_string(),
            borrow_date: now - Duration::days(20),
            due_date: now - Duration::days(6),
            return_date: None,
            fine: 0,
            status: TransactionStatus::Borrowed,
        };
        closed.mark_returned(now, 30);

        LibraryData {
            books: vec![Book {
                id: "B1".to_string(),
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                isbn: "978-0441172719".to_string(),
                total_copies: 2,
                available_copies: 1,
            }],
            members: vec![Member {
                id: "U1".to_string(),
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                role: MemberRole::Student,
                borrowed_books: vec!["B1".to_string()],
            }],
            transactions: vec![
                closed,
                Transaction {
                    id: "bbbb2222".to_string(),
                    member_id: "U1".to_string(),
                    book_id: "B1".to_string(),
                    borrow_date: now,
                    due_date: now + Duration::days(14),
                    return_date: None,
                    fine: 0,
                    status: TransactionStatus::Borrowed,
                },
            ],
        }
    }

    #[test]
    fn test_load_defaults_to_empty_collections() {
        let env = TestEnvironment::new().unwrap();
        let store = CsvLibraryStore::new(env.connection.clone());

        let data = store.load().unwrap();
        assert_eq!(data, LibraryData::default());
    }

    #[test]
    fn test_save_then_load_is_field_for_field_identical() {
        let env = TestEnvironment::new().unwrap();
        let store = CsvLibraryStore::new(env.connection.clone());

        let data = sample_data();
        store.save(&data).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_save_overwrites_previous_state() {
        let env = TestEnvironment::new().unwrap();
        let store = CsvLibraryStore::new(env.connection.clone());

        store.save(&sample_data()).unwrap();
        store.save(&LibraryData::default()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, LibraryData::default());
    }
}
