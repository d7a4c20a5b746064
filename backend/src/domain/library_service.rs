//! The circulation rules engine.
//!
//! Owns the book, member, and transaction collections in memory and is the
//! only writer to them. Every mutating operation re-saves the full data set
//! through the storage trait before returning, so disk always reflects the
//! last completed operation.

use chrono::{DateTime, Duration, Utc};
use log::{error, info, warn};

use crate::domain::commands::book::{AddBookCommand, AddBookResult};
use crate::domain::commands::circulation::{
    BorrowBookCommand, BorrowBookResult, ReturnBookCommand, ReturnBookResult,
};
use crate::domain::commands::member::{RegisterMemberCommand, RegisterMemberResult};
use crate::domain::errors::LibraryError;
use crate::domain::models::{Book, Member, MemberRole, Transaction, TransactionStatus};
use crate::storage::traits::{LibraryData, LibraryStore};

/// Fine per whole day late. Students only.
const FINE_PER_DAY: u32 = 5;

pub struct LibraryService {
    store: Box<dyn LibraryStore>,
    data: LibraryData,
    next_book_number: u64,
    next_member_number: u64,
}

impl LibraryService {
    /// Load the collections from the store and seed the id counters from
    /// the highest id present, so ids stay monotonic across restarts.
    pub fn new(store: Box<dyn LibraryStore>) -> Result<Self, LibraryError> {
        let data = store.load()?;

        let next_book_number = data
            .books
            .iter()
            .filter_map(|b| Book::parse_id_number(&b.id))
            .max()
            .unwrap_or(0)
            + 1;
        let next_member_number = data
            .members
            .iter()
            .filter_map(|m| Member::parse_id_number(&m.id))
            .max()
            .unwrap_or(0)
            + 1;

        Ok(Self {
            store,
            data,
            next_book_number,
            next_member_number,
        })
    }

    /// Add a book to the catalog. All copies start available.
    pub fn add_book(&mut self, command: AddBookCommand) -> Result<AddBookResult, LibraryError> {
        self.validate_add_book(&command)?;

        let book = Book {
            id: Book::format_id(self.next_book_number),
            title: command.title.trim().to_string(),
            author: command.author.trim().to_string(),
            isbn: command.isbn.trim().to_string(),
            total_copies: command.total_copies,
            available_copies: command.total_copies,
        };
        self.next_book_number += 1;

        self.data.books.push(book.clone());
        self.persist()?;

        info!("Added book {} ('{}', {} copies)", book.id, book.title, book.total_copies);
        Ok(AddBookResult { book })
    }

    /// Register a member. The role is a closed enum by the time it gets
    /// here; unrecognized role text never reaches the engine.
    pub fn register_member(
        &mut self,
        command: RegisterMemberCommand,
    ) -> Result<RegisterMemberResult, LibraryError> {
        self.validate_register_member(&command)?;

        let member = Member {
            id: Member::format_id(self.next_member_number),
            name: command.name.trim().to_string(),
            email: command.email.trim().to_string(),
            role: command.role,
            borrowed_books: Vec::new(),
        };
        self.next_member_number += 1;

        self.data.members.push(member.clone());
        self.persist()?;

        info!("Registered {} {} ({})", member.role, member.id, member.name);
        Ok(RegisterMemberResult { member })
    }

    /// Lend a copy of a book to a member.
    pub fn borrow_book(
        &mut self,
        command: BorrowBookCommand,
    ) -> Result<BorrowBookResult, LibraryError> {
        let member_idx = self.member_index(&command.member_id)?;
        let book_idx = self.book_index(&command.book_id)?;

        {
            let member = &self.data.members[member_idx];
            let book = &self.data.books[book_idx];

            if !book.has_available_copy() {
                warn!("Borrow rejected: no copies of {} left", book.id);
                return Err(LibraryError::NoCopiesAvailable {
                    title: book.title.clone(),
                });
            }
            if let Some(limit) = member.role.borrow_limit() {
                if member.borrowed_books.len() >= limit {
                    warn!("Borrow rejected: {} is at the {}-book limit", member.id, limit);
                    return Err(LibraryError::BorrowLimitExceeded { limit });
                }
            }
            if member.has_borrowed(&book.id) {
                warn!("Borrow rejected: {} already holds {}", member.id, book.id);
                return Err(LibraryError::AlreadyBorrowed {
                    member_id: member.id.clone(),
                    book_id: book.id.clone(),
                });
            }
        }

        let borrow_date = command.borrow_date.unwrap_or_else(Utc::now);
        let loan_days = self.data.members[member_idx].role.loan_period_days();
        let due_date = borrow_date + Duration::days(loan_days);

        let transaction = Transaction {
            id: Transaction::generate_id(),
            member_id: command.member_id.clone(),
            book_id: command.book_id.clone(),
            borrow_date,
            due_date,
            return_date: None,
            fine: 0,
            status: TransactionStatus::Borrowed,
        };

        self.data.transactions.push(transaction.clone());
        self.data.members[member_idx]
            .borrowed_books
            .push(command.book_id.clone());
        self.data.books[book_idx].available_copies -= 1;
        self.persist()?;

        info!(
            "Member {} borrowed {} (due {})",
            command.member_id,
            command.book_id,
            due_date.format("%Y-%m-%d")
        );
        Ok(BorrowBookResult { transaction })
    }

    /// Take a book back, closing its open transaction and charging any
    /// late fee.
    pub fn return_book(
        &mut self,
        command: ReturnBookCommand,
    ) -> Result<ReturnBookResult, LibraryError> {
        let member_idx = self.member_index(&command.member_id)?;
        let book_idx = self.book_index(&command.book_id)?;

        if !self.data.members[member_idx].has_borrowed(&command.book_id) {
            warn!(
                "Return rejected: {} does not hold {}",
                command.member_id, command.book_id
            );
            return Err(LibraryError::NotBorrowed {
                member_id: command.member_id.clone(),
                book_id: command.book_id.clone(),
            });
        }

        let tx_idx = self
            .data
            .transactions
            .iter()
            .position(|t| {
                t.member_id == command.member_id && t.book_id == command.book_id && t.is_open()
            })
            .ok_or_else(|| {
                // The borrowed list says the loan exists but the ledger has
                // no open transaction for it.
                error!(
                    "Consistency fault: {} holds {} but the ledger has no open transaction",
                    command.member_id, command.book_id
                );
                LibraryError::TransactionNotFound {
                    member_id: command.member_id.clone(),
                    book_id: command.book_id.clone(),
                }
            })?;

        let return_date = command.return_date.unwrap_or_else(Utc::now);
        let role = self.data.members[member_idx].role;
        let due_date = self.data.transactions[tx_idx].due_date;
        let fine = late_fine(role, due_date, return_date);

        self.data.transactions[tx_idx].mark_returned(return_date, fine);
        self.data.members[member_idx]
            .borrowed_books
            .retain(|b| b != &command.book_id);
        self.data.books[book_idx].available_copies += 1;
        self.persist()?;

        if fine > 0 {
            warn!(
                "Member {} returned {} late, fine {}",
                command.member_id, command.book_id, fine
            );
        } else {
            info!("Member {} returned {}", command.member_id, command.book_id);
        }

        Ok(ReturnBookResult {
            transaction: self.data.transactions[tx_idx].clone(),
        })
    }

    // Read access for the presentation layer: cloned snapshots only, so
    // entity records cannot be mutated behind the engine's back.

    pub fn list_books(&self) -> Vec<Book> {
        self.data.books.clone()
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.data.members.clone()
    }

    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.data.transactions.clone()
    }

    pub fn get_book(&self, book_id: &str) -> Option<Book> {
        self.data.books.iter().find(|b| b.id == book_id).cloned()
    }

    pub fn get_member(&self, member_id: &str) -> Option<Member> {
        self.data
            .members
            .iter()
            .find(|m| m.id == member_id)
            .cloned()
    }

    fn member_index(&self, member_id: &str) -> Result<usize, LibraryError> {
        self.data
            .members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| LibraryError::MemberNotFound(member_id.to_string()))
    }

    fn book_index(&self, book_id: &str) -> Result<usize, LibraryError> {
        self.data
            .books
            .iter()
            .position(|b| b.id == book_id)
            .ok_or_else(|| LibraryError::BookNotFound(book_id.to_string()))
    }

    fn validate_add_book(&self, command: &AddBookCommand) -> Result<(), LibraryError> {
        if command.title.trim().is_empty() {
            return Err(LibraryError::InvalidInput("Book title cannot be empty".to_string()));
        }
        if command.author.trim().is_empty() {
            return Err(LibraryError::InvalidInput("Author cannot be empty".to_string()));
        }
        if command.isbn.trim().is_empty() {
            return Err(LibraryError::InvalidInput("ISBN cannot be empty".to_string()));
        }
        if command.total_copies == 0 {
            return Err(LibraryError::InvalidInput(
                "Total copies must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_register_member(
        &self,
        command: &RegisterMemberCommand,
    ) -> Result<(), LibraryError> {
        if command.name.trim().is_empty() {
            return Err(LibraryError::InvalidInput("Member name cannot be empty".to_string()));
        }
        let email = command.email.trim();
        if email.is_empty() {
            return Err(LibraryError::InvalidInput("Email cannot be empty".to_string()));
        }
        if !email.contains('@') {
            return Err(LibraryError::InvalidInput(format!(
                "'{}' does not look like an email address",
                email
            )));
        }
        Ok(())
    }

    fn persist(&self) -> Result<(), LibraryError> {
        self.store.save(&self.data)?;
        Ok(())
    }
}

/// Whole days late times the per-day rate. Faculty are never fined.
fn late_fine(role: MemberRole, due_date: DateTime<Utc>, return_date: DateTime<Utc>) -> u32 {
    if role != MemberRole::Student || return_date <= due_date {
        return 0;
    }
    let days_late = (return_date - due_date).num_days();
    days_late as u32 * FINE_PER_DAY
}
