//! Application state and the top-level update loop.
//!
//! The app holds the rules engine plus DTO snapshots of its collections.
//! All mutations go through the engine's four operations; snapshots are
//! re-read after each one.

use anyhow::Result;
use eframe::egui;

use library_tracker_backend::domain::commands::book::AddBookCommand;
use library_tracker_backend::domain::commands::circulation::{
    BorrowBookCommand, ReturnBookCommand,
};
use library_tracker_backend::domain::commands::member::RegisterMemberCommand;
use library_tracker_backend::domain::LibraryService;
use library_tracker_backend::storage::csv::{CsvConnection, CsvLibraryStore};

use crate::ui::components::modals::{AddBookForm, BookPickForm, RegisterMemberForm};
use crate::ui::mappers;

/// Which modal form is open, with its state.
pub enum ActiveModal {
    None,
    AddBook(AddBookForm),
    RegisterMember(RegisterMemberForm),
    BorrowBook(BookPickForm),
    ReturnBook(BookPickForm),
}

pub struct LibraryTrackerApp {
    pub library: LibraryService,
    // DTO snapshots rendered by the tables.
    pub books: Vec<shared::Book>,
    pub members: Vec<shared::Member>,
    pub transactions: Vec<shared::Transaction>,
    pub selected_member_id: Option<String>,
    pub status_message: String,
    pub modal: ActiveModal,
}

impl LibraryTrackerApp {
    pub fn new() -> Result<Self> {
        let connection = CsvConnection::new_default()?;
        let library = LibraryService::new(Box::new(CsvLibraryStore::new(connection)))?;

        let mut app = Self {
            library,
            books: Vec::new(),
            members: Vec::new(),
            transactions: Vec::new(),
            selected_member_id: None,
            status_message: String::new(),
            modal: ActiveModal::None,
        };
        app.refresh();
        app.status_message = "Data loaded from disk.".to_string();
        Ok(app)
    }

    /// Re-read DTO snapshots from the rules engine.
    pub fn refresh(&mut self) {
        self.books = self
            .library
            .list_books()
            .into_iter()
            .map(mappers::book_to_dto)
            .collect();
        self.members = self
            .library
            .list_members()
            .into_iter()
            .map(mappers::member_to_dto)
            .collect();
        self.transactions = self
            .library
            .list_transactions()
            .into_iter()
            .map(mappers::transaction_to_dto)
            .collect();

        // Drop a stale selection if the member disappeared from the register.
        if let Some(id) = &self.selected_member_id {
            if !self.members.iter().any(|m| &m.id == id) {
                self.selected_member_id = None;
            }
        }
    }

    pub fn selected_member(&self) -> Option<&shared::Member> {
        let id = self.selected_member_id.as_deref()?;
        self.members.iter().find(|m| m.id == id)
    }

    pub fn apply_add_book(&mut self, command: AddBookCommand) {
        match self.library.add_book(command) {
            Ok(result) => {
                self.status_message =
                    format!("Book '{}' added as {}.", result.book.title, result.book.id);
                self.refresh();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    pub fn apply_register_member(&mut self, command: RegisterMemberCommand) {
        match self.library.register_member(command) {
            Ok(result) => {
                self.status_message = format!(
                    "{} '{}' registered as {}.",
                    result.member.role, result.member.name, result.member.id
                );
                self.refresh();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    pub fn apply_borrow(&mut self, command: BorrowBookCommand) {
        match self.library.borrow_book(command) {
            Ok(result) => {
                let tx = result.transaction;
                let title = self
                    .library
                    .get_book(&tx.book_id)
                    .map(|b| b.title)
                    .unwrap_or_else(|| tx.book_id.clone());
                self.status_message = format!(
                    "'{}' borrowed. Due on {}.",
                    title,
                    tx.due_date.format("%Y-%m-%d")
                );
                self.refresh();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    pub fn apply_return(&mut self, command: ReturnBookCommand) {
        match self.library.return_book(command) {
            Ok(result) => {
                let tx = result.transaction;
                let title = self
                    .library
                    .get_book(&tx.book_id)
                    .map(|b| b.title)
                    .unwrap_or_else(|| tx.book_id.clone());
                self.status_message = if tx.fine > 0 {
                    format!("'{}' returned late! Fine: {}.", title, tx.fine)
                } else {
                    format!("'{}' returned.", title)
                };
                self.refresh();
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    /// Render whichever modal is open. The modal is moved out for the
    /// frame so render methods can borrow `self` freely, and whatever
    /// state they return becomes the modal for the next frame.
    fn render_active_modal(&mut self, ctx: &egui::Context) {
        let modal = std::mem::replace(&mut self.modal, ActiveModal::None);
        self.modal = match modal {
            ActiveModal::None => ActiveModal::None,
            ActiveModal::AddBook(form) => self.render_add_book_modal(ctx, form),
            ActiveModal::RegisterMember(form) => self.render_register_member_modal(ctx, form),
            ActiveModal::BorrowBook(form) => self.render_borrow_modal(ctx, form),
            ActiveModal::ReturnBook(form) => self.render_return_modal(ctx, form),
        };
    }
}

impl eframe::App for LibraryTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
            self.render_header(ui);
        });

        egui::TopBottomPanel::bottom("log_panel")
            .min_height(170.0)
            .show(ctx, |ui| {
                self.render_transaction_log(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_tables(ui);
        });

        self.render_active_modal(ctx);
    }
}
