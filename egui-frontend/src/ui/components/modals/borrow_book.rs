//! Borrow dialog: pick one of the books with copies on the shelf.

use eframe::egui;

use library_tracker_backend::domain::commands::circulation::BorrowBookCommand;

use super::{modal_window, BookPickForm, ModalOutcome};
use crate::app::{ActiveModal, LibraryTrackerApp};

impl LibraryTrackerApp {
    pub fn render_borrow_modal(
        &mut self,
        ctx: &egui::Context,
        mut form: BookPickForm,
    ) -> ActiveModal {
        let Some(member) = self.selected_member().cloned() else {
            self.status_message = "Select a member first.".to_string();
            return ActiveModal::None;
        };

        let available: Vec<shared::Book> = self
            .books
            .iter()
            .filter(|b| b.available_copies > 0)
            .cloned()
            .collect();

        let mut outcome = ModalOutcome::Keep;

        modal_window(ctx, "Borrow Book", |ui| {
            ui.label(format!("Borrow for: {} ({})", member.name, member.id));
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    if available.is_empty() {
                        ui.label("No books with available copies.");
                    }
                    for book in &available {
                        let selected =
                            form.selected_book_id.as_deref() == Some(book.id.as_str());
                        let label = format!(
                            "{} | {} — {} | {}",
                            book.id,
                            book.title,
                            book.author,
                            book.availability_label()
                        );
                        if ui.selectable_label(selected, label).clicked() {
                            form.selected_book_id = Some(book.id.clone());
                        }
                    }
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let can_submit = form.selected_book_id.is_some();
                if ui
                    .add_enabled(can_submit, egui::Button::new("Confirm Borrow"))
                    .clicked()
                {
                    outcome = ModalOutcome::Submit;
                }
                if ui.button("Cancel").clicked() {
                    outcome = ModalOutcome::Cancel;
                }
            });
        });

        match outcome {
            ModalOutcome::Keep => ActiveModal::BorrowBook(form),
            ModalOutcome::Cancel => ActiveModal::None,
            ModalOutcome::Submit => {
                if let Some(book_id) = form.selected_book_id.as_deref() {
                    self.apply_borrow(BorrowBookCommand::new(&member.id, book_id));
                }
                ActiveModal::None
            }
        }
    }
}
