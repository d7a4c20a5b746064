//! Return dialog: pick one of the member's borrowed books.

use eframe::egui;

use library_tracker_backend::domain::commands::circulation::ReturnBookCommand;

use super::{modal_window, BookPickForm, ModalOutcome};
use crate::app::{ActiveModal, LibraryTrackerApp};

impl LibraryTrackerApp {
    pub fn render_return_modal(
        &mut self,
        ctx: &egui::Context,
        mut form: BookPickForm,
    ) -> ActiveModal {
        let Some(member) = self.selected_member().cloned() else {
            self.status_message = "Select a member first.".to_string();
            return ActiveModal::None;
        };

        if member.borrowed_books.is_empty() {
            self.status_message = format!("{} has no borrowed books.", member.name);
            return ActiveModal::None;
        }

        // Resolve titles for the member's borrowed book ids, in borrow order.
        let borrowed: Vec<shared::Book> = member
            .borrowed_books
            .iter()
            .filter_map(|id| self.books.iter().find(|b| &b.id == id).cloned())
            .collect();

        let mut outcome = ModalOutcome::Keep;

        modal_window(ctx, "Return Book", |ui| {
            ui.label(format!("Return for: {} ({})", member.name, member.id));
            ui.add_space(6.0);

            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    for book in &borrowed {
                        let selected =
                            form.selected_book_id.as_deref() == Some(book.id.as_str());
                        let label = format!("{} | {}", book.id, book.title);
                        if ui.selectable_label(selected, label).clicked() {
                            form.selected_book_id = Some(book.id.clone());
                        }
                    }
                });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                let can_submit = form.selected_book_id.is_some();
                if ui
                    .add_enabled(can_submit, egui::Button::new("Confirm Return"))
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
            ModalOutcome::Keep => ActiveModal::ReturnBook(form),
            ModalOutcome::Cancel => ActiveModal::None,
            ModalOutcome::Submit => {
                if let Some(book_id) = form.selected_book_id.as_deref() {
                    self.apply_return(ReturnBookCommand::new(&member.id, book_id));
                }
                ActiveModal::None
            }
        }
    }
}
