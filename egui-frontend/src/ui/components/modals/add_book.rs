//! Add-book dialog.

use eframe::egui;

use library_tracker_backend::domain::commands::book::AddBookCommand;

use super::{modal_window, AddBookForm, ModalOutcome};
use crate::app::{ActiveModal, LibraryTrackerApp};

impl LibraryTrackerApp {
    pub fn render_add_book_modal(
        &mut self,
        ctx: &egui::Context,
        mut form: AddBookForm,
    ) -> ActiveModal {
        let mut outcome = ModalOutcome::Keep;

        modal_window(ctx, "Add Book", |ui| {
            egui::Grid::new("add_book_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Title:");
                    ui.text_edit_singleline(&mut form.title);
                    ui.end_row();

                    ui.label("Author:");
                    ui.text_edit_singleline(&mut form.author);
                    ui.end_row();

                    ui.label("ISBN:");
                    ui.text_edit_singleline(&mut form.isbn);
                    ui.end_row();

                    ui.label("Total copies:");
                    ui.text_edit_singleline(&mut form.total_copies);
                    ui.end_row();
                });

            if let Some(error) = &form.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    outcome = ModalOutcome::Submit;
                }
                if ui.button("Cancel").clicked() {
                    outcome = ModalOutcome::Cancel;
                }
            });
        });

        match outcome {
            ModalOutcome::Keep => ActiveModal::AddBook(form),
            ModalOutcome::Cancel => ActiveModal::None,
            ModalOutcome::Submit => match parse_command(&form) {
                Ok(command) => {
                    self.apply_add_book(command);
                    ActiveModal::None
                }
                Err(message) => {
                    form.error = Some(message);
                    ActiveModal::AddBook(form)
                }
            },
        }
    }
}

fn parse_command(form: &AddBookForm) -> Result<AddBookCommand, String> {
    if form.title.trim().is_empty()
        || form.author.trim().is_empty()
        || form.isbn.trim().is_empty()
    {
        return Err("All fields are required.".to_string());
    }

    let total_copies: u32 = form
        .total_copies
        .trim()
        .parse()
        .map_err(|_| "Total copies must be a whole number.".to_string())?;
    if total_copies == 0 {
        return Err("Total copies must be at least 1.".to_string());
    }

    Ok(AddBookCommand {
        title: form.title.clone(),
        author: form.author.clone(),
        isbn: form.isbn.clone(),
        total_copies,
    })
}
