//! Header bar with the action buttons.

use eframe::egui;

use crate::app::{ActiveModal, LibraryTrackerApp};
use crate::ui::components::modals::{AddBookForm, BookPickForm, RegisterMemberForm};

impl LibraryTrackerApp {
    pub fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Library Tracker");
            ui.separator();

            if ui.button("Add Book").clicked() {
                self.modal = ActiveModal::AddBook(AddBookForm::default());
            }
            if ui.button("Register Member").clicked() {
                self.modal = ActiveModal::RegisterMember(RegisterMemberForm::default());
            }

            // Borrow and return act on the member selected in the table.
            let member_selected = self.selected_member_id.is_some();
            if ui
                .add_enabled(member_selected, egui::Button::new("Borrow Book"))
                .on_disabled_hover_text("Select a member first")
                .clicked()
            {
                self.modal = ActiveModal::BorrowBook(BookPickForm::default());
            }
            if ui
                .add_enabled(member_selected, egui::Button::new("Return Book"))
                .on_disabled_hover_text("Select a member first")
                .clicked()
            {
                self.modal = ActiveModal::ReturnBook(BookPickForm::default());
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Refresh").clicked() {
                    self.refresh();
                    self.status_message = "Lists refreshed.".to_string();
                }
            });
        });
    }
}
