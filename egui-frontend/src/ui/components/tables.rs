//! Book and member tables for the central panel.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::app::LibraryTrackerApp;

const ROW_HEIGHT: f32 = 20.0;

impl LibraryTrackerApp {
    pub fn render_tables(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            columns[0].group(|ui| {
                ui.strong("Books");
                ui.separator();
                // Distinct ids keep the two tables' state apart.
                ui.push_id("book_table", |ui| self.render_book_table(ui));
            });
            columns[1].group(|ui| {
                ui.strong("Members");
                ui.separator();
                ui.push_id("member_table", |ui| self.render_member_table(ui));
            });
        });
    }

    fn render_book_table(&self, ui: &mut egui::Ui) {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::remainder())
            .column(Column::auto())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("ID");
                });
                header.col(|ui| {
                    ui.strong("Title");
                });
                header.col(|ui| {
                    ui.strong("Author");
                });
                header.col(|ui| {
                    ui.strong("Available");
                });
            })
            .body(|mut body| {
                for book in &self.books {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(&book.id);
                        });
                        row.col(|ui| {
                            ui.label(&book.title);
                        });
                        row.col(|ui| {
                            ui.label(&book.author);
                        });
                        row.col(|ui| {
                            ui.label(book.availability_label());
                        });
                    });
                }
            });
    }

    /// Member rows are selectable; the selection drives borrow/return.
    fn render_member_table(&mut self, ui: &mut egui::Ui) {
        let mut clicked: Option<String> = None;

        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto())
            .column(Column::remainder())
            .column(Column::auto())
            .column(Column::auto())
            .header(ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("ID");
                });
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Role");
                });
                header.col(|ui| {
                    ui.strong("Books out");
                });
            })
            .body(|mut body| {
                for member in &self.members {
                    let selected =
                        self.selected_member_id.as_deref() == Some(member.id.as_str());
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            if ui.selectable_label(selected, &member.id).clicked() {
                                clicked = Some(member.id.clone());
                            }
                        });
                        row.col(|ui| {
                            ui.label(&member.name);
                        });
                        row.col(|ui| {
                            ui.label(member.role.to_string());
                        });
                        row.col(|ui| {
                            ui.label(member.borrowed_books.len().to_string());
                        });
                    });
                }
            });

        if let Some(id) = clicked {
            self.selected_member_id = Some(id);
        }
    }
}
