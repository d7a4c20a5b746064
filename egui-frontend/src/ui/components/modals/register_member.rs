//! Register-member dialog.
//!
//! Role is picked from a closed list; there is no free-form role input.

use eframe::egui;

use library_tracker_backend::domain::commands::member::RegisterMemberCommand;

use super::{modal_window, ModalOutcome, RegisterMemberForm};
use crate::app::{ActiveModal, LibraryTrackerApp};
use crate::ui::mappers;

impl LibraryTrackerApp {
    pub fn render_register_member_modal(
        &mut self,
        ctx: &egui::Context,
        mut form: RegisterMemberForm,
    ) -> ActiveModal {
        let mut outcome = ModalOutcome::Keep;

        modal_window(ctx, "Register Member", |ui| {
            egui::Grid::new("register_member_form")
                .num_columns(2)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Name:");
                    ui.text_edit_singleline(&mut form.name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut form.email);
                    ui.end_row();

                    ui.label("Role:");
                    egui::ComboBox::from_id_source("member_role")
                        .selected_text(form.role.to_string())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(
                                &mut form.role,
                                shared::MemberRole::Student,
                                "Student",
                            );
                            ui.selectable_value(
                                &mut form.role,
                                shared::MemberRole::Faculty,
                                "Faculty",
                            );
                        });
                    ui.end_row();
                });

            if let Some(error) = &form.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Register").clicked() {
                    outcome = ModalOutcome::Submit;
                }
                if ui.button("Cancel").clicked() {
                    outcome = ModalOutcome::Cancel;
                }
            });
        });

        match outcome {
            ModalOutcome::Keep => ActiveModal::RegisterMember(form),
            ModalOutcome::Cancel => ActiveModal::None,
            ModalOutcome::Submit => {
                if form.name.trim().is_empty() || form.email.trim().is_empty() {
                    form.error = Some("All fields are required.".to_string());
                    return ActiveModal::RegisterMember(form);
                }
                self.apply_register_member(RegisterMemberCommand {
                    name: form.name.clone(),
                    email: form.email.clone(),
                    role: mappers::role_from_dto(form.role),
                });
                ActiveModal::None
            }
        }
    }
}
