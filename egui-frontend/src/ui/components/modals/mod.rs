//! Modal dialogs for data entry.
//!
//! Each dialog owns a form-state struct held in [`crate::app::ActiveModal`].
//! Render methods take the form by value and return the modal state for the
//! next frame, so submitting or cancelling simply returns
//! `ActiveModal::None`.

use eframe::egui;

pub mod add_book;
pub mod borrow_book;
pub mod register_member;
pub mod return_book;

/// What the user did with an open dialog this frame.
pub(crate) enum ModalOutcome {
    Keep,
    Cancel,
    Submit,
}

#[derive(Default)]
pub struct AddBookForm {
    pub title: String,
    pub author: String,
    pub isbn: String,
    /// Kept as text until submit; parsed and validated there.
    pub total_copies: String,
    pub error: Option<String>,
}

pub struct RegisterMemberForm {
    pub name: String,
    pub email: String,
    pub role: shared::MemberRole,
    pub error: Option<String>,
}

impl Default for RegisterMemberForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: shared::MemberRole::Student,
            error: None,
        }
    }
}

/// Book selection state for the borrow and return dialogs.
#[derive(Default)]
pub struct BookPickForm {
    pub selected_book_id: Option<String>,
}

/// Small centered window shared by all dialogs.
pub(crate) fn modal_window<R>(
    ctx: &egui::Context,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, add_contents)
        .and_then(|response| response.inner)
}
