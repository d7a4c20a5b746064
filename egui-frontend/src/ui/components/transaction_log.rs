//! Bottom panel: status line plus the transaction log.

use eframe::egui;

use crate::app::LibraryTrackerApp;

impl LibraryTrackerApp {
    pub fn render_transaction_log(&mut self, ui: &mut egui::Ui) {
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&self.status_message).strong());
        ui.separator();
        ui.strong("Transactions");

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if self.transactions.is_empty() {
                    ui.label("No transactions yet.");
                    return;
                }
                // Most recent first; closed loans are dimmed.
                for tx in self.transactions.iter().rev() {
                    let line = format!(
                        "{} | Member: {} | Book: {} | {} | Borrow: {} | Due: {} | Returned: {} | Fine: {}",
                        tx.id,
                        tx.member_id,
                        tx.book_id,
                        tx.status,
                        date_part(&tx.borrow_date),
                        date_part(&tx.due_date),
                        tx.return_date.as_deref().map(date_part).unwrap_or("-"),
                        tx.fine,
                    );
                    if tx.is_open() {
                        ui.monospace(line);
                    } else {
                        ui.weak(egui::RichText::new(line).monospace());
                    }
                }
            });
    }
}

/// The `YYYY-MM-DD` prefix of an RFC 3339 timestamp.
fn date_part(date: &str) -> &str {
    date.get(..10).unwrap_or(date)
}
