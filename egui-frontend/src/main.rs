use eframe::egui;
use log::{error, info};

mod app;
mod ui;

use app::LibraryTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Library Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([950.0, 620.0])
            .with_min_inner_size([760.0, 480.0])
            .with_title("Library Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Library Tracker",
        options,
        Box::new(|_cc| match LibraryTrackerApp::new() {
            Ok(app) => {
                info!("Successfully initialized Library Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
