use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::SchedulerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting clinic scheduler egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0]) // Room for the seven-column day grid
            .with_min_inner_size([900.0, 600.0])
            .with_title("Clinic Scheduler")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Clinic Scheduler",
        options,
        Box::new(|cc| match SchedulerApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized scheduler app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
