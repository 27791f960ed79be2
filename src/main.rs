//! VitalScope - Synthetic Vitals Demo & Interactive Chart Viewer
//!
//! A Rust application that generates a deterministic vital-sign dataset and
//! displays it as interactive line charts.

mod data;
mod stats;
mod charts;
mod gui;

use eframe::egui;
use gui::VitalscopeApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([900.0, 650.0])
            .with_title("VitalScope"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "VitalScope",
        options,
        Box::new(|cc| Ok(Box::new(VitalscopeApp::new(cc)))),
    )
}
