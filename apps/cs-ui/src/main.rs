#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::CellSimApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Battery Cell Simulator"),
        ..Default::default()
    };

    eframe::run_native(
        "Battery Cell Simulator",
        options,
        Box::new(|cc| Ok(Box::new(CellSimApp::new(cc)))),
    )
}
