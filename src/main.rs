// Date Range Picker
// Main entry point for the demo host view

use anyhow::Result;
use date_range_picker::services::settings::SettingsService;
use date_range_picker::ui_egui::RangePickerApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Date Range Picker");

    let settings = match SettingsService::with_default_path() {
        Ok(service) => Some(service),
        Err(e) => {
            log::warn!("Options will not be persisted: {:#}", e);
            None
        }
    };
    let options = match &settings {
        Some(service) => service.load()?,
        None => Default::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 520.0])
            .with_min_inner_size([380.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Range Picker",
        native_options,
        Box::new(move |cc| Ok(Box::new(RangePickerApp::new(cc, options, settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
