use customer_explorer::app::CustomerExplorerApp;
use customer_explorer::config::Config;
use customer_explorer::logging;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {:#}", e);
    }

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Using default config: {:#}", e);
        Config::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Customer Explorer"),
        ..Default::default()
    };

    eframe::run_native(
        "Customer Explorer",
        options,
        Box::new(move |cc| Box::new(CustomerExplorerApp::new(cc, &config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run the window: {}", e))
}
