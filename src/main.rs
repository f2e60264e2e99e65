use egui::ViewportBuilder;
use panelforge_core::platform::parameters::gui;
use panelforge_core::PanelForgeApp;

/// The main function is the entry point of the application.
///
/// It initializes the logger, sets up the native window options,
/// and runs the application using the `eframe` framework.
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(|_cc| Ok(Box::new(PanelForgeApp::new()))),
    )
}
