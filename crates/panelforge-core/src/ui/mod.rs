pub mod controls_panel;
pub mod tabs;

use crate::platform::banner;
use egui_lens::ReactiveEventLogger;

// Re-export the show functions for each panel
pub use controls_panel::show_controls_panel;

// Re-export tab-related types
pub use tabs::{Tab, TabKind, TabViewer};

/// Initialize and display the application banner in the event log
pub fn initialize_and_show_banner(logger: &ReactiveEventLogger) {
    let mut app_banner = banner::Banner::new();
    app_banner.format();
    logger.log_info(&app_banner.message);
}
