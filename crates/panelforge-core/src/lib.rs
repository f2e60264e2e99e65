// PanelForge Core Library
// Re-export all modules for external use

pub mod app;
pub mod constants;
pub mod export;
pub mod layout;
pub mod params;
pub mod platform;
pub mod preview;
pub mod session;
pub mod store;
pub mod ui;

// Re-export PanelForgeApp from app module
pub use app::PanelForgeApp;
