//! Session configuration persistence.
//!
//! The configurator keeps no design documents; the only thing carried
//! between sessions is the last parameter set and UI preferences, stored as
//! pretty JSON in the user config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::params::PanelParams;

pub const CONFIG_DIR_NAME: &str = "panelforge";
const CONFIG_FILE_NAME: &str = "session_config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub params: PanelParams,
    pub show_log_timestamps: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            params: PanelParams::default(),
            show_log_timestamps: false,
        }
    }
}

impl SessionConfig {
    pub fn save_to_file(&self, dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(CONFIG_FILE_NAME), json)?;
        Ok(())
    }

    pub fn load_from_file(dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json_path = dir.join(CONFIG_FILE_NAME);
        if json_path.exists() {
            let json = std::fs::read_to_string(json_path)?;
            let config: SessionConfig = serde_json::from_str(&json)?;
            Ok(config)
        } else {
            Ok(SessionConfig::default())
        }
    }
}

/// The per-user config directory, `~/.config/panelforge` or the platform
/// equivalent.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join(CONFIG_DIR_NAME))
        .unwrap_or_default()
}
