//! HUD configuration
//!
//! Loaded from a JSON file, the same way the game's other data-driven
//! settings are. Every field has a default, so a config file only needs the
//! values it changes.
//!
//! ```json
//! {
//!     "wrap_column": 60,
//!     "debug_ui": true,
//!     "theme": { "warning": [220, 40, 40] }
//! }
//! ```

use crate::error::Result;
use crate::ui::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up by [`HudConfig::discover`]
pub const CONFIG_FILE: &str = "hud.json";

/// Logical HUD canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 960,
            height: 540,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Column width for wrapping log entries and descriptions
    pub wrap_column: usize,
    /// How many of the newest log entries the action log shows
    pub log_rows: usize,
    /// Show build version, frame rate and cursor position in the game panel
    pub debug_ui: bool,
    pub version_label: String,
    pub viewport: Viewport,
    pub theme: Theme,
}

impl Default for HudConfig {
    fn default() -> Self {
        HudConfig {
            wrap_column: 50,
            log_rows: 10,
            debug_ui: false,
            version_label: concat!("v", env!("CARGO_PKG_VERSION")).to_string(),
            viewport: Viewport::default(),
            theme: Theme::default(),
        }
    }
}

impl HudConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default location: `<config dir>/xibalba/hud.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("xibalba").join(CONFIG_FILE))
    }

    /// Loads the config from its default location
    ///
    /// Falls back to defaults when there is no config directory or no file.
    /// A file that exists but fails to parse is an error.
    pub fn discover() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "loading HUD config");
                Self::load_from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}
