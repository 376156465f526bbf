//! User preferences

use serde::{Serialize, Deserialize};
use unitgo_core::{DataSizeMode, DEFAULT_PRECISION};

/// UI color theme preference. Carried by the store; the engine does
/// not consume it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

/// Persisted application settings. Every field carries a default so a
/// partial or older settings file merges with the defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_precision")]
    pub precision: u32,
    #[serde(default)]
    pub data_size_mode: DataSizeMode,
    #[serde(default)]
    pub theme: Theme,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            precision: DEFAULT_PRECISION,
            data_size_mode: DataSizeMode::Si,
            theme: Theme::System,
        }
    }
}
