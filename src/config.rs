use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
const CONFIG_DIR_NAME: &str = "people-autocomplete";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period before a typed query is filtered.
    pub debounce_ms: u64,
    /// JSON file with the people roster. The bundled dataset is used when unset.
    pub data_path: Option<PathBuf>,
    pub placeholder: String,
    pub window_size: [f32; 2],
    pub max_panel_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            data_path: None,
            placeholder: "Enter a part of the name".to_string(),
            window_size: [600.0, 400.0],
            max_panel_height: 240.0,
        }
    }
}

impl Config {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }
    
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }
    
    /// Missing files fall back to defaults; anything else unreadable is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(AppError::io(path, e)),
        };
        
        let config: Config = serde_json::from_str(&raw).map_err(|e| AppError::json(path, e))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
    
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
