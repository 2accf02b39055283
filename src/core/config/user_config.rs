//! User configuration file handling
//!
//! Manages settings from ~/.config/letterart/settings.json

use crate::core::config::LayoutSettings;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Location and lifecycle of the user settings file.
///
/// The file holds a full `LayoutSettings` record. It overrides built-in
/// defaults but is overridden by `--config` and CLI arguments.
pub struct ConfigFile;

impl ConfigFile {
    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the letterart config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("letterart")
    }

    /// Load settings from the user config file
    pub fn load() -> Option<LayoutSettings> {
        let path = Self::config_path();

        if !path.exists() {
            return None;
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(settings)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The ~/.config/letterart directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for `--log-file`
    pub fn initialize_config_directory() -> anyhow::Result<()> {
        let config_dir = Self::config_dir();
        fs::create_dir_all(&config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = Self::config_path();
        if !settings_path.exists() {
            LayoutSettings::default().save(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("  - Edit layout settings at: {:?}", settings_path);
        println!("  - Log files are written to: {:?}", logs_dir);
        Ok(())
    }
}
