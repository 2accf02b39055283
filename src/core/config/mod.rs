//! Application configuration management
//!
//! This module handles all configuration aspects:
//! - Layout settings and their defaults
//! - The user settings file

pub mod settings;
pub mod user_config;

// Simple, clear re-exports
pub use settings::LayoutSettings;
pub use user_config::ConfigFile;
