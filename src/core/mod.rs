//! Core application functionality
//!
//! This module contains the core application logic, including:
//! - Settings and CLI handling
//! - The error taxonomy shared by the layout core
//! - Running a complete job from parsed arguments

pub mod cli;
pub mod config;
pub mod errors;
pub mod platform;
pub mod runner;

// Re-export commonly used items
pub use cli::CliArgs;
pub use config::{ConfigFile, LayoutSettings};
pub use errors::{LayoutError, LayoutResult};
pub use runner::run_app;
