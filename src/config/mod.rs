//! Configuration module for the folder-manager.
//!
//! This module handles:
//! - Locating the per-user config file
//! - Reading the stored base directory or creating it interactively
//! - Validating what was read

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{default_config_path, home_dir, ConfigResolver};
pub use validation::validate_base_path;
