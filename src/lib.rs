//! Folder Manager - create and open project folders from the command line
//!
//! This library provides the pieces behind the `folder-manager` binary.
//!
//! # Features
//!
//! - Per-user config file holding the base directory, created on first run
//! - Folder name sanitization with interactive confirmation
//! - Project directory creation that never touches existing files
//! - File browser handoff behind the [`SystemOpener`] trait
//!
//! # Example
//!
//! ```no_run
//! use folder_manager::{confirm_folder_name, project_path, ConfigResolver, Prompter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut prompter = Prompter::stdio();
//!     let name = confirm_folder_name("my project", &mut prompter)?;
//!     let base = ConfigResolver::from_env(None)?.resolve(&mut prompter)?;
//!     println!("{}", project_path(&base, &name).display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod opener;
pub mod output;
pub mod prompt;

// Re-exports for convenience
pub use config::ConfigResolver;
pub use error::{Error, Result};
pub use fs::{confirm_folder_name, ensure_project_dir, project_path, sanitize_folder_name};
pub use opener::{open_project, NoopOpener, PlatformOpener, SystemOpener};
pub use prompt::Prompter;
