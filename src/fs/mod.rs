//! Filesystem module.
//!
//! Provides:
//! - Folder name sanitization and confirmation
//! - Project directory creation and working directory changes

pub mod naming;
pub mod paths;

pub use naming::{confirm_folder_name, is_usable_folder_name, sanitize_folder_name};
pub use paths::{
    change_working_directory, create_directory, directory_exists, ensure_project_dir,
    project_path, DirStatus,
};
