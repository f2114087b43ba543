//! Error types for the folder-manager application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Command line errors
    #[error("Missing folder name. Usage: folder-manager <FOLDER_NAME>")]
    MissingArgument,

    #[error("{0}")]
    Usage(String),

    // Configuration errors
    #[error("Could not determine the home directory (is HOME/USERPROFILE set?)")]
    NoHomeDirectory,

    #[error("Config file error at {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {message}", .path.display())]
    ConfigValidation { path: PathBuf, message: String },

    // Terminal errors
    #[error("Input closed while waiting for a response")]
    InputClosed,

    // File system errors
    #[error("Error creating directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error changing directory to {}: {source}", .path.display())]
    ChangeDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Reported as a warning, never fatal
    #[error("Could not open file browser: {0}")]
    FileBrowserOpen(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: u8 = 0;
    pub const FAILURE: u8 = 1;
}
