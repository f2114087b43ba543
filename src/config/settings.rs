//! Application-wide constants.

/// Directory (under the per-user local data directory) holding the config file.
pub const CONFIG_DIR_NAME: &str = "FolderManager";

/// Name of the plain-text config file.
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Sub-directory of the home directory suggested as base directory on first run.
pub const DEFAULT_BASE_SUBDIR: &str = "Projects";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "FOLDER_MANAGER_CONFIG";

/// Maximum folder name length in characters. Longer names are truncated.
pub const MAX_FOLDER_NAME_LEN: usize = 255;

/// Characters that are never allowed in a folder name.
pub const RESERVED_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Environment variable naming the user's home/profile directory.
#[cfg(windows)]
pub const HOME_ENV: &str = "USERPROFILE";

#[cfg(not(windows))]
pub const HOME_ENV: &str = "HOME";
