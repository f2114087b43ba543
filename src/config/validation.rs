//! Configuration validation logic.

use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};

/// Validate a base directory read from (or about to be returned for) `config_path`.
///
/// An empty value can never produce a usable project path and is rejected.
/// A relative value is allowed but resolves against the working directory, so it
/// is only warned about.
pub fn validate_base_path(config_path: &Path, base_path: &str) -> Result<()> {
    if base_path.trim().is_empty() {
        return Err(Error::ConfigValidation {
            path: config_path.to_path_buf(),
            message: "base directory is empty. Edit the file or delete it to be asked again"
                .to_string(),
        });
    }

    if !Path::new(base_path).is_absolute() {
        warn!(
            base_path,
            "base directory is not an absolute path, it will be resolved against the current directory"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_base_path() {
        let config = Path::new("config.txt");
        assert!(validate_base_path(config, "/home/u/Projects").is_ok());
        assert!(validate_base_path(config, "relative/dir").is_ok());
    }

    #[test]
    fn test_empty_base_path() {
        let config = Path::new("config.txt");
        assert!(validate_base_path(config, "").is_err());
        assert!(validate_base_path(config, "   ").is_err());
    }
}
