//! Locating, reading and creating the base directory config file.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::config::settings::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_BASE_SUBDIR, HOME_ENV,
};
use crate::config::validation::validate_base_path;
use crate::error::{Error, Result};
use crate::prompt::Prompter;

/// Home directory from `HOME` (`USERPROFILE` on Windows). Unset or empty is `None`.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os(HOME_ENV)
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// Default config file location: `<local data dir>/FolderManager/config.txt`.
///
/// On Windows this is `%USERPROFILE%\AppData\Local\FolderManager\config.txt`.
pub fn default_config_path() -> Result<PathBuf> {
    if home_dir().is_none() {
        return Err(Error::NoHomeDirectory);
    }
    let base_dirs = BaseDirs::new().ok_or(Error::NoHomeDirectory)?;
    Ok(base_dirs
        .data_local_dir()
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}

/// Resolves the configured base directory, asking the user on first run.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    config_path: PathBuf,
    home_dir: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(config_path: PathBuf, home_dir: Option<PathBuf>) -> Self {
        Self {
            config_path,
            home_dir,
        }
    }

    /// Build a resolver from the environment.
    ///
    /// An explicit `config_path` replaces the default location, which is the
    /// only case where a missing home directory is not an immediate error.
    pub fn from_env(config_path: Option<PathBuf>) -> Result<Self> {
        let home_dir = home_dir();
        let config_path = match config_path {
            Some(path) => path,
            None => default_config_path()?,
        };
        Ok(Self::new(config_path, home_dir))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Suggested base directory for a fresh config: `<home>/Projects`.
    pub fn suggested_base_path(&self) -> Result<PathBuf> {
        self.home_dir
            .as_ref()
            .map(|home| home.join(DEFAULT_BASE_SUBDIR))
            .ok_or(Error::NoHomeDirectory)
    }

    /// Return the stored base directory, or create the config interactively.
    pub fn resolve<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<String> {
        self.ensure_config_dir()?;

        let base_path = if self.config_path.is_file() {
            debug!(path = %self.config_path.display(), "reading config");
            self.read()?
        } else {
            debug!(path = %self.config_path.display(), "config not found, creating");
            self.create(prompter)?
        };

        validate_base_path(&self.config_path, &base_path)?;
        Ok(base_path)
    }

    /// Read the first line of the config file, without its line ending.
    pub fn read(&self) -> Result<String> {
        let content = fs::read_to_string(&self.config_path).map_err(|e| self.io_error(e))?;
        let first_line = content.lines().next().unwrap_or("");
        Ok(first_line.trim_end_matches('\r').to_string())
    }

    /// Write `base_path` as the single line of the config file.
    pub fn save(&self, base_path: &str) -> Result<()> {
        fs::write(&self.config_path, format!("{}\n", base_path)).map_err(|e| self.io_error(e))
    }

    fn create<R: BufRead, W: Write>(&self, prompter: &mut Prompter<R, W>) -> Result<String> {
        let suggested = self.suggested_base_path()?.display().to_string();

        prompter.say("Config file not found.")?;
        prompter.say(&format!("Suggested default base directory: {}", suggested))?;

        let base_path = if prompter.confirm("Use this as your base directory?")? {
            suggested
        } else {
            loop {
                let entered = prompter.ask("Enter your preferred base directory:")?;
                if validate_base_path(&self.config_path, &entered).is_ok() {
                    break entered;
                }
                prompter.say("The base directory cannot be empty.")?;
            }
        };

        self.save(&base_path)?;
        prompter.say(&format!(
            "Saved base directory to config file: {}",
            self.config_path.display()
        ))?;

        Ok(base_path)
    }

    fn ensure_config_dir(&self) -> Result<()> {
        match self.config_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| self.io_error(e))
            }
            _ => Ok(()),
        }
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::ConfigIo {
            path: self.config_path.clone(),
            source,
        }
    }
}
