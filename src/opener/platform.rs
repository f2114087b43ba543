//! Platform file browser integration.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use directories::UserDirs;
use tracing::debug;

use crate::error::{Error, Result};
use crate::opener::SystemOpener;

#[cfg(target_os = "windows")]
const FILE_BROWSER: &str = "explorer";

#[cfg(target_os = "macos")]
const FILE_BROWSER: &str = "open";

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
const FILE_BROWSER: &str = "xdg-open";

/// Resolve the user's Downloads folder.
pub fn downloads_dir() -> Option<PathBuf> {
    UserDirs::new().and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
}

/// Opens folders with the platform's file browser command.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlatformOpener;

impl PlatformOpener {
    fn launch(&self, path: &Path) -> Result<()> {
        debug!(command = FILE_BROWSER, path = %path.display(), "launching file browser");

        // Not waited on: explorer.exe reports a failure status even on success.
        Command::new(FILE_BROWSER)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FileBrowserOpen(format!("{} not found in PATH", FILE_BROWSER))
                } else {
                    Error::FileBrowserOpen(format!(
                        "failed to run {} for {}: {}",
                        FILE_BROWSER,
                        path.display(),
                        e
                    ))
                }
            })?;

        Ok(())
    }
}

impl SystemOpener for PlatformOpener {
    fn open_path(&self, path: &Path) -> Result<()> {
        self.launch(path)
    }

    fn open_downloads(&self) -> Result<()> {
        let downloads = downloads_dir()
            .ok_or_else(|| Error::FileBrowserOpen("could not locate Downloads folder".into()))?;
        self.launch(&downloads)
    }
}
