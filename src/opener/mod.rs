//! Handing folders off to the system file browser.
//!
//! Provides:
//! - The [`SystemOpener`] capability
//! - A platform adapter and a no-op adapter

pub mod platform;

use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::output::print_warning;

pub use platform::{downloads_dir, PlatformOpener};

/// Opens folders in a file browser.
pub trait SystemOpener {
    /// Show `path` in the file browser.
    fn open_path(&self, path: &Path) -> Result<()>;

    /// Show the user's Downloads folder in the file browser.
    fn open_downloads(&self) -> Result<()>;
}

/// Opener that does nothing, used with `--no-open`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOpener;

impl SystemOpener for NoopOpener {
    fn open_path(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn open_downloads(&self) -> Result<()> {
        Ok(())
    }
}

/// Open the project folder and the Downloads folder.
///
/// Failures are reported as warnings and never stop the other call.
/// Returns the number of failed calls.
pub fn open_project(opener: &dyn SystemOpener, path: &Path) -> usize {
    let results = [opener.open_path(path), opener.open_downloads()];

    results
        .into_iter()
        .filter_map(|result| result.err())
        .inspect(|e| {
            warn!(error = %e, "file browser handoff failed");
            print_warning(&e.to_string());
        })
        .count()
}
