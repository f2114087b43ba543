//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::settings::CONFIG_PATH_ENV;

/// Project folder manager CLI.
#[derive(Parser, Debug)]
#[command(
    name = "folder-manager",
    version,
    about = "Create a project folder under your base directory and open it",
    long_about = "Creates (or reuses) a project folder under a configured base directory, \
                  then opens it and your Downloads folder in the file browser.\n\n\
                  The base directory is asked for on first run and stored in a config file."
)]
pub struct Args {
    /// Name of the project folder. Unsafe characters are removed and
    /// whitespace becomes underscores before you are asked to confirm it.
    pub folder_name: Option<String>,

    /// Path to the config file holding the base directory.
    #[arg(short, long, env = CONFIG_PATH_ENV)]
    pub config: Option<PathBuf>,

    /// Don't open the folder or the Downloads folder in the file browser.
    #[arg(long)]
    pub no_open: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}
