//! Console output utilities.

use std::fmt::Display;
use std::path::Path;

use console::style;

use crate::fs::DirStatus;

/// Severity tag shown in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(self) -> String {
        match self {
            Level::Info => style("INFO").cyan().bold().to_string(),
            Level::Success => style("OK").green().bold().to_string(),
            Level::Warning => style("WARN").yellow().bold().to_string(),
            Level::Error => style("ERROR").red().bold().to_string(),
        }
    }
}

/// Build a tagged status line.
pub fn status_line(level: Level, message: impl Display) -> String {
    format!("{} {}", level.tag(), message)
}

pub fn print_info(message: &str) {
    println!("{}", status_line(Level::Info, message));
}

pub fn print_success(message: &str) {
    println!("{}", status_line(Level::Success, message));
}

pub fn print_warning(message: &str) {
    println!("{}", status_line(Level::Warning, message));
}

/// Printed to stderr.
pub fn print_error(message: &str) {
    eprintln!("{}", status_line(Level::Error, message));
}

/// Report what happened to the project directory.
pub fn print_dir_status(status: DirStatus, path: &Path) {
    match status {
        DirStatus::Created => print_success(&format!("Directory created: {}", path.display())),
        DirStatus::Existing => {
            print_info(&format!("Directory already exists: {}", path.display()))
        }
    }
}
