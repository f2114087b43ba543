//! Output module for console messages.
//!
//! Provides:
//! - Colored status lines
//! - Project directory reporting

pub mod console;

pub use self::console::{
    print_dir_status, print_error, print_info, print_success, print_warning, status_line, Level,
};
