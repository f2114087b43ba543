//! Folder name sanitization and confirmation.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::settings::{MAX_FOLDER_NAME_LEN, RESERVED_CHARS};
use crate::error::Result;
use crate::prompt::Prompter;

/// Turn arbitrary input into a filesystem-safe folder name.
///
/// Reserved characters (`<>:"/\|?*`) and control characters are dropped,
/// remaining whitespace becomes `_`, and the result is cut to
/// [`MAX_FOLDER_NAME_LEN`] characters. Never fails, and applying it twice
/// gives the same result as applying it once.
pub fn sanitize_folder_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() && !RESERVED_CHARS.contains(c))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .take(MAX_FOLDER_NAME_LEN)
        .collect()
}

/// Whether a sanitized name can be joined onto the base directory.
pub fn is_usable_folder_name(name: &str) -> bool {
    !matches!(name, "" | "." | "..")
}

/// Show the sanitized name and ask for confirmation until the user accepts one.
///
/// A rejected name is replaced by a freshly entered one, which is sanitized again.
pub fn confirm_folder_name<R: BufRead, W: Write>(
    raw: &str,
    prompter: &mut Prompter<R, W>,
) -> Result<String> {
    let mut candidate = raw.to_string();

    loop {
        let sanitized = sanitize_folder_name(&candidate);
        debug!(raw = %candidate, sanitized = %sanitized, "sanitized folder name");

        prompter.say(&format!("Sanitized folder name: \"{}\"", sanitized))?;

        if !is_usable_folder_name(&sanitized) {
            prompter.say("This name cannot be used as a folder name.")?;
        } else if prompter.confirm("Do you want to use this name?")? {
            return Ok(sanitized);
        }

        candidate = prompter.ask("Enter a new folder name:")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn confirm(raw: &str, input: &str) -> (Result<String>, String) {
        let mut prompter = Prompter::new(input.as_bytes(), Vec::new());
        let result = confirm_folder_name(raw, &mut prompter);
        let (_, output) = prompter.into_parts();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_sanitize_examples() {
        assert_eq!(sanitize_folder_name("my folder"), "my_folder");
        assert_eq!(sanitize_folder_name("a<b>c"), "abc");
        assert_eq!(sanitize_folder_name(""), "");
        assert_eq!(sanitize_folder_name("C:\\temp/x|y?*\""), "Ctempxy");
        assert_eq!(sanitize_folder_name("two  spaces"), "two__spaces");
    }

    #[test]
    fn test_sanitize_control_characters() {
        assert_eq!(sanitize_folder_name("tab\there"), "tabhere");
        assert_eq!(sanitize_folder_name("line\nbreak\r"), "linebreak");
        assert_eq!(sanitize_folder_name("nul\0byte\x7f"), "nulbyte");
    }

    #[test]
    fn test_sanitize_unicode() {
        assert_eq!(sanitize_folder_name("café crème"), "café_crème");
        // Non-breaking space is whitespace but not a control character
        assert_eq!(sanitize_folder_name("a\u{a0}b"), "a_b");
    }

    #[test]
    fn test_sanitize_truncates() {
        let long = "x".repeat(MAX_FOLDER_NAME_LEN + 50);
        assert_eq!(sanitize_folder_name(&long).chars().count(), MAX_FOLDER_NAME_LEN);

        let multibyte = "é".repeat(MAX_FOLDER_NAME_LEN + 1);
        assert_eq!(
            sanitize_folder_name(&multibyte).chars().count(),
            MAX_FOLDER_NAME_LEN
        );

        // Dropped characters do not count towards the limit
        let padded = format!("{}{}", "?".repeat(10), "y".repeat(MAX_FOLDER_NAME_LEN));
        assert_eq!(sanitize_folder_name(&padded), "y".repeat(MAX_FOLDER_NAME_LEN));
    }

    #[test]
    fn test_sanitize_properties() {
        let long = "long name ".repeat(60);
        let inputs: [&str; 7] = [
            "plain",
            "my folder",
            "<>:\"/\\|?*",
            " \t\n leading and trailing \r\n",
            "mixed\u{1b}[31m escape",
            "ünïcödé name / with \\ separators",
            &long,
        ];

        for input in inputs {
            let once = sanitize_folder_name(input);
            assert!(!once.chars().any(|c| RESERVED_CHARS.contains(&c)));
            assert!(!once.chars().any(char::is_control));
            assert!(!once.chars().any(char::is_whitespace));
            assert!(once.chars().count() <= MAX_FOLDER_NAME_LEN);
            assert_eq!(sanitize_folder_name(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_usable_folder_name() {
        assert!(is_usable_folder_name("project"));
        assert!(is_usable_folder_name("..."));
        assert!(!is_usable_folder_name(""));
        assert!(!is_usable_folder_name("."));
        assert!(!is_usable_folder_name(".."));
    }

    #[test]
    fn test_confirm_first_answer() {
        let (result, output) = confirm("my folder", "y\n");
        assert_eq!(result.unwrap(), "my_folder");
        assert_eq!(output.matches("Sanitized folder name:").count(), 1);
        assert!(output.contains("\"my_folder\""));
    }

    #[test]
    fn test_confirm_after_reentry() {
        let (result, output) = confirm("first", "n\nsecond try\nY\n");
        assert_eq!(result.unwrap(), "second_try");
        assert_eq!(output.matches("Sanitized folder name:").count(), 2);
        assert!(output.contains("Enter a new folder name:"));
    }

    #[test]
    fn test_confirm_reentry_is_fresh_input() {
        // The new name replaces the candidate rather than editing it
        let (result, _) = confirm("a<b>", "\nc:d\nyes\n");
        assert_eq!(result.unwrap(), "cd");
    }

    #[test]
    fn test_confirm_unusable_name_asks_again() {
        let (result, output) = confirm("???", "ok\ny\n");
        assert_eq!(result.unwrap(), "ok");
        assert!(output.contains("cannot be used"));
        // No confirmation question for the empty name
        assert_eq!(output.matches("(y/n)").count(), 1);
    }

    #[test]
    fn test_confirm_input_closed() {
        let (result, _) = confirm("name", "n\n");
        assert!(matches!(result, Err(Error::InputClosed)));
    }
}
