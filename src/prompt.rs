//! Line-oriented terminal prompts.
//!
//! All interactive questions go through [`Prompter`], which works over any
//! `BufRead`/`Write` pair so the conversation can be driven from tests.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use crate::error::{Error, Result};

/// Returns true if the response counts as "yes".
///
/// Only the first character is looked at: anything starting with `y` or `Y`
/// is affirmative, everything else (including an empty line) is not.
pub fn is_affirmative(response: &str) -> bool {
    response
        .chars()
        .next()
        .map(|c| c.eq_ignore_ascii_case(&'y'))
        .unwrap_or(false)
}

/// Blocking question/answer conversation with the user.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Print `question` and read one line of input, without its line ending.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{} ", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        debug!(question, answer = %answer, "prompt answered");
        Ok(answer)
    }

    /// Ask a `(y/n)` question.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/n):", question))?;
        Ok(is_affirmative(&answer))
    }

    /// Give back the underlying reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
