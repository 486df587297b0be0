//! Colored status lines on stdout.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";

/// Writes user-facing status messages, colored when the output is a terminal.
pub struct Console<W: Write = io::Stdout> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout. Color is disabled by `no_color`, by a non-empty
    /// `NO_COLOR`, or when stdout is not a terminal.
    pub fn stdout(no_color: bool) -> Self {
        let out = io::stdout();
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let color = !no_color && !no_color_env && out.is_terminal();
        Self { out, color }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn info(&mut self, msg: &str) {
        self.line(BLUE, msg);
    }

    pub fn success(&mut self, msg: &str) {
        self.line(GREEN, msg);
    }

    pub fn warn(&mut self, msg: &str) {
        self.line(YELLOW, msg);
    }

    pub fn error(&mut self, msg: &str) {
        self.line(RED, msg);
    }

    /// Uncolored line.
    pub fn plain(&mut self, msg: &str) {
        self.line("", msg);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, color: &str, msg: &str) {
        // Status output is best effort; a closed stdout must not abort setup.
        let result = if self.color && !color.is_empty() {
            writeln!(self.out, "{}{}{}", color, msg, RESET)
        } else {
            writeln!(self.out, "{}", msg)
        };
        if let Err(e) = result.and_then(|_| self.out.flush()) {
            log::debug!("Failed to write status line: {}", e);
        }
    }
}
