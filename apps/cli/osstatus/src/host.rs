use osstatus_core::CommandHost;

use std::io::{Stdout, Stderr, Write, stderr, stdout};

use log::warn;

/// [`CommandHost`] backed by a terminal: results and usage on `out`,
/// errors on `err`.
pub struct TerminalHost<O: Write, E: Write> {
    out: O,
    err: E,
    failed: bool,
}

impl TerminalHost<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(stdout(), stderr())
    }
}

impl<O: Write, E: Write> TerminalHost<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            failed: false,
        }
    }

    /// True once an error was reported.
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> CommandHost for TerminalHost<O, E> {
    fn append_message(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}") {
            warn!("Failed to write result line: {e}");
        }
    }

    fn set_error(&mut self, message: &str) {
        self.failed = true;
        if let Err(e) = writeln!(self.err, "error: {message}") {
            warn!("Failed to write error message: {e}");
        }
    }

    fn print_usage(&mut self, usage: &str) {
        if let Err(e) = write!(self.out, "{}", usage.trim_end()).and_then(|()| writeln!(self.out)) {
            warn!("Failed to write usage: {e}");
        }
    }
}
