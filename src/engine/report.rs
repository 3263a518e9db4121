// src/engine/report.rs

use std::io::Write;

use crate::config::CommandDescriptor;
use crate::errors::{BurstError, Result};

/// Writes progress and result lines to an output sink (stdout in production).
///
/// Each line is flushed immediately so progress is visible while the burst
/// is still running.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn launched(&mut self, index: usize) -> Result<()> {
        self.line(format_args!("{index} executed"))
    }

    pub fn exited(&mut self, command: &CommandDescriptor, code: i32) -> Result<()> {
        self.line(format_args!("[{} exited with {code}]", command.quoted()))
    }

    pub fn not_found(&mut self, command: &CommandDescriptor) -> Result<()> {
        self.line(format_args!(
            "Error: Command {} not found. Ensure the client executable is present.",
            command.quoted()
        ))
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) -> Result<()> {
        writeln!(self.out, "{args}").map_err(BurstError::Output)?;
        self.out.flush().map_err(BurstError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Reporter<Vec<u8>>) -> Result<()>) -> String {
        let mut reporter = Reporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn progress_line() {
        assert_eq!(rendered(|r| r.launched(7)), "7 executed\n");
    }

    #[test]
    fn result_line_quotes_command() {
        let cmd = CommandDescriptor::new("./client");
        assert_eq!(
            rendered(|r| r.exited(&cmd, 42)),
            "['./client' exited with 42]\n"
        );
        assert_eq!(
            rendered(|r| r.exited(&cmd, -9)),
            "['./client' exited with -9]\n"
        );
    }

    #[test]
    fn not_found_line_names_command() {
        let cmd = CommandDescriptor::new("./client");
        assert_eq!(
            rendered(|r| r.not_found(&cmd)),
            "Error: Command './client' not found. Ensure the client executable is present.\n"
        );
    }
}
