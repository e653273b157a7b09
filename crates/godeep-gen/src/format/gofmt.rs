//! External `gofmt` adapter.

use std::io::Write;
use std::process::{Command, Stdio};

use super::{FormatError, SourceFormatter};

/// Formats by piping the source through a `gofmt` binary.
#[derive(Clone, Debug)]
pub struct Gofmt {
    program: String,
}

impl Default for Gofmt {
    fn default() -> Self {
        Self {
            program: "gofmt".to_string(),
        }
    }
}

impl Gofmt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another executable (a path, or a name looked up on `PATH`).
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }
}

impl SourceFormatter for Gofmt {
    fn format(&self, source: &str) -> Result<String, FormatError> {
        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| FormatError::new(format!("running {}: {e}", self.program)))?;

        // gofmt reads all of stdin before writing, so this cannot block on a full stdout pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };

        let output = child
            .wait_with_output()
            .map_err(|e| FormatError::new(format!("waiting for {}: {e}", self.program)))?;

        // An early exit shows up as a broken pipe; the exit status says more.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FormatError::new(format!(
                "{} failed ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written.map_err(|e| FormatError::new(format!("writing to {}: {e}", self.program)))?;

        String::from_utf8(output.stdout)
            .map_err(|e| FormatError::new(format!("{} produced invalid UTF-8: {e}", self.program)))
    }
}
