//! Formatting of assembled Go source.
//!
//! - `Canonical` - built-in canonicalizer (tab indentation, blank-line and
//!   spacing cleanup, delimiter and literal validation)
//! - `Gofmt` - pipes the text through an external `gofmt`

mod canonical;
mod gofmt;
mod lexer;

#[cfg(test)]
mod canonical_tests;
#[cfg(test)]
mod lexer_tests;

pub use canonical::Canonical;
pub use gofmt::Gofmt;

/// Formatting failure. The caller keeps the unformatted text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormatError {
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns assembled source text into its final form.
pub trait SourceFormatter {
    fn format(&self, source: &str) -> Result<String, FormatError>;
}
