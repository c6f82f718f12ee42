//! Error handling for the Monkey front end
//!
//! The lexer has exactly one failure mode that reaches the caller: the byte
//! source failing for a reason other than end-of-stream. Unrecognized
//! characters are `Illegal` tokens, not errors. The REPL adds output
//! failures on top.

use std::io;

use thiserror::Error;

/// Result type alias for Monkey operations
pub type MonkeyResult<T> = Result<T, MonkeyError>;

/// Main error type for the Monkey front end
#[derive(Debug, Error)]
pub enum MonkeyError {
    /// The byte source failed while the lexer was reading from it
    #[error("Source Fault: failed to read from byte source: {0}")]
    SourceFault(#[source] io::Error),

    /// Writing output failed
    #[error("I/O Error: {0}")]
    Io(#[from] io::Error),
}

impl MonkeyError {
    /// Create a source fault from a failed read
    pub fn source_fault(err: io::Error) -> Self {
        Self::SourceFault(err)
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::SourceFault(_) => "Source Fault",
            Self::Io(_) => "I/O Error",
        }
    }

    /// Whether this error came from the lexer's byte source
    pub fn is_source_fault(&self) -> bool {
        matches!(self, Self::SourceFault(_))
    }
}
