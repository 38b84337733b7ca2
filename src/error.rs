//! Error types for the Typelet interpreter

use thiserror::Error;

use crate::lexer::Token;

/// Typelet pipeline errors
///
/// Each stage of the pipeline has its own error kind carrying enough
/// context to report a human-readable location. All three are terminal:
/// the stage that raised the error stops immediately and the error is
/// surfaced to the caller unmodified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed character stream; scanning halts
    ///
    /// **Triggered by:** An unrecognized character or an unterminated
    /// string literal
    /// **Example:** `let x: number = @;`
    #[error("[line {line}] Error: {message}")]
    Lexing {
        /// Error description
        message: String,
        /// Line number where scanning stopped
        line: usize,
    },

    /// Grammar violation; parsing halts with no partial statement list
    ///
    /// **Triggered by:** A token sequence the grammar does not accept
    /// **Example:** `let x = 5;` (missing the mandatory `: type`)
    #[error("Error at {token}: {message}")]
    Parsing {
        /// Error description
        message: String,
        /// Token where the violation was detected
        token: Token,
    },

    /// Runtime type or scope violation; execution halts at the point of
    /// failure and already-executed statements keep their effects
    ///
    /// **Triggered by:** Unknown variable, constant reassignment,
    /// declared-type mismatch, non-numeric operand to arithmetic
    #[error("Error at {token}: {message}")]
    Interpret {
        /// Error description
        message: String,
        /// Token where execution failed
        token: Token,
    },

    /// Write failure on the print output sink
    #[error("I/O error: {0}")]
    Io(String),
}

impl Error {
    /// Creates a lexing error at the given line
    pub fn lexing(message: impl Into<String>, line: usize) -> Self {
        Error::Lexing {
            message: message.into(),
            line,
        }
    }

    /// Creates a parsing error at the given token
    pub fn parsing(message: impl Into<String>, token: Token) -> Self {
        Error::Parsing {
            message: message.into(),
            token,
        }
    }

    /// Creates an interpret error at the given token
    pub fn interpret(message: impl Into<String>, token: Token) -> Self {
        Error::Interpret {
            message: message.into(),
            token,
        }
    }

    /// Line number the error points at, where one is known
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Lexing { line, .. } => Some(*line),
            Error::Parsing { token, .. } | Error::Interpret { token, .. } => Some(token.line),
            Error::Io(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Result type for Typelet operations
pub type Result<T> = std::result::Result<T, Error>;
