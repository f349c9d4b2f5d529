//! Everything that can go wrong around the index.

use std::fmt;
use std::io;

/// Result alias for `wordbst`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the index. Building and querying the index itself can't fail; these come
/// from reading the text and from validating what a user typed.
#[derive(Debug)]
pub enum Error {
    /// The text couldn't be opened or read. No index is built.
    SourceUnavailable {
        /// Where the text was supposed to come from (usually a file path).
        source: String,
        /// The underlying I/O failure.
        error: io::Error,
    },
    /// A query letter wasn't exactly one ASCII letter.
    InvalidQueryLetter(String),
    /// A menu selection wasn't one of the known options.
    InvalidChoice(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SourceUnavailable { source, error } => {
                write!(f, "could not read '{}': {}", source, error)
            }
            Error::InvalidQueryLetter(input) => {
                write!(f, "expected a single alphabet letter, got {:?}", input)
            }
            Error::InvalidChoice(input) => write!(f, "unknown menu choice {:?}", input),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SourceUnavailable { error, .. } => Some(error),
            _ => None,
        }
    }
}
