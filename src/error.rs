//! Error types for matmarket

use crate::header::MatrixFormat;
use thiserror::Error;

/// Result type alias using matmarket's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading MatrixMarket data
///
/// All errors are fatal: parsing stops at the first error and the caller
/// should discard any state a callback accumulated before the failure.
#[derive(Error, Debug)]
pub enum Error {
    /// The banner line is malformed: wrong token count, bad marker or
    /// object keyword, or an unrecognized format/field/symmetry token
    #[error("invalid MatrixMarket header: {message}")]
    Header {
        /// What was expected and what was found
        message: String,
    },

    /// The size line does not match the shape required by the declared format
    #[error("invalid size line: {message}")]
    SizeLine {
        /// What was expected and what was found
        message: String,
    },

    /// A matrix entry line has the wrong number of tokens for the active field
    #[error("expected matrix entry of the form {expected:?}, but found {line:?}")]
    MalformedEntry {
        /// The token shape required by the active field
        expected: &'static str,
        /// The offending line
        line: String,
    },

    /// A token that should be an integer or float failed to parse
    #[error("could not parse number from {token:?}")]
    NumberFormat {
        /// The offending token
        token: String,
    },

    /// A syntactically valid format that this reader does not implement
    #[error("the {0} format is not supported")]
    UnsupportedFormat(MatrixFormat),

    /// The underlying stream failed
    #[error("I/O error while reading matrix data")]
    Io(#[from] std::io::Error),
}
