//! # matmarket: a streaming MatrixMarket reader
//!
//! This library parses files in the MatrixMarket plain-text matrix
//! exchange format and exposes the parsed content either as a live
//! stream of element events or as a materialized sparse matrix in
//! compressed-row form.
//!
//! ## Overview
//!
//! The parsing pipeline consists of:
//!
//! 1. **Header parsing**: the banner and size lines become an immutable
//!    [`MatrixDescription`] (format, field, symmetry, dimensions,
//!    declared nonzero count).
//!
//! 2. **Streaming callbacks**: [`read`] drives any [`Callback`]
//!    implementation through `start -> (set element)* -> finish`, one
//!    event per coordinate entry, with indices converted to zero-based.
//!
//! 3. **Dense materialization**: [`DenseCallback`] accumulates the
//!    entries into a flat column-major buffer, expanding symmetric,
//!    skew-symmetric and Hermitian declarations on the fly.
//!
//! 4. **CSR compaction**: [`compact`] scans the dense buffer and emits
//!    an immutable [`Csr`] structure, re-deriving the nonzero count and
//!    row offsets.
//!
//! Only the coordinate format is supported; the dense array format is
//! rejected with [`Error::UnsupportedFormat`]. There is no writer side.
//!
//! ## Usage
//!
//! Loading a matrix as CSR in one call:
//!
//! ```
//! use matmarket::read_csr;
//!
//! let data: &[u8] = b"%%MatrixMarket matrix coordinate real symmetric\n\
//!                     2 2 1\n\
//!                     2 1 3.0\n";
//! let csr = read_csr(data).unwrap();
//! assert_eq!(csr.values, vec![3.0, 3.0]);
//! ```
//!
//! Streaming the raw element events:
//!
//! ```
//! use matmarket::{read, CollectingCallback};
//!
//! let data: &[u8] = b"%%MatrixMarket matrix coordinate integer general\n\
//!                     3 3 1\n\
//!                     3 1 42\n";
//! let mut callback = CollectingCallback::new();
//! read(data, &mut callback).unwrap();
//! assert_eq!(callback.entries(), &[(2, 0, 42.0, Some(0.0))]);
//! ```

pub mod callback;
pub mod convert;
pub mod csr;
pub mod dense;
pub mod error;
pub mod header;
pub mod reader;

// Re-export primary components
pub use callback::{Callback, CollectingCallback};
pub use convert::{to_ndarray, to_sprs};
pub use csr::{compact, read_csr, Csr, DEFAULT_EPSILON};
pub use dense::DenseCallback;
pub use error::{Error, Result};
pub use header::{MatrixDescription, MatrixField, MatrixFormat, MatrixSymmetry};
pub use reader::read;

/// Version information for the matmarket library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
