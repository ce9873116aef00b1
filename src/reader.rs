//! The streaming MatrixMarket reader
//!
//! [`read`] consumes a line-oriented byte source and drives a
//! [`Callback`] through the full element sequence of one matrix. Only
//! the coordinate format is supported; an array-format banner is
//! rejected before any further line is consumed.

use std::io::BufRead;

use crate::callback::Callback;
use crate::error::{Error, Result};
use crate::header::{MatrixDescription, MatrixField, MatrixFormat, MatrixSymmetry};

/// Where the parser is within the fixed header -> size -> elements
/// sequence of a MatrixMarket stream. Each state carries exactly the
/// header data accumulated so far, so a later state cannot exist
/// without a valid earlier one.
#[derive(Clone, Copy)]
enum ParserState {
    /// Expecting the banner line
    Header,
    /// Banner consumed, expecting the size line
    Size {
        format: MatrixFormat,
        field: MatrixField,
        symmetry: MatrixSymmetry,
    },
    /// Size line consumed, every further line is one coordinate entry
    Elements { field: MatrixField },
}

/// Reads MatrixMarket data from the given source and notifies the given
/// callback about the elements that are read
///
/// The callback receives one `start_matrix` with the fully populated
/// [`MatrixDescription`], one `set_matrix_element` per coordinate entry
/// in file order (indices converted to zero-based), and one
/// `finish_matrix` once the stream is exhausted.
///
/// Any structural violation aborts the parse with an error. The
/// callback may already have received a prefix of valid elements at
/// that point; callers should discard its state on failure.
///
/// # Arguments
///
/// * `reader` - The line-oriented byte source
/// * `callback` - The sink for the parsed elements
///
/// # Examples
///
/// ```
/// use matmarket::{read, CollectingCallback};
///
/// let data: &[u8] = b"%%MatrixMarket matrix coordinate real general\n\
///                     2 2 1\n\
///                     2 1 3.0\n";
/// let mut callback = CollectingCallback::new();
/// read(data, &mut callback).unwrap();
/// assert_eq!(callback.entries(), &[(1, 0, 3.0, None)]);
/// ```
pub fn read<R: BufRead, C: Callback>(reader: R, callback: &mut C) -> Result<()> {
    let mut state = ParserState::Header;

    for line in reader.lines() {
        let line = line?;

        match state {
            ParserState::Header => {
                let (format, field, symmetry) = parse_banner(&line)?;
                if format != MatrixFormat::Coordinate {
                    return Err(Error::UnsupportedFormat(format));
                }
                state = ParserState::Size {
                    format,
                    field,
                    symmetry,
                };
            }
            ParserState::Size {
                format,
                field,
                symmetry,
            } => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('%') {
                    continue;
                }
                let description = parse_size(line, format, field, symmetry)?;
                callback.start_matrix(&description);
                state = ParserState::Elements { field };
            }
            ParserState::Elements { field } => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('%') {
                    continue;
                }
                let (row, col, value, imag) = parse_entry(line, field)?;
                callback.set_matrix_element(row, col, value, imag);
            }
        }
    }

    callback.finish_matrix();
    Ok(())
}

/// Parses the banner line `%%MatrixMarket matrix <format> <field> <symmetry>`
fn parse_banner(line: &str) -> Result<(MatrixFormat, MatrixField, MatrixSymmetry)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 5 {
        return Err(Error::Header {
            message: format!(
                "expected 5 tokens in the first line, but found {}: {:?}",
                tokens.len(),
                line
            ),
        });
    }
    if !tokens[0].eq_ignore_ascii_case("%%MatrixMarket") {
        return Err(Error::Header {
            message: format!("expected \"%%MatrixMarket\", found {:?}", tokens[0]),
        });
    }
    if !tokens[1].eq_ignore_ascii_case("matrix") {
        return Err(Error::Header {
            message: format!("expected \"matrix\", found {:?}", tokens[1]),
        });
    }
    let format = tokens[2].parse::<MatrixFormat>()?;
    let field = tokens[3].parse::<MatrixField>()?;
    let symmetry = tokens[4].parse::<MatrixSymmetry>()?;
    Ok((format, field, symmetry))
}

/// Parses the coordinate size line `numRows numCols numNonZeros`
fn parse_size(
    line: &str,
    format: MatrixFormat,
    field: MatrixField,
    symmetry: MatrixSymmetry,
) -> Result<MatrixDescription> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(Error::SizeLine {
            message: format!(
                "for the coordinate format, the size must be of the form \
                 \"numRows numCols numNonZeros\", but found {:?}",
                line
            ),
        });
    }
    Ok(MatrixDescription {
        format,
        field,
        symmetry,
        num_rows: parse_count(tokens[0])?,
        num_cols: parse_count(tokens[1])?,
        num_non_zeros: parse_count(tokens[2])?,
    })
}

/// Decodes one coordinate entry line according to the active field
///
/// Returns zero-based indices. The pattern field intentionally shares
/// the real decoder, so pattern lines must carry a value token as well.
fn parse_entry(line: &str, field: MatrixField) -> Result<(usize, usize, f64, Option<f64>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match field {
        MatrixField::Real | MatrixField::Pattern => {
            if tokens.len() != 3 {
                return Err(Error::MalformedEntry {
                    expected: "rowIndex columnIndex value",
                    line: line.to_string(),
                });
            }
            let row = parse_index(tokens[0])?;
            let col = parse_index(tokens[1])?;
            let value = parse_float(tokens[2])?;
            Ok((row, col, value, None))
        }
        MatrixField::Complex => {
            if tokens.len() != 4 {
                return Err(Error::MalformedEntry {
                    expected: "rowIndex columnIndex realValue imagValue",
                    line: line.to_string(),
                });
            }
            let row = parse_index(tokens[0])?;
            let col = parse_index(tokens[1])?;
            let value = parse_float(tokens[2])?;
            let imag = parse_float(tokens[3])?;
            Ok((row, col, value, Some(imag)))
        }
        MatrixField::Integer => {
            if tokens.len() != 3 {
                return Err(Error::MalformedEntry {
                    expected: "rowIndex columnIndex value",
                    line: line.to_string(),
                });
            }
            let row = parse_index(tokens[0])?;
            let col = parse_index(tokens[1])?;
            let value = parse_integer(tokens[2])?;
            Ok((row, col, value, Some(0.0)))
        }
    }
}

/// Parses a one-based wire index into a zero-based index
fn parse_index(token: &str) -> Result<usize> {
    // Convert from 1-indexed to 0-indexed
    Ok(parse_count(token)?.saturating_sub(1))
}

fn parse_count(token: &str) -> Result<usize> {
    token.parse::<usize>().map_err(|_| Error::NumberFormat {
        token: token.to_string(),
    })
}

fn parse_integer(token: &str) -> Result<f64> {
    let value = token.parse::<i64>().map_err(|_| Error::NumberFormat {
        token: token.to_string(),
    })?;
    Ok(value as f64)
}

fn parse_float(token: &str) -> Result<f64> {
    token.parse::<f64>().map_err(|_| Error::NumberFormat {
        token: token.to_string(),
    })
}
