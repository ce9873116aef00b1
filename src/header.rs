//! Header metadata for MatrixMarket data
//!
//! A MatrixMarket file opens with a banner line of the form
//!
//! ```text
//! %%MatrixMarket matrix <format> <field> <symmetry>
//! ```
//!
//! followed by a size line. The enums in this module model the banner
//! vocabulary, and [`MatrixDescription`] bundles the fully parsed header.
//! All banner tokens are matched case-insensitively against their
//! canonical (lowercase) spelling.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The storage format declared in the banner line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixFormat {
    /// Sparse representation listing only explicitly present entries
    Coordinate,
    /// Dense representation listing every entry in column-major order.
    /// Recognized in the banner, but not supported by the reader.
    Array,
}

/// The value type of matrix entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixField {
    /// One real value per entry
    Real,
    /// A real and an imaginary value per entry
    Complex,
    /// One integer value per entry
    Integer,
    /// Structure only. Note: the reader decodes pattern entries with the
    /// real decoder, so each line must still carry three tokens; a pure
    /// two-token pattern file is rejected as malformed.
    Pattern,
}

/// The structural symmetry declared in the banner line
///
/// A non-general symmetry lets the file omit the mirrored half of the
/// matrix; the mirroring is applied by the consuming callback, not by
/// the reader itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixSymmetry {
    /// No structural symmetry
    General,
    /// `a[c][r] == a[r][c]`
    Symmetric,
    /// `a[c][r] == -a[r][c]`
    SkewSymmetric,
    /// `a[c][r]` is the complex conjugate of `a[r][c]`
    Hermitian,
}

impl MatrixFormat {
    /// The canonical banner spelling of this format
    pub fn canonical_name(&self) -> &'static str {
        match self {
            MatrixFormat::Coordinate => "coordinate",
            MatrixFormat::Array => "array",
        }
    }

    const ALL_NAMES: &'static str = "[coordinate, array]";
}

impl MatrixField {
    /// The canonical banner spelling of this field
    pub fn canonical_name(&self) -> &'static str {
        match self {
            MatrixField::Real => "real",
            MatrixField::Complex => "complex",
            MatrixField::Integer => "integer",
            MatrixField::Pattern => "pattern",
        }
    }

    const ALL_NAMES: &'static str = "[real, complex, integer, pattern]";
}

impl MatrixSymmetry {
    /// The canonical banner spelling of this symmetry
    pub fn canonical_name(&self) -> &'static str {
        match self {
            MatrixSymmetry::General => "general",
            MatrixSymmetry::Symmetric => "symmetric",
            MatrixSymmetry::SkewSymmetric => "skew-symmetric",
            MatrixSymmetry::Hermitian => "hermitian",
        }
    }

    const ALL_NAMES: &'static str = "[general, symmetric, skew-symmetric, hermitian]";
}

impl fmt::Display for MatrixFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for MatrixField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl fmt::Display for MatrixSymmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for MatrixFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "coordinate" => Ok(MatrixFormat::Coordinate),
            "array" => Ok(MatrixFormat::Array),
            _ => Err(Error::Header {
                message: format!("expected one of {}, found {:?}", Self::ALL_NAMES, s),
            }),
        }
    }
}

impl FromStr for MatrixField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "real" => Ok(MatrixField::Real),
            "complex" => Ok(MatrixField::Complex),
            "integer" => Ok(MatrixField::Integer),
            "pattern" => Ok(MatrixField::Pattern),
            _ => Err(Error::Header {
                message: format!("expected one of {}, found {:?}", Self::ALL_NAMES, s),
            }),
        }
    }
}

impl FromStr for MatrixSymmetry {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "general" => Ok(MatrixSymmetry::General),
            "symmetric" => Ok(MatrixSymmetry::Symmetric),
            "skew-symmetric" => Ok(MatrixSymmetry::SkewSymmetric),
            "hermitian" => Ok(MatrixSymmetry::Hermitian),
            _ => Err(Error::Header {
                message: format!("expected one of {}, found {:?}", Self::ALL_NAMES, s),
            }),
        }
    }
}

/// The fully parsed header of a MatrixMarket stream
///
/// Constructed by the reader once the banner line and the size line have
/// both been consumed, and handed to the callback via
/// [`Callback::start_matrix`](crate::Callback::start_matrix). Immutable
/// for the duration of one parse; a callback never observes a partially
/// populated description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixDescription {
    /// The storage format
    pub format: MatrixFormat,

    /// The value type of the entries
    pub field: MatrixField,

    /// The declared structural symmetry
    pub symmetry: MatrixSymmetry,

    /// Number of rows in the matrix
    pub num_rows: usize,

    /// Number of columns in the matrix
    pub num_cols: usize,

    /// The nonzero count declared on the size line. For non-general
    /// symmetries this counts stored entries, not expanded ones, so it
    /// understates the true nonzero count.
    pub num_non_zeros: usize,
}

impl fmt::Display for MatrixDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} matrix, {} x {}, {} declared nonzeros",
            self.format, self.field, self.symmetry, self.num_rows, self.num_cols, self.num_non_zeros
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing_case_insensitive() {
        assert_eq!(
            "coordinate".parse::<MatrixFormat>().unwrap(),
            MatrixFormat::Coordinate
        );
        assert_eq!(
            "COORDINATE".parse::<MatrixFormat>().unwrap(),
            MatrixFormat::Coordinate
        );
        assert_eq!("Array".parse::<MatrixFormat>().unwrap(), MatrixFormat::Array);
    }

    #[test]
    fn test_field_parsing() {
        assert_eq!("real".parse::<MatrixField>().unwrap(), MatrixField::Real);
        assert_eq!("Complex".parse::<MatrixField>().unwrap(), MatrixField::Complex);
        assert_eq!("INTEGER".parse::<MatrixField>().unwrap(), MatrixField::Integer);
        assert_eq!("pattern".parse::<MatrixField>().unwrap(), MatrixField::Pattern);
    }

    #[test]
    fn test_symmetry_parsing() {
        assert_eq!(
            "general".parse::<MatrixSymmetry>().unwrap(),
            MatrixSymmetry::General
        );
        assert_eq!(
            "Skew-Symmetric".parse::<MatrixSymmetry>().unwrap(),
            MatrixSymmetry::SkewSymmetric
        );
        assert_eq!(
            "HERMITIAN".parse::<MatrixSymmetry>().unwrap(),
            MatrixSymmetry::Hermitian
        );
    }

    #[test]
    fn test_unknown_token_lists_valid_names() {
        let err = "banded".parse::<MatrixSymmetry>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("skew-symmetric"));
        assert!(message.contains("banded"));
    }

    #[test]
    fn test_underscore_spelling_is_rejected() {
        assert!("skew_symmetric".parse::<MatrixSymmetry>().is_err());
    }
}
