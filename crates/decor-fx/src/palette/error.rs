//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette reduction.

use std::fmt;
use std::num::ParseIntError;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 characters after stripping '#')
    InvalidLength,
    /// Invalid hexadecimal character encountered
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength => {
                write!(f, "invalid hex color length (expected 3 or 6 characters)")
            }
            ParseColorError::InvalidHex(err) => {
                write!(f, "invalid hex character: {}", err)
            }
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for palette reduction.
///
/// Returned when the requested palette size is out of range or the
/// image has no pixels to sample.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteError {
    /// A palette of zero colors was requested
    ZeroColors,
    /// More colors were requested than an indexed palette can hold
    TooManyColors {
        /// Requested palette size
        requested: usize,
        /// Largest supported palette size
        max: usize,
    },
    /// The image has zero width or height
    EmptyImage,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::ZeroColors => {
                write!(f, "palette size must be at least 1")
            }
            PaletteError::TooManyColors { requested, max } => {
                write!(
                    f,
                    "palette size {} exceeds the maximum of {} colors",
                    requested, max
                )
            }
            PaletteError::EmptyImage => {
                write!(f, "cannot build a palette from an empty image")
            }
        }
    }
}

impl std::error::Error for PaletteError {}
