//! Error handling for Quarkit
//!
//! Provides error types for the two input boundaries of the path synthesis core:
//! - Style errors (renderer parameters and style names)
//! - Matrix errors (building a module matrix from rows or text)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Style configuration error
///
/// Raised synchronously when a renderer is constructed with a parameter
/// outside its valid range, or when a style name cannot be resolved.
/// Path generation itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// Faceted renderer radius outside (0, 0.5]
    #[error("Radius must be between 0 (exclusive) and 0.5 (inclusive), got {value}")]
    InvalidRadius {
        /// The rejected radius.
        value: f64,
    },

    /// Smoothed renderer smoothness outside (0, 0.5]
    #[error("Smoothness must be between 0 (exclusive) and 0.5 (inclusive), got {value}")]
    InvalidSmoothness {
        /// The rejected smoothness.
        value: f64,
    },

    /// Generic style size outside the range allowed for the style
    #[error("Size for style '{style}' must be between 0 (exclusive) and {max} (inclusive), got {value}")]
    InvalidSize {
        /// The style name the size was given for.
        style: String,
        /// The largest accepted size for that style.
        max: f64,
        /// The rejected size.
        value: f64,
    },

    /// Unknown module style name
    #[error("Unknown module style: {0}")]
    UnknownModuleStyle(String),

    /// Unknown eye style name
    #[error("Unknown eye style: {0}")]
    UnknownEyeStyle(String),
}

/// Module matrix construction error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows or no columns
    #[error("Module matrix must not be empty")]
    Empty,

    /// A row has a different width than the first row
    #[error("Row {row} has {found} modules, expected {expected}")]
    RaggedRows {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },

    /// A character in textual input is neither dark nor light
    #[error("Invalid module '{found}' at row {row}, column {column}")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending character.
        found: char,
    },
}

/// Main error type for Quarkit
///
/// A unified error type that can represent any error from the core.
#[derive(Error, Debug)]
pub enum Error {
    /// Style error
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Matrix error
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

impl Error {
    /// Check if this is a style configuration error
    pub fn is_style_error(&self) -> bool {
        matches!(self, Error::Style(_))
    }

    /// Check if this is a matrix error
    pub fn is_matrix_error(&self) -> bool {
        matches!(self, Error::Matrix(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
