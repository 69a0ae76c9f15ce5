//! # Quarkit Core
//!
//! Core types shared by the Quarkit crates: the module matrix produced by a
//! QR encoder, the backend-agnostic vector [`Path`] every renderer emits,
//! and the error types for style and matrix input.

pub mod error;
pub mod matrix;
pub mod path;
pub mod point;

pub use error::{Error, MatrixError, Result, StyleError};
pub use matrix::{Module, ModuleMatrix, FINDER_PATTERN_SIZE};
pub use path::{Path, PathCommand};
pub use point::Point;
