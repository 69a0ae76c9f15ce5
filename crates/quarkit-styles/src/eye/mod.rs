//! Finder pattern eyes
//!
//! An eye is drawn as two paths centred on the origin in module units: the
//! outer ring (7×7 footprint, hollow) and the inner pupil (3×3 footprint).
//! Outer rings are made of two nested subpaths and rely on even-odd filling
//! to leave the middle open. Eye geometry has no parameters, so every eye is
//! a unit struct and [`EyeStyle`] selects between them.

use quarkit_core::{Path, StyleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod ring;
mod rounded_square;
mod square;

pub use ring::RingEye;
pub use rounded_square::RoundedSquareEye;
pub use square::{CircleEye, SquareEye};

/// Outer and inner outline of one finder pattern
pub trait EyeShape {
    fn outer_path(&self) -> Path;
    fn inner_path(&self) -> Path;
}

/// Eye style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    #[default]
    Square,
    Circle,
    Rounded,
    Ring,
}

impl EyeStyle {
    fn shape(&self) -> &'static dyn EyeShape {
        match self {
            Self::Square => &SquareEye,
            Self::Circle => &CircleEye,
            Self::Rounded => &RoundedSquareEye,
            Self::Ring => &RingEye,
        }
    }
}

impl EyeShape for EyeStyle {
    fn outer_path(&self) -> Path {
        self.shape().outer_path()
    }

    fn inner_path(&self) -> Path {
        self.shape().inner_path()
    }
}

impl fmt::Display for EyeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Circle => write!(f, "circle"),
            Self::Rounded => write!(f, "rounded"),
            Self::Ring => write!(f, "ring"),
        }
    }
}

impl FromStr for EyeStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            "rounded" => Ok(Self::Rounded),
            "ring" => Ok(Self::Ring),
            _ => Err(StyleError::UnknownEyeStyle(s.to_string())),
        }
    }
}

/// Append a full circle of radius `r` around the origin, drawn as four
/// quarter arcs starting at `(r, 0)`.
pub(crate) fn add_circle(path: Path, r: f64) -> Path {
    add_circle_at(path, 0.0, 0.0, r)
}

/// Append a full circle of radius `r` around `(cx, cy)`. Arc endpoints are
/// deltas, so the pen visits the bottom, left and top of the circle on its
/// way back to `(cx + r, cy)`.
pub(crate) fn add_circle_at(path: Path, cx: f64, cy: f64, r: f64) -> Path {
    path.move_to(cx + r, cy)
        .elliptic_arc(r, r, 0.0, false, true, -r, r)
        .elliptic_arc(r, r, 0.0, false, true, -r, -r)
        .elliptic_arc(r, r, 0.0, false, true, r, -r)
        .elliptic_arc(r, r, 0.0, false, true, r, r)
        .close()
}
