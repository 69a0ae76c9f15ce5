//! Module styles
//!
//! A module style turns the whole module matrix into one [`Path`]. Styles are
//! selected by name through [`ModuleStyleKind`] and built into a
//! [`ModuleRenderer`], which validates the style size up front so path
//! generation cannot fail.

use quarkit_core::{ModuleMatrix, Path, StyleError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod dot;
mod round;
mod square;
mod star;
mod vertigo;

pub use dot::DotStyle;
pub use round::RoundStyle;
pub use square::SquareStyle;
pub use star::StarStyle;
pub use vertigo::VertigoStyle;

/// Anything that can draw the data modules of a symbol
pub trait ModuleStyle {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path;
}

/// Module style selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStyleKind {
    /// Straight outlines of every region
    #[default]
    Square,
    /// Circle per module
    Dot,
    /// Region outlines with rounded corners
    Round,
    /// Chamfered octagon per module
    Star,
    /// Smoothed Bezier outline per region
    Vertigo,
}

impl ModuleStyleKind {
    /// Largest size the style accepts; the lower bound is always exclusive 0.
    pub fn max_size(self) -> f64 {
        match self {
            Self::Square | Self::Dot | Self::Round => 1.0,
            Self::Star | Self::Vertigo => 0.5,
        }
    }
}

impl fmt::Display for ModuleStyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Square => write!(f, "square"),
            Self::Dot => write!(f, "dot"),
            Self::Round => write!(f, "round"),
            Self::Star => write!(f, "star"),
            Self::Vertigo => write!(f, "vertigo"),
        }
    }
}

impl FromStr for ModuleStyleKind {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "dot" => Ok(Self::Dot),
            "round" => Ok(Self::Round),
            "star" => Ok(Self::Star),
            "vertigo" => Ok(Self::Vertigo),
            _ => Err(StyleError::UnknownModuleStyle(s.to_string())),
        }
    }
}

/// A validated, ready-to-use module style
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModuleRenderer {
    Square(SquareStyle),
    Dot(DotStyle),
    Round(RoundStyle),
    Star(StarStyle),
    Vertigo(VertigoStyle),
}

impl ModuleRenderer {
    /// Build the renderer for `kind`. `size` is the radius for star, the
    /// smoothness for vertigo, the diameter for dot, the corner cut for round,
    /// and is range-checked but unused for square.
    pub fn new(kind: ModuleStyleKind, size: f64) -> Result<Self, StyleError> {
        match kind {
            ModuleStyleKind::Square => {
                if !(size > 0.0 && size <= kind.max_size()) {
                    return Err(StyleError::InvalidSize {
                        style: kind.to_string(),
                        max: kind.max_size(),
                        value: size,
                    });
                }
                Ok(Self::Square(SquareStyle))
            }
            ModuleStyleKind::Dot => Ok(Self::Dot(DotStyle::new(size)?)),
            ModuleStyleKind::Round => Ok(Self::Round(RoundStyle::new(size)?)),
            ModuleStyleKind::Star => Ok(Self::Star(StarStyle::new(size)?)),
            ModuleStyleKind::Vertigo => Ok(Self::Vertigo(VertigoStyle::new(size)?)),
        }
    }

    pub fn kind(&self) -> ModuleStyleKind {
        match self {
            Self::Square(_) => ModuleStyleKind::Square,
            Self::Dot(_) => ModuleStyleKind::Dot,
            Self::Round(_) => ModuleStyleKind::Round,
            Self::Star(_) => ModuleStyleKind::Star,
            Self::Vertigo(_) => ModuleStyleKind::Vertigo,
        }
    }
}

impl Default for ModuleRenderer {
    fn default() -> Self {
        Self::Square(SquareStyle)
    }
}

impl ModuleStyle for ModuleRenderer {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path {
        match self {
            Self::Square(s) => s.create_path(matrix),
            Self::Dot(s) => s.create_path(matrix),
            Self::Round(s) => s.create_path(matrix),
            Self::Star(s) => s.create_path(matrix),
            Self::Vertigo(s) => s.create_path(matrix),
        }
    }
}
