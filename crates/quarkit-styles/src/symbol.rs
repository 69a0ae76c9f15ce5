//! Symbol composition
//!
//! Combines one module style and one eye style over a full symbol matrix.
//! The finder pattern areas are cleared from the matrix before the modules
//! are drawn and the eyes are placed on top of them: top-left unrotated,
//! top-right turned a quarter clockwise, bottom-left a quarter
//! counter-clockwise.

use quarkit_core::{ModuleMatrix, Path, FINDER_PATTERN_SIZE};
use tracing::debug;

use crate::eye::{EyeShape, EyeStyle};
use crate::module::{ModuleRenderer, ModuleStyle};

/// Distance from an eye's corner to its centre, in modules.
const EYE_CENTER: f64 = FINDER_PATTERN_SIZE as f64 / 2.0;

/// Finder pattern position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyePosition {
    TopLeft,
    TopRight,
    BottomLeft,
}

impl EyePosition {
    pub const ALL: [EyePosition; 3] = [
        EyePosition::TopLeft,
        EyePosition::TopRight,
        EyePosition::BottomLeft,
    ];

    /// Rotation applied to the eye, in degrees.
    pub fn rotation(self) -> f64 {
        match self {
            Self::TopLeft => 0.0,
            Self::TopRight => 90.0,
            Self::BottomLeft => -90.0,
        }
    }

    /// Centre of the eye in a `width` × `height` symbol.
    pub fn center(self, width: usize, height: usize) -> (f64, f64) {
        match self {
            Self::TopLeft => (EYE_CENTER, EYE_CENTER),
            Self::TopRight => (width as f64 - EYE_CENTER, EYE_CENTER),
            Self::BottomLeft => (EYE_CENTER, height as f64 - EYE_CENTER),
        }
    }
}

/// One eye moved into symbol coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEye {
    pub position: EyePosition,
    pub outer: Path,
    pub inner: Path,
}

/// Every path needed to draw a symbol
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolPaths {
    pub modules: Path,
    pub eyes: Vec<PlacedEye>,
}

/// Module style plus eye style
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SymbolRenderer {
    modules: ModuleRenderer,
    eye: EyeStyle,
}

impl SymbolRenderer {
    pub fn new(modules: ModuleRenderer, eye: EyeStyle) -> Self {
        Self { modules, eye }
    }

    pub fn module_renderer(&self) -> &ModuleRenderer {
        &self.modules
    }

    pub fn eye_style(&self) -> EyeStyle {
        self.eye
    }

    /// Path of the data modules, with finder areas left empty.
    pub fn module_path(&self, matrix: &ModuleMatrix) -> Path {
        self.modules
            .create_path(&matrix.without_finder_patterns())
    }

    /// The three eyes for a symbol of the given size. Symbols too small to
    /// hold finder patterns get none.
    pub fn eye_paths(&self, width: usize, height: usize) -> Vec<PlacedEye> {
        if width < FINDER_PATTERN_SIZE || height < FINDER_PATTERN_SIZE {
            return Vec::new();
        }

        let outer = self.eye.outer_path();
        let inner = self.eye.inner_path();
        EyePosition::ALL
            .iter()
            .map(|&position| {
                let (cx, cy) = position.center(width, height);
                let rotation = position.rotation();
                PlacedEye {
                    position,
                    outer: outer.rotated(rotation).translated(cx, cy),
                    inner: inner.rotated(rotation).translated(cx, cy),
                }
            })
            .collect()
    }

    pub fn render(&self, matrix: &ModuleMatrix) -> SymbolPaths {
        let modules = self.module_path(matrix);
        let eyes = self.eye_paths(matrix.width(), matrix.height());
        debug!(
            width = matrix.width(),
            height = matrix.height(),
            style = %self.modules.kind(),
            eye = %self.eye,
            commands = modules.len(),
            "Rendered symbol paths"
        );
        SymbolPaths { modules, eyes }
    }
}
