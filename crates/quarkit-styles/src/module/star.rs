use quarkit_core::{ModuleMatrix, Path, StyleError};
use tracing::debug;

use super::ModuleStyle;

/// Faceted module style
///
/// Every dark module becomes its own octagon: a unit square whose four
/// corners are cut by straight chamfers of length `radius`. The chamfers are
/// intentionally straight lines, not arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarStyle {
    radius: f64,
}

impl StarStyle {
    pub fn new(radius: f64) -> Result<Self, StyleError> {
        if !(radius > 0.0 && radius <= 0.5) {
            return Err(StyleError::InvalidRadius { value: radius });
        }
        Ok(Self { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    fn add_chamfered_square(&self, path: Path, x: usize, y: usize) -> Path {
        let left = x as f64;
        let top = y as f64;
        let right = left + 1.0;
        let bottom = top + 1.0;
        let r = self.radius;

        path.move_to(left + r, top)
            .line_to(right - r, top)
            .line_to(right, top + r)
            .line_to(right, bottom - r)
            .line_to(right - r, bottom)
            .line_to(left + r, bottom)
            .line_to(left, bottom - r)
            .line_to(left, top + r)
            .line_to(left + r, top)
            .close()
    }
}

impl ModuleStyle for StarStyle {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path {
        let mut path = Path::new();
        let mut modules = 0usize;

        for y in 0..matrix.height() {
            for x in 0..matrix.width() {
                if matrix.is_dark(x, y) {
                    path = self.add_chamfered_square(path, x, y);
                    modules += 1;
                }
            }
        }

        debug!(modules, radius = self.radius, "Built star module path");
        path
    }
}
