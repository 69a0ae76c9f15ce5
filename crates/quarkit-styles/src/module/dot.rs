use quarkit_core::{ModuleMatrix, Path, StyleError};
use tracing::debug;

use super::{ModuleStyle, ModuleStyleKind};
use crate::eye::add_circle_at;

/// Dotted module style: one circle of diameter `size` centred in every dark
/// module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    size: f64,
}

impl DotStyle {
    pub fn new(size: f64) -> Result<Self, StyleError> {
        let kind = ModuleStyleKind::Dot;
        if !(size > 0.0 && size <= kind.max_size()) {
            return Err(StyleError::InvalidSize {
                style: kind.to_string(),
                max: kind.max_size(),
                value: size,
            });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> f64 {
        self.size
    }
}

impl ModuleStyle for DotStyle {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path {
        let r = self.size / 2.0;
        let mut path = Path::new();
        let mut modules = 0usize;

        for y in 0..matrix.height() {
            for x in 0..matrix.width() {
                if matrix.is_dark(x, y) {
                    path = add_circle_at(path, x as f64 + 0.5, y as f64 + 0.5, r);
                    modules += 1;
                }
            }
        }

        debug!(modules, size = self.size, "Built dot module path");
        path
    }
}
