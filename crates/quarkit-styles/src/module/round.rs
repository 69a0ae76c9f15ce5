use quarkit_core::{ModuleMatrix, Path, Point, StyleError};
use tracing::{debug, trace};

use super::{ModuleStyle, ModuleStyleKind};
use crate::edge::EdgeTracer;

/// Rounded module style
///
/// Traces every region like the square style, then cuts each corner back by
/// half of `size` and bridges the gap with a cubic whose control points both
/// sit on the corner. At size 1 a lone module becomes a circle-like blob.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStyle {
    size: f64,
}

impl RoundStyle {
    pub fn new(size: f64) -> Result<Self, StyleError> {
        let kind = ModuleStyleKind::Round;
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

    fn add_outline(&self, path: Path, points: &[Point]) -> Path {
        let len = points.len();
        let cut = self.size / 2.0;

        let exit = |i: usize| {
            let corner = points[i % len];
            corner + (points[(i + 1) % len] - corner).normalized() * cut
        };

        let start = exit(0);
        let mut path = path.move_to(start.x, start.y);
        let mut pen = start;

        for i in 1..=len {
            let corner = points[i % len];
            let prev = points[i - 1];
            let entry = corner - (corner - prev).normalized() * cut;
            if entry.distance_to(&pen) > 1e-9 {
                path = path.line_to(entry.x, entry.y);
            }
            pen = exit(i);
            path = path.curve_to(corner.x, corner.y, corner.x, corner.y, pen.x, pen.y);
        }

        path.close()
    }
}

impl ModuleStyle for RoundStyle {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path {
        let mut path = Path::new();
        let mut outlines = 0usize;

        for outline in EdgeTracer::new(matrix) {
            let points = outline.simplified_points();
            if points.len() < 3 {
                trace!(points = points.len(), "Skipping degenerate outline");
                continue;
            }
            path = self.add_outline(path, points);
            outlines += 1;
        }

        debug!(outlines, size = self.size, "Built round module path");
        path
    }
}
