use quarkit_core::{ModuleMatrix, Path};
use tracing::debug;

use super::ModuleStyle;
use crate::edge::EdgeTracer;

/// Plain module style: each traced outline drawn with straight lines.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SquareStyle;

impl ModuleStyle for SquareStyle {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path {
        let mut path = Path::new();
        let mut outlines = 0usize;

        for outline in EdgeTracer::new(matrix) {
            let points = outline.simplified_points();
            if points.len() < 3 {
                continue;
            }

            path = path.move_to(points[0].x, points[0].y);
            for p in &points[1..] {
                path = path.line_to(p.x, p.y);
            }
            path = path.close();
            outlines += 1;
        }

        debug!(outlines, "Built square module path");
        path
    }
}
