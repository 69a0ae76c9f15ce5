use quarkit_core::{ModuleMatrix, Path, Point, StyleError};
use tracing::{debug, trace};

use super::ModuleStyle;
use crate::edge::EdgeTracer;

// Fixed factors, kept as-is for visual output. The exit control point
// overshoots the corner, so neighbouring curves loop past each other near
// convex vertices and an outline may cross itself there.

/// Control point factor for the curve leaving a vertex.
const ENTRY_FACTOR: f64 = 0.3;
/// Control point factor for the curve arriving at the next vertex.
const EXIT_FACTOR: f64 = 0.7;

/// Smoothed module style
///
/// Traces every region of dark modules and replaces its polygon with one
/// closed cubic Bezier outline. Vertices are pushed sideways by a
/// perpendicular offset derived from the averaged edge directions, and each
/// edge gets control points along the neighbouring chords. Higher
/// `smoothness` gives a rounder, less blocky outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertigoStyle {
    smoothness: f64,
}

impl VertigoStyle {
    pub fn new(smoothness: f64) -> Result<Self, StyleError> {
        if !(smoothness > 0.0 && smoothness <= 0.5) {
            return Err(StyleError::InvalidSmoothness { value: smoothness });
        }
        Ok(Self { smoothness })
    }

    pub fn smoothness(&self) -> f64 {
        self.smoothness
    }

    /// Build the path from already traced outlines, in the given order.
    /// Outlines with fewer than three points are skipped.
    pub fn create_path_from_outlines<'a, I>(&self, outlines: I) -> Path
    where
        I: IntoIterator<Item = &'a [Point]>,
    {
        let mut path = Path::new();
        let mut emitted = 0usize;
        let mut skipped = 0usize;

        for points in outlines {
            if points.len() < 3 {
                trace!(points = points.len(), "Skipping degenerate outline");
                skipped += 1;
                continue;
            }
            path = self.add_outline(path, points);
            emitted += 1;
        }

        debug!(
            outlines = emitted,
            skipped,
            smoothness = self.smoothness,
            "Built vertigo module path"
        );
        path
    }

    fn add_outline(&self, path: Path, points: &[Point]) -> Path {
        let len = points.len();
        let start = points[0] + self.smooth_offset(points[len - 1], points[0], points[1]);
        let mut path = path.move_to(start.x, start.y);

        for i in 0..len {
            let prev = points[(i + len - 1) % len];
            let current = points[i];
            let next = points[(i + 1) % len];
            let next_next = points[(i + 2) % len];

            let cp1 = self.control_point(prev, current, next, ENTRY_FACTOR);
            let cp2 = self.control_point(current, next, next_next, EXIT_FACTOR);
            let end = next + self.smooth_offset(current, next, next_next);

            path = path.curve_to(cp1.x, cp1.y, cp2.x, cp2.y, end.x, end.y);
        }

        path.close()
    }

    /// Perpendicular displacement at `current`: the averaged unit directions
    /// of the incoming and outgoing edges, turned a quarter and scaled.
    fn smooth_offset(&self, prev: Point, current: Point, next: Point) -> Point {
        let incoming = (current - prev).normalized();
        let outgoing = (next - current).normalized();
        let average = (incoming + outgoing) * 0.5;
        average.perpendicular() * self.smoothness
    }

    fn control_point(&self, prev: Point, current: Point, next: Point, factor: f64) -> Point {
        current + (next - prev) * (self.smoothness * factor)
    }
}

impl ModuleStyle for VertigoStyle {
    fn create_path(&self, matrix: &ModuleMatrix) -> Path {
        let outlines: Vec<_> = EdgeTracer::new(matrix).collect();
        self.create_path_from_outlines(outlines.iter().map(|o| o.simplified_points()))
    }
}
