//! Edge tracer
//!
//! Walks the outline of every 4-connected region of dark modules and yields
//! it as a closed polygon on the module-corner lattice. After a region is
//! traced, every cell it encloses is inverted: the region disappears from
//! the working grid and any holes inside it become set, so holes are traced
//! next as outlines of their own (with `positive == false`). Filled with the
//! even-odd rule, the outlines reproduce the matrix exactly.
//!
//! All outlines wind the same way: with `y` growing downward the set cells
//! are always on the right-hand side of the walk.

use quarkit_core::{ModuleMatrix, Point};

/// Closed outline of one region or hole
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
    simplified: Vec<Point>,
    positive: bool,
}

impl Outline {
    pub fn new(points: Vec<Point>, positive: bool) -> Self {
        let simplified = simplify(&points);
        Self {
            points,
            simplified,
            positive,
        }
    }

    /// Every lattice corner visited by the walk.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Corners only: points collinear with both neighbours removed.
    pub fn simplified_points(&self) -> &[Point] {
        &self.simplified
    }

    /// `true` for the outline of dark modules, `false` for a hole.
    pub fn is_positive(&self) -> bool {
        self.positive
    }
}

/// Drop every point that lies on a straight run through its neighbours.
fn simplify(points: &[Point]) -> Vec<Point> {
    let len = points.len();
    (0..len)
        .filter(|&i| {
            let prev = points[(i + len - 1) % len];
            let current = points[i];
            let next = points[(i + 1) % len];
            let vertical = prev.x == current.x && current.x == next.x;
            let horizontal = prev.y == current.y && current.y == next.y;
            !(vertical || horizontal)
        })
        .map(|i| points[i])
        .collect()
}

/// Iterator over the outlines of a module matrix
pub struct EdgeTracer {
    cells: Vec<bool>,
    original: Vec<bool>,
    width: usize,
    height: usize,
    cursor: usize,
}

impl EdgeTracer {
    pub fn new(matrix: &ModuleMatrix) -> Self {
        let width = matrix.width();
        let height = matrix.height();
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(matrix.is_dark(x, y));
            }
        }
        Self {
            original: cells.clone(),
            cells,
            width,
            height,
            cursor: 0,
        }
    }

    fn is_set(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return false;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Next set cell in row-major order. Cells before the cursor are clear
    /// for good: inversion only touches cells enclosed by an outline, and
    /// those lie after the outline's first cell.
    fn find_next(&mut self) -> Option<(i64, i64)> {
        while self.cursor < self.cells.len() {
            if self.cells[self.cursor] {
                let x = (self.cursor % self.width) as i64;
                let y = (self.cursor / self.width) as i64;
                return Some((x, y));
            }
            self.cursor += 1;
        }
        None
    }

    /// Walk the boundary starting at the top-left corner of cell `(x, y)`.
    fn trace(&self, start_x: i64, start_y: i64) -> Vec<(i64, i64)> {
        let (mut x, mut y) = (start_x, start_y);
        let (mut dir_x, mut dir_y) = (1i64, 0i64);
        let mut corners = Vec::new();

        loop {
            corners.push((x, y));
            x += dir_x;
            y += dir_y;
            if x == start_x && y == start_y {
                break;
            }

            let ahead_left = self.is_set(x + (dir_x + dir_y - 1) / 2, y + (dir_y - dir_x - 1) / 2);
            let ahead_right =
                self.is_set(x + (dir_x - dir_y - 1) / 2, y + (dir_y + dir_x - 1) / 2);

            if ahead_left && ahead_right {
                // Concave corner: turn left.
                (dir_x, dir_y) = (dir_y, -dir_x);
            } else if !ahead_right {
                // Convex corner, or a diagonal touch that belongs to another
                // region: turn right.
                (dir_x, dir_y) = (-dir_y, dir_x);
            }
        }

        corners
    }

    /// Invert every cell enclosed by the closed walk.
    fn invert_enclosed(&mut self, corners: &[(i64, i64)]) {
        let len = corners.len();
        for i in 0..len {
            let (x, y) = corners[i];
            let (_, next_y) = corners[(i + 1) % len];
            if next_y == y {
                continue;
            }
            let row = y.min(next_y) as usize;
            let from = row * self.width + x as usize;
            let to = (row + 1) * self.width;
            for cell in &mut self.cells[from..to] {
                *cell = !*cell;
            }
        }
    }
}

impl Iterator for EdgeTracer {
    type Item = Outline;

    fn next(&mut self) -> Option<Outline> {
        let (x, y) = self.find_next()?;
        let positive = self.original[y as usize * self.width + x as usize];
        let corners = self.trace(x, y);
        self.invert_enclosed(&corners);

        let points = corners
            .into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect();
        Some(Outline::new(points, positive))
    }
}
