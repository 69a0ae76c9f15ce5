//! Backend-agnostic vector path
//!
//! A [`Path`] is an append-only list of drawing commands. Every command method
//! consumes and returns the path so shapes can be written as one chain:
//!
//! ```
//! use quarkit_core::Path;
//!
//! let square = Path::new()
//!     .move_to(0.0, 0.0)
//!     .line_to(1.0, 0.0)
//!     .line_to(1.0, 1.0)
//!     .line_to(0.0, 1.0)
//!     .close();
//! assert_eq!(square.subpath_count(), 1);
//! ```
//!
//! Nothing here validates geometry. Lowering to a concrete format happens
//! through [`Path::to_svg_data`] or [`Path::to_lyon`].

use lyon::geom::ArcFlags;
use lyon::math::{point, vector, Angle};
use lyon::path::traits::{Build, SvgPathBuilder};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single drawing command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    /// Start a new subpath
    Move { x: f64, y: f64 },
    /// Straight line to an absolute point
    Line { x: f64, y: f64 },
    /// Cubic Bezier curve to an absolute point
    Curve {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    /// Elliptic arc whose endpoint is relative to the current point
    EllipticArc {
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    },
    /// Close the current subpath back to its starting point
    Close,
}

/// Ordered sequence of drawing commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::Move { x, y });
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::Line { x, y });
        self
    }

    pub fn curve_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.commands.push(PathCommand::Curve {
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        });
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn elliptic_arc(
        mut self,
        rx: f64,
        ry: f64,
        x_axis_rotation: f64,
        large_arc: bool,
        sweep: bool,
        dx: f64,
        dy: f64,
    ) -> Self {
        self.commands.push(PathCommand::EllipticArc {
            rx,
            ry,
            x_axis_rotation,
            large_arc,
            sweep,
            dx,
            dy,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Append every command of `other` after the commands of this path.
    pub fn append(mut self, other: &Path) -> Self {
        self.commands.extend_from_slice(&other.commands);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of subpaths, i.e. number of `Move` commands.
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Move { .. }))
            .count()
    }

    /// Split into one path per subpath, in drawing order. Commands before
    /// the first `Move` are kept as their own leading path.
    pub fn subpaths(&self) -> Vec<Path> {
        let mut paths: Vec<Path> = Vec::new();
        for command in &self.commands {
            match (command, paths.last_mut()) {
                (PathCommand::Move { .. }, _) | (_, None) => paths.push(Path {
                    commands: vec![*command],
                }),
                (_, Some(last)) => last.commands.push(*command),
            }
        }
        paths
    }

    /// Number of cubic curve commands.
    pub fn curve_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::Curve { .. }))
            .count()
    }

    /// True when every subpath is terminated by a `Close` before the next
    /// `Move` (or the end of the path).
    pub fn all_subpaths_closed(&self) -> bool {
        let mut open = false;
        for command in &self.commands {
            match command {
                PathCommand::Move { .. } => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                PathCommand::Close => open = false,
                _ => {}
            }
        }
        !open
    }

    /// Translate every absolute coordinate. Arc deltas are unaffected.
    pub fn translated(&self, dx: f64, dy: f64) -> Path {
        self.map_commands(|x, y| (x + dx, y + dy), |x, y| (x, y), 0.0)
    }

    /// Rotate the path about the origin by `degrees` (positive turns +x
    /// towards +y).
    pub fn rotated(&self, degrees: f64) -> Path {
        let (sin, cos) = sin_cos_degrees(degrees);
        let rotate = move |x: f64, y: f64| (x * cos - y * sin, x * sin + y * cos);
        self.map_commands(rotate, rotate, degrees)
    }

    fn map_commands<P, V>(&self, map_point: P, map_vector: V, arc_rotation: f64) -> Path
    where
        P: Fn(f64, f64) -> (f64, f64),
        V: Fn(f64, f64) -> (f64, f64),
    {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::Move { x, y } => {
                    let (x, y) = map_point(x, y);
                    PathCommand::Move { x, y }
                }
                PathCommand::Line { x, y } => {
                    let (x, y) = map_point(x, y);
                    PathCommand::Line { x, y }
                }
                PathCommand::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    let (x1, y1) = map_point(x1, y1);
                    let (x2, y2) = map_point(x2, y2);
                    let (x, y) = map_point(x, y);
                    PathCommand::Curve {
                        x1,
                        y1,
                        x2,
                        y2,
                        x,
                        y,
                    }
                }
                PathCommand::EllipticArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    dx,
                    dy,
                } => {
                    let (dx, dy) = map_vector(dx, dy);
                    PathCommand::EllipticArc {
                        rx,
                        ry,
                        x_axis_rotation: x_axis_rotation + arc_rotation,
                        large_arc,
                        sweep,
                        dx,
                        dy,
                    }
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path { commands }
    }

    /// Render as SVG path data (the value of a `d` attribute).
    pub fn to_svg_data(&self) -> String {
        let mut svg = String::new();
        for command in &self.commands {
            // Writing into a String cannot fail.
            let _ = match *command {
                PathCommand::Move { x, y } => write!(svg, "M{} {} ", x, y),
                PathCommand::Line { x, y } => write!(svg, "L{} {} ", x, y),
                PathCommand::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => write!(svg, "C{} {} {} {} {} {} ", x1, y1, x2, y2, x, y),
                PathCommand::EllipticArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    dx,
                    dy,
                } => write!(
                    svg,
                    "a{} {} {} {} {} {} {} ",
                    rx, ry, x_axis_rotation, large_arc as u8, sweep as u8, dx, dy
                ),
                PathCommand::Close => write!(svg, "Z "),
            };
        }
        svg.truncate(svg.trim_end().len());
        svg
    }

    /// Lower to a `lyon` path for tessellation or flattening.
    pub fn to_lyon(&self) -> lyon::path::Path {
        let mut builder = lyon::path::Path::builder().with_svg();
        for command in &self.commands {
            match *command {
                PathCommand::Move { x, y } => {
                    builder.move_to(point(x as f32, y as f32));
                }
                PathCommand::Line { x, y } => {
                    builder.line_to(point(x as f32, y as f32));
                }
                PathCommand::Curve {
                    x1,
                    y1,
                    x2,
                    y2,
                    x,
                    y,
                } => {
                    builder.cubic_bezier_to(
                        point(x1 as f32, y1 as f32),
                        point(x2 as f32, y2 as f32),
                        point(x as f32, y as f32),
                    );
                }
                PathCommand::EllipticArc {
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                    dx,
                    dy,
                } => {
                    builder.relative_arc_to(
                        vector(rx as f32, ry as f32),
                        Angle::degrees(x_axis_rotation as f32),
                        ArcFlags { large_arc, sweep },
                        vector(dx as f32, dy as f32),
                    );
                }
                PathCommand::Close => {
                    builder.close();
                }
            }
        }
        builder.build()
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`, or `None` for
    /// an empty path.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let path = self.to_lyon();
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        Some((
            bb.min.x as f64,
            bb.min.y as f64,
            bb.max.x as f64,
            bb.max.y as f64,
        ))
    }
}

/// Exact sine and cosine for quarter turns, trigonometric otherwise.
fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let normalized = degrees.rem_euclid(360.0);
    if normalized == 0.0 {
        (0.0, 1.0)
    } else if normalized == 90.0 {
        (1.0, 0.0)
    } else if normalized == 180.0 {
        (0.0, -1.0)
    } else if normalized == 270.0 {
        (-1.0, 0.0)
    } else {
        normalized.to_radians().sin_cos()
    }
}
