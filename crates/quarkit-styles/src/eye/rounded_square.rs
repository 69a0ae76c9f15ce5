use quarkit_core::Path;

use super::EyeShape;

/// Square eye with cubic-rounded corners
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoundedSquareEye;

/// Append a square of half extent `size` whose corners are rounded by a
/// cubic curve starting `run` away from each axis. Starts and ends at
/// `(0, size)`.
fn add_rounded_square(path: Path, size: f64, run: f64) -> Path {
    let (s, m) = (size, run);
    path.move_to(0.0, s)
        .line_to(m, s)
        .curve_to(m, s, s, s, s, m)
        .line_to(s, 0.0)
        .line_to(s, -m)
        .curve_to(s, -m, s, -s, m, -s)
        .line_to(0.0, -s)
        .line_to(-m, -s)
        .curve_to(-m, -s, -s, -s, -s, -m)
        .line_to(-s, 0.0)
        .line_to(-s, m)
        .curve_to(-s, m, -s, s, -m, s)
        .line_to(0.0, s)
        .close()
}

impl EyeShape for RoundedSquareEye {
    fn outer_path(&self) -> Path {
        let path = add_rounded_square(Path::new(), 3.5, 1.0);
        add_rounded_square(path, 2.5, 1.0)
    }

    fn inner_path(&self) -> Path {
        add_rounded_square(Path::new(), 1.5, 0.75)
    }
}
