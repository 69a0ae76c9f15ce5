use quarkit_core::Path;

use super::{add_circle, EyeShape};

/// Append an axis-aligned square of half extent `size`. `reversed` walks it
/// counter-clockwise so a nested square cuts a hole under nonzero filling
/// as well.
fn add_square(path: Path, size: f64, reversed: bool) -> Path {
    let s = size;
    let path = path.move_to(-s, -s);
    let path = if reversed {
        path.line_to(-s, s).line_to(s, s).line_to(s, -s)
    } else {
        path.line_to(s, -s).line_to(s, s).line_to(-s, s)
    };
    path.close()
}

fn square_ring() -> Path {
    add_square(add_square(Path::new(), 3.5, false), 2.5, true)
}

/// Classic square finder pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareEye;

impl EyeShape for SquareEye {
    fn outer_path(&self) -> Path {
        square_ring()
    }

    fn inner_path(&self) -> Path {
        add_square(Path::new(), 1.5, false)
    }
}

/// Square ring with a round pupil
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CircleEye;

impl EyeShape for CircleEye {
    fn outer_path(&self) -> Path {
        square_ring()
    }

    fn inner_path(&self) -> Path {
        add_circle(Path::new(), 1.5)
    }
}
