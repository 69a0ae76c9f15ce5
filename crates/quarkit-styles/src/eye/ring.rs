use quarkit_core::Path;

use super::{add_circle, EyeShape};

const OUTER_RADIUS: f64 = 3.5;
const RING_INNER_RADIUS: f64 = 2.5;
const PUPIL_RADIUS: f64 = 1.6;

/// Circular ring with a round pupil
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RingEye;

impl EyeShape for RingEye {
    fn outer_path(&self) -> Path {
        add_circle(add_circle(Path::new(), OUTER_RADIUS), RING_INNER_RADIUS)
    }

    fn inner_path(&self) -> Path {
        add_circle(Path::new(), PUPIL_RADIUS)
    }
}
