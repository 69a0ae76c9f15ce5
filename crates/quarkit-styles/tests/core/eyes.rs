use quarkit_core::{Path, PathCommand};
use quarkit_styles::{CircleEye, EyeShape, EyeStyle, RingEye, RoundedSquareEye};

/// Radii of the circles in a path built from `move(r, 0)` plus four arcs.
fn circle_radii(commands: &[PathCommand]) -> Vec<f64> {
    commands
        .iter()
        .filter_map(|c| match *c {
            PathCommand::Move { x, y } if y == 0.0 => Some(x),
            _ => None,
        })
        .collect()
}

fn assert_centred_circle(path: &Path, r: f64) {
    let (min_x, min_y, max_x, max_y) = path.bounding_box().unwrap();
    for (value, expected) in [(min_x, -r), (min_y, -r), (max_x, r), (max_y, r)] {
        assert!(
            (value - expected).abs() < 1e-4,
            "radius {r}: bound {value} != {expected}"
        );
    }
}

#[test]
fn test_ring_eye_circles_are_centred() {
    let outer = RingEye.outer_path().subpaths();
    assert_eq!(outer.len(), 2);
    assert_centred_circle(&outer[0], 3.5);
    assert_centred_circle(&outer[1], 2.5);
    assert_centred_circle(&RingEye.inner_path(), 1.6);
}

#[test]
fn test_circle_eye_pupil_is_centred() {
    assert_centred_circle(&CircleEye.inner_path(), 1.5);
}

#[test]
fn test_ring_eye_outer_circles() {
    let path = RingEye.outer_path();
    assert_eq!(circle_radii(path.commands()), vec![3.5, 2.5]);
    assert!(path.all_subpaths_closed());

    for command in path.commands() {
        if let PathCommand::EllipticArc {
            rx,
            ry,
            large_arc,
            sweep,
            ..
        } = *command
        {
            assert_eq!(rx, ry);
            assert!(rx == 3.5 || rx == 2.5);
            assert!(!large_arc);
            assert!(sweep);
        }
    }
}

#[test]
fn test_ring_eye_pupil() {
    let path = RingEye.inner_path();
    assert_eq!(circle_radii(path.commands()), vec![1.6]);
    assert_eq!(path.len(), 6);

    // The four quarter arcs bring the pen back to the start.
    let (dx, dy) = path.commands().iter().fold((0.0, 0.0), |acc, c| match *c {
        PathCommand::EllipticArc { dx, dy, .. } => (acc.0 + dx, acc.1 + dy),
        _ => acc,
    });
    assert!(dx.abs() < 1e-12 && dy.abs() < 1e-12);
}

#[test]
fn test_eyes_are_constant() {
    assert_eq!(RingEye.outer_path(), RingEye.outer_path());
    assert_eq!(RoundedSquareEye.inner_path(), RoundedSquareEye.inner_path());
}

#[test]
fn test_rounded_square_extents() {
    let (min_x, _, max_x, _) = RoundedSquareEye.inner_path().bounding_box().unwrap();
    assert!((min_x + 1.5).abs() < 1e-6);
    assert!((max_x - 1.5).abs() < 1e-6);

    let outer = RoundedSquareEye.outer_path();
    assert_eq!(outer.commands()[0], PathCommand::Move { x: 0.0, y: 3.5 });
    assert_eq!(outer.commands()[14], PathCommand::Move { x: 0.0, y: 2.5 });
}

#[test]
fn test_every_style_is_closed() {
    for style in [EyeStyle::Square, EyeStyle::Circle, EyeStyle::Rounded, EyeStyle::Ring] {
        assert_eq!(style.outer_path().subpath_count(), 2, "{style}");
        assert_eq!(style.inner_path().subpath_count(), 1, "{style}");
        assert!(style.outer_path().all_subpaths_closed());
        assert!(style.inner_path().all_subpaths_closed());
    }
}
