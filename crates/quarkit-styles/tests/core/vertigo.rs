use quarkit_core::{ModuleMatrix, PathCommand, Point, StyleError};
use quarkit_styles::{EdgeTracer, ModuleStyle, VertigoStyle};

fn curve_endpoints(commands: &[PathCommand]) -> Vec<Point> {
    commands
        .iter()
        .filter_map(|c| match *c {
            PathCommand::Curve { x, y, .. } => Some(Point::new(x, y)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_construction_boundaries() {
    assert!(VertigoStyle::new(0.5).is_ok());
    assert!(VertigoStyle::new(0.000_1).is_ok());
    assert!(matches!(
        VertigoStyle::new(0.5 + 1e-12),
        Err(StyleError::InvalidSmoothness { .. })
    ));
    assert!(matches!(
        VertigoStyle::new(-0.2),
        Err(StyleError::InvalidSmoothness { .. })
    ));
}

#[test]
fn test_single_module_gives_four_curves() {
    let matrix = ModuleMatrix::parse("#").unwrap();
    let path = VertigoStyle::new(0.3).unwrap().create_path(&matrix);

    assert_eq!(path.len(), 6);
    assert!(matches!(path.commands()[0], PathCommand::Move { .. }));
    assert_eq!(path.curve_count(), 4);
    assert_eq!(path.commands()[5], PathCommand::Close);
}

#[test]
fn test_plus_region_gives_twelve_curves() {
    let matrix = ModuleMatrix::parse(".#.\n###\n.#.\n").unwrap();
    let style = VertigoStyle::new(0.3).unwrap();
    let path = style.create_path(&matrix);

    assert_eq!(path.subpath_count(), 1);
    assert_eq!(path.curve_count(), 12);
    assert!(path.all_subpaths_closed());

    // Every curve ends next to the polygon vertex it replaces.
    let outline = EdgeTracer::new(&matrix).next().unwrap();
    let vertices = outline.simplified_points();
    let ends = curve_endpoints(path.commands());
    for (i, end) in ends.iter().enumerate() {
        let vertex = vertices[(i + 1) % vertices.len()];
        assert!(end.distance_to(&vertex) <= 0.3 + 1e-9);
    }
}

#[test]
fn test_unsimplified_block_outline_gives_twelve_curves() {
    let matrix = ModuleMatrix::parse("###\n###\n###\n").unwrap();
    let outline = EdgeTracer::new(&matrix).next().unwrap();
    assert_eq!(outline.points().len(), 12);

    let path = VertigoStyle::new(0.3)
        .unwrap()
        .create_path_from_outlines([outline.points()]);
    assert_eq!(path.subpath_count(), 1);
    assert_eq!(path.curve_count(), 12);
    assert!(path.all_subpaths_closed());
}

#[test]
fn test_degenerate_regions_contribute_nothing() {
    let style = VertigoStyle::new(0.4).unwrap();
    let square = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let segment = [Point::new(5.0, 5.0), Point::new(6.0, 5.0)];
    let single = [Point::new(9.0, 9.0)];

    let path = style.create_path_from_outlines([&segment[..], &square[..], &single[..]]);
    assert_eq!(path.subpath_count(), 1);
    assert_eq!(path.curve_count(), 4);
}

#[test]
fn test_holes_are_drawn() {
    let matrix = ModuleMatrix::parse("###\n#.#\n###\n").unwrap();
    let path = VertigoStyle::new(0.2).unwrap().create_path(&matrix);
    assert_eq!(path.subpath_count(), 2);
    assert_eq!(path.curve_count(), 8);
}

#[test]
fn test_idempotent() {
    let matrix = ModuleMatrix::parse("##.#\n#..#\n.###\n#.#.\n").unwrap();
    let style = VertigoStyle::new(0.25).unwrap();
    assert_eq!(style.create_path(&matrix), style.create_path(&matrix));
}

#[test]
fn test_empty_matrix_gives_empty_path() {
    let matrix = ModuleMatrix::new(3, 3);
    assert!(VertigoStyle::new(0.5).unwrap().create_path(&matrix).is_empty());
}
