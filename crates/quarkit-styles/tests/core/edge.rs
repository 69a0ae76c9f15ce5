use quarkit_core::ModuleMatrix;
use quarkit_styles::EdgeTracer;

/// Shoelace area; positive for the tracer's winding (y down, set cells on
/// the right).
fn signed_area(points: &[quarkit_core::Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}

#[test]
fn test_region_count_matches_components() {
    let matrix = ModuleMatrix::parse(
        "##..#\n\
         ##..#\n\
         .....\n\
         #.#.#\n",
    )
    .unwrap();
    let outlines: Vec<_> = EdgeTracer::new(&matrix).collect();
    assert_eq!(outlines.len(), 5);
    assert!(outlines.iter().all(|o| o.is_positive()));
}

#[test]
fn test_consistent_winding() {
    let matrix = ModuleMatrix::parse("###.\n#.#.\n###.\n...#\n").unwrap();
    for outline in EdgeTracer::new(&matrix) {
        assert!(signed_area(outline.simplified_points()) > 0.0);
    }
}

#[test]
fn test_outline_areas_reproduce_dark_count() {
    let matrix = ModuleMatrix::parse(
        "#####\n\
         #...#\n\
         #.#.#\n\
         #...#\n\
         #####\n",
    )
    .unwrap();
    let outlines: Vec<_> = EdgeTracer::new(&matrix).collect();
    // Outer frame, its hole, and the island inside the hole.
    assert_eq!(outlines.len(), 3);
    assert_eq!(
        outlines.iter().map(|o| o.is_positive()).collect::<Vec<_>>(),
        vec![true, false, true]
    );

    let area: f64 = outlines
        .iter()
        .map(|o| {
            let a = signed_area(o.simplified_points());
            if o.is_positive() {
                a
            } else {
                -a
            }
        })
        .sum();
    assert_eq!(area as usize, matrix.dark_count());
}

#[test]
fn test_simplified_points_drop_collinear_corners() {
    let matrix = ModuleMatrix::parse("####\n").unwrap();
    let outline = EdgeTracer::new(&matrix).next().unwrap();
    assert_eq!(outline.points().len(), 10);
    assert_eq!(outline.simplified_points().len(), 4);
}
