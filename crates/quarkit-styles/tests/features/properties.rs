use proptest::prelude::*;
use quarkit_core::ModuleMatrix;
use quarkit_styles::{DotStyle, EdgeTracer, ModuleStyle, RoundStyle, StarStyle, VertigoStyle};

fn matrix_strategy() -> impl Strategy<Value = ModuleMatrix> {
    (1usize..12, 1usize..12).prop_flat_map(|(width, height)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), width), height)
            .prop_map(|rows| ModuleMatrix::from_rows(rows).unwrap())
    })
}

proptest! {
    #[test]
    fn star_emits_one_subpath_per_dark_module(
        matrix in matrix_strategy(),
        radius in 0.001f64..=0.5,
    ) {
        let path = StarStyle::new(radius).unwrap().create_path(&matrix);
        prop_assert_eq!(path.subpath_count(), matrix.dark_count());
        prop_assert!(path.all_subpaths_closed());
    }

    #[test]
    fn vertigo_emits_one_subpath_per_outline(
        matrix in matrix_strategy(),
        smoothness in 0.001f64..=0.5,
    ) {
        let style = VertigoStyle::new(smoothness).unwrap();
        let path = style.create_path(&matrix);
        let outlines: Vec<_> = EdgeTracer::new(&matrix).collect();
        let corners: usize = outlines.iter().map(|o| o.simplified_points().len()).sum();

        prop_assert_eq!(path.subpath_count(), outlines.len());
        prop_assert_eq!(path.curve_count(), corners);
        prop_assert!(path.all_subpaths_closed());
        prop_assert_eq!(path, style.create_path(&matrix));
    }

    #[test]
    fn dot_emits_one_circle_per_dark_module(
        matrix in matrix_strategy(),
        size in 0.001f64..=1.0,
    ) {
        let path = DotStyle::new(size).unwrap().create_path(&matrix);
        prop_assert_eq!(path.subpath_count(), matrix.dark_count());
        prop_assert!(path.all_subpaths_closed());
    }

    #[test]
    fn round_emits_one_curve_per_corner(
        matrix in matrix_strategy(),
        size in 0.001f64..=1.0,
    ) {
        let path = RoundStyle::new(size).unwrap().create_path(&matrix);
        let outlines: Vec<_> = EdgeTracer::new(&matrix).collect();
        let corners: usize = outlines.iter().map(|o| o.simplified_points().len()).sum();

        prop_assert_eq!(path.subpath_count(), outlines.len());
        prop_assert_eq!(path.curve_count(), corners);
        prop_assert!(path.all_subpaths_closed());
    }

    #[test]
    fn out_of_range_parameters_rejected(value in prop_oneof![-10.0f64..=0.0, 0.500_001f64..10.0]) {
        prop_assert!(StarStyle::new(value).is_err());
        prop_assert!(VertigoStyle::new(value).is_err());
    }
}
