use quarkit_core::{Module, ModuleMatrix};
use quarkit_styles::{
    EyePosition, EyeShape, EyeStyle, ModuleRenderer, ModuleStyleKind, SymbolRenderer,
};

fn finder_symbol(size: usize) -> ModuleMatrix {
    let mut matrix = ModuleMatrix::new(size, size);
    let right = size - 7;
    let bottom = size - 7;
    for (ox, oy) in [(0, 0), (right, 0), (0, bottom)] {
        for y in 0..7 {
            for x in 0..7 {
                let ring = x == 0 || y == 0 || x == 6 || y == 6;
                let pupil = (2..=4).contains(&x) && (2..=4).contains(&y);
                if ring || pupil {
                    matrix.set(ox + x, oy + y, Module::Dark);
                }
            }
        }
    }
    matrix
}

#[test]
fn test_finder_modules_replaced_by_eyes() {
    let mut matrix = finder_symbol(21);
    matrix.set(10, 10, Module::Dark);
    matrix.set(12, 10, Module::Dark);

    let modules = ModuleRenderer::new(ModuleStyleKind::Star, 0.25).unwrap();
    let renderer = SymbolRenderer::new(modules, EyeStyle::Rounded);
    let paths = renderer.render(&matrix);

    assert_eq!(paths.modules.subpath_count(), 2);
    assert_eq!(
        paths.eyes.iter().map(|e| e.position).collect::<Vec<_>>(),
        EyePosition::ALL.to_vec()
    );
    for eye in &paths.eyes {
        assert_eq!(eye.outer.len(), EyeStyle::Rounded.outer_path().len());
        assert_eq!(eye.inner.len(), EyeStyle::Rounded.inner_path().len());
    }
}

#[test]
fn test_eyes_fill_finder_areas() {
    for style in [EyeStyle::Square, EyeStyle::Ring, EyeStyle::Rounded] {
        let renderer = SymbolRenderer::new(ModuleRenderer::default(), style);
        for eye in renderer.eye_paths(25, 25) {
            let (min_x, min_y, max_x, max_y) = eye.outer.bounding_box().unwrap();
            let (ox, oy) = match eye.position {
                EyePosition::TopLeft => (0.0, 0.0),
                EyePosition::TopRight => (18.0, 0.0),
                EyePosition::BottomLeft => (0.0, 18.0),
            };
            assert!((min_x - ox).abs() < 1e-4 && (max_x - ox - 7.0).abs() < 1e-4, "{style}");
            assert!((min_y - oy).abs() < 1e-4 && (max_y - oy - 7.0).abs() < 1e-4, "{style}");
        }
    }
}

#[test]
fn test_vertigo_symbol_is_deterministic() {
    let mut matrix = finder_symbol(21);
    for i in 7..14 {
        matrix.set(i, i, Module::Dark);
        matrix.set(i, 20 - i, Module::Dark);
    }
    let modules = ModuleRenderer::new(ModuleStyleKind::Vertigo, 0.5).unwrap();
    let renderer = SymbolRenderer::new(modules, EyeStyle::Ring);
    assert_eq!(renderer.render(&matrix), renderer.render(&matrix));
}
