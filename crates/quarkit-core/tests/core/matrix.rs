use quarkit_core::{MatrixError, Module, ModuleMatrix};

#[test]
fn test_parse_accepts_alternative_glyphs() {
    let a = ModuleMatrix::parse("X.1\n0 #\n").unwrap();
    let b = ModuleMatrix::parse("#.#\n..#\n").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parse_skips_empty_lines() {
    let matrix = ModuleMatrix::parse("\n##\n\n.#\n").unwrap();
    assert_eq!(matrix.height(), 2);
    assert_eq!(matrix.get(0, 1), Module::Light);
}

#[test]
fn test_parse_empty_input() {
    assert_eq!(ModuleMatrix::parse(""), Err(MatrixError::Empty));
}

#[test]
fn test_set_and_get() {
    let mut matrix = ModuleMatrix::new(3, 2);
    matrix.set(2, 1, Module::Dark);
    assert!(matrix.is_dark(2, 1));
    assert_eq!(matrix.dark_count(), 1);
}

#[test]
#[should_panic]
fn test_get_out_of_bounds_panics() {
    let matrix = ModuleMatrix::new(3, 3);
    matrix.get(3, 0);
}
