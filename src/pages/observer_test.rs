use super::*;

#[test]
fn single_camera_takes_the_full_width() {
    assert_eq!(grid_class(0), "observer-grid observer-grid--single");
    assert_eq!(grid_class(1), "observer-grid observer-grid--single");
}

#[test]
fn small_fleets_use_the_wide_grid() {
    assert_eq!(grid_class(2), "observer-grid observer-grid--wide");
    assert_eq!(grid_class(4), "observer-grid observer-grid--wide");
}

#[test]
fn larger_fleets_use_the_dense_grid() {
    assert_eq!(grid_class(5), "observer-grid");
    assert_eq!(grid_class(12), "observer-grid");
}
