use super::*;

fn point(x: f64, y: f64) -> ZonePoint {
    ZonePoint { x, y }
}

#[test]
fn polygon_attr_joins_points_with_spaces() {
    let points = vec![point(10.0, 20.0), point(30.5, 40.0), point(0.0, 0.0)];
    assert_eq!(polygon_points_attr(&points), "10,20 30.5,40 0,0");
}

#[test]
fn polygon_attr_of_nothing_is_empty() {
    assert_eq!(polygon_points_attr(&[]), "");
}

#[test]
fn zones_need_at_least_three_points() {
    assert!(!zone_is_valid(&[]));
    assert!(!zone_is_valid(&[point(0.0, 0.0), point(1.0, 1.0)]));
    assert!(zone_is_valid(&[
        point(0.0, 0.0),
        point(1.0, 1.0),
        point(2.0, 0.0)
    ]));
}

#[test]
fn next_zone_name_counts_from_one() {
    assert_eq!(next_zone_name(0), "Zone 1");
    assert_eq!(next_zone_name(2), "Zone 3");
}
