use super::*;

fn alert(id: i64, created_at: &str, camera_name: Option<&str>, camera_id: Option<i64>) -> Alert {
    Alert {
        id,
        status: "active".to_owned(),
        message: None,
        created_at: Some(created_at.to_owned()),
        camera_id,
        camera_name: camera_name.map(str::to_owned),
        camera_location: None,
        zone_id: None,
        zone_name: None,
    }
}

// 2025-04-07T00:00:00Z in epoch milliseconds.
const APR_7_2025_MS: f64 = 1_743_984_000_000.0;

// =============================================================
// Day buckets
// =============================================================

#[test]
fn seven_buckets_end_today_oldest_first() {
    let buckets = day_buckets_ending(APR_7_2025_MS, 7);
    assert_eq!(buckets.len(), 7);
    assert_eq!(buckets[0].key, "2025-04-01");
    assert_eq!(buckets[6].key, "2025-04-07");
    assert_eq!(buckets[6].label, "7/4");
}

#[test]
fn buckets_cross_month_boundaries() {
    // Two days after March ends.
    let apr_2 = APR_7_2025_MS - 5.0 * 86_400_000.0;
    let buckets = day_buckets_ending(apr_2, 3);
    assert_eq!(buckets[0].key, "2025-03-31");
    assert_eq!(buckets[1].key, "2025-04-01");
    assert_eq!(buckets[2].key, "2025-04-02");
}

#[test]
fn counts_match_alerts_to_their_day_only() {
    let buckets = day_buckets_ending(APR_7_2025_MS, 7);
    let alerts = vec![
        alert(1, "2025-04-07T08:30:00", Some("lobby"), Some(1)),
        alert(2, "2025-04-07T18:00:00", Some("lobby"), Some(1)),
        alert(3, "2025-04-01T00:10:00", Some("dock"), Some(2)),
        alert(4, "2025-03-20T12:00:00", Some("dock"), Some(2)),
    ];
    let counts = alerts_per_day(&alerts, &buckets);
    assert_eq!(counts, vec![1, 0, 0, 0, 0, 0, 2]);
}

#[test]
fn alerts_without_timestamps_count_nowhere() {
    let buckets = day_buckets_ending(APR_7_2025_MS, 2);
    let mut orphan = alert(1, "", None, None);
    orphan.created_at = None;
    assert_eq!(alerts_per_day(&[orphan], &buckets), vec![0, 0]);
}

// =============================================================
// Busiest cameras
// =============================================================

#[test]
fn ranking_is_descending_and_capped() {
    let alerts = vec![
        alert(1, "2025-04-07T08:00:00", Some("lobby"), Some(1)),
        alert(2, "2025-04-07T09:00:00", Some("dock"), Some(2)),
        alert(3, "2025-04-07T10:00:00", Some("dock"), Some(2)),
        alert(4, "2025-04-07T11:00:00", Some("garage"), Some(3)),
        alert(5, "2025-04-07T12:00:00", Some("dock"), Some(2)),
    ];
    let top = busiest_cameras(&alerts, 2);
    assert_eq!(top, vec![("dock".to_owned(), 3), ("garage".to_owned(), 1)]);
}

#[test]
fn ranking_breaks_ties_by_name() {
    let alerts = vec![
        alert(1, "2025-04-07T08:00:00", Some("zulu"), Some(1)),
        alert(2, "2025-04-07T09:00:00", Some("alpha"), Some(2)),
    ];
    let top = busiest_cameras(&alerts, 5);
    assert_eq!(top[0].0, "alpha");
}

#[test]
fn unnamed_cameras_use_id_label_and_sourceless_alerts_drop() {
    let alerts = vec![
        alert(1, "2025-04-07T08:00:00", None, Some(9)),
        alert(2, "2025-04-07T09:00:00", None, None),
    ];
    let top = busiest_cameras(&alerts, 5);
    assert_eq!(top, vec![("Camera #9".to_owned(), 1)]);
}

// =============================================================
// Polyline scaling
// =============================================================

#[test]
fn polyline_spans_width_and_scales_height() {
    let points = polyline_points(&[0, 2, 4], 100.0, 40.0);
    assert_eq!(points, "0.0,40.0 50.0,20.0 100.0,0.0");
}

#[test]
fn polyline_of_zeroes_stays_on_the_baseline() {
    let points = polyline_points(&[0, 0], 100.0, 40.0);
    assert_eq!(points, "0.0,40.0 100.0,40.0");
}

#[test]
fn polyline_single_point_sits_at_origin_column() {
    let points = polyline_points(&[3], 100.0, 40.0);
    assert_eq!(points, "0.0,0.0");
}
