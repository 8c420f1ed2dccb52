use super::*;

fn alert(id: i64, status: &str) -> Alert {
    Alert {
        id,
        status: status.to_owned(),
        message: None,
        created_at: None,
        camera_id: None,
        camera_name: None,
        camera_location: None,
        zone_id: None,
        zone_name: None,
    }
}

#[test]
fn all_filter_keeps_everything() {
    let alerts = vec![alert(1, "active"), alert(2, "resolved")];
    assert_eq!(filter_alerts(&alerts, StatusFilter::All).len(), 2);
}

#[test]
fn status_filters_keep_only_their_status() {
    let alerts = vec![alert(1, "active"), alert(2, "resolved"), alert(3, "active")];
    let active = filter_alerts(&alerts, StatusFilter::Active);
    assert_eq!(active.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    let resolved = filter_alerts(&alerts, StatusFilter::Resolved);
    assert_eq!(resolved.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn counts_split_by_status() {
    let alerts = vec![alert(1, "active"), alert(2, "resolved"), alert(3, "active")];
    assert_eq!(status_counts(&alerts), (3, 2, 1));
}

#[test]
fn location_label_prefers_camera_and_zone() {
    let mut a = alert(1, "active");
    a.camera_name = Some("lobby".to_owned());
    a.zone_name = Some("Zone 2".to_owned());
    assert_eq!(location_label(&a), "lobby / Zone 2");
}

#[test]
fn location_label_uses_camera_location_without_zone() {
    let mut a = alert(1, "active");
    a.camera_name = Some("lobby".to_owned());
    a.camera_location = Some("East wing".to_owned());
    assert_eq!(location_label(&a), "lobby (East wing)");
}

#[test]
fn location_label_falls_back_to_camera_id_then_unknown() {
    let mut a = alert(1, "active");
    a.camera_id = Some(4);
    assert_eq!(location_label(&a), "Camera #4");
    assert_eq!(location_label(&alert(2, "active")), "Unknown source");
}
