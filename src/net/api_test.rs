use super::*;

#[test]
fn stream_url_carries_token_and_cache_buster() {
    assert_eq!(
        stream_url("lobby", "abc", 1700000000000.0),
        "/api/video-cameras/lobby/stream?token=abc&t=1700000000000"
    );
}

#[test]
fn stream_url_rounds_fractional_timestamps() {
    let url = stream_url("dock", "t", 12.75);
    assert!(url.ends_with("&t=13"));
}
