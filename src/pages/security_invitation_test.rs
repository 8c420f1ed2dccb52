use super::*;

#[test]
fn join_link_embeds_origin_and_code() {
    assert_eq!(
        join_link("https://argus.example.com", "abc-123"),
        "https://argus.example.com/security/register?code=abc-123"
    );
}

#[test]
fn join_link_with_empty_origin_is_site_relative() {
    assert_eq!(join_link("", "abc"), "/security/register?code=abc");
}
