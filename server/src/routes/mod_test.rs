use super::*;

// =============================================================================
// escape_json_for_script
// =============================================================================

#[test]
fn plain_json_is_unchanged() {
    assert_eq!(escape_json_for_script(r#"{"name":"Acme"}"#), r#"{"name":"Acme"}"#);
}

#[test]
fn closing_script_tag_is_neutralized() {
    let json = r#"{"description":"</script><script>alert(1)</script>"}"#;
    let escaped = escape_json_for_script(json);
    assert!(!escaped.contains("</script>"));
    assert!(escaped.contains("<\\/script>"));
}

#[test]
fn all_closing_sequences_are_escaped() {
    assert_eq!(escape_json_for_script("</a></b>"), "<\\/a><\\/b>");
}

// =============================================================================
// handlers
// =============================================================================

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_into_the_guarded_settings_chain() {
    let response = root().await.into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response.headers().get(axum::http::header::LOCATION).unwrap();
    assert_eq!(location, "/settings/business");
}
