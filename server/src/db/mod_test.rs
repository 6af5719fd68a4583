use super::*;

// =============================================================================
// pool-size override parsing
// =============================================================================

#[test]
fn max_connections_defaults_when_unset() {
    assert_eq!(max_connections_from(None), DEFAULT_MAX_CONNECTIONS);
}

#[test]
fn max_connections_parses_override() {
    assert_eq!(max_connections_from(Some("12".into())), 12);
}

#[test]
fn max_connections_trims_whitespace() {
    assert_eq!(max_connections_from(Some(" 8 ".into())), 8);
}

#[test]
fn max_connections_ignores_garbage() {
    assert_eq!(max_connections_from(Some("lots".into())), DEFAULT_MAX_CONNECTIONS);
}

// =============================================================================
// settings errors
// =============================================================================

#[test]
fn missing_url_error_names_the_variable() {
    assert_eq!(DbConfigError::MissingUrl.to_string(), "DATABASE_URL is not set");
}
