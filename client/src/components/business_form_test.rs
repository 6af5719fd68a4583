use super::*;

// =============================================================================
// normalized_field
// =============================================================================

#[test]
fn blank_values_become_none() {
    assert_eq!(normalized_field(""), None);
    assert_eq!(normalized_field("   "), None);
}

#[test]
fn values_are_trimmed() {
    assert_eq!(normalized_field("  Acme  "), Some("Acme".to_owned()));
}

// =============================================================================
// business_patch
// =============================================================================

#[test]
fn patch_carries_only_business_fields() {
    let patch = business_patch("Acme", "Supplies", "1 Desert Rd", "+1 555 0100");
    assert_eq!(patch.name.as_deref(), Some("Acme"));
    assert_eq!(patch.description.as_deref(), Some("Supplies"));
    assert_eq!(patch.address.as_deref(), Some("1 Desert Rd"));
    assert_eq!(patch.phone.as_deref(), Some("+1 555 0100"));
    assert!(patch.contact_name.is_none());
    assert!(patch.contact_email.is_none());
}

#[test]
fn blank_optional_fields_are_omitted() {
    let patch = business_patch("Acme", "", " ", "");
    assert_eq!(patch.name.as_deref(), Some("Acme"));
    assert!(patch.description.is_none());
    assert!(patch.address.is_none());
    assert!(patch.phone.is_none());
}
