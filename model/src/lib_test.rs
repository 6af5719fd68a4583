use super::*;

fn sample_record() -> SupplierRecord {
    SupplierRecord {
        id: Uuid::nil(),
        user_id: Uuid::nil(),
        name: "Acme".into(),
        description: Some("Industrial supplies".into()),
        address: None,
        phone: Some("+1 555 0100".into()),
        contact_name: Some("Wile E.".into()),
        contact_email: None,
    }
}

// =============================================================================
// SupplierRecord serialization
// =============================================================================

#[test]
fn supplier_record_serializes_expected_field_names() {
    let json = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(json["name"], "Acme");
    assert_eq!(json["user_id"], Uuid::nil().to_string());
    assert!(json["address"].is_null());
}

#[test]
fn supplier_record_round_trip() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let restored: SupplierRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.name, record.name);
    assert_eq!(restored.phone, record.phone);
    assert_eq!(restored.contact_email, None);
}

#[test]
fn principal_round_trip() {
    let principal = Principal { id: Uuid::nil(), email: "a@b.example".into(), name: "alice".into() };
    let json = serde_json::to_string(&principal).unwrap();
    let restored: Principal = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.email, "a@b.example");
    assert_eq!(restored.name, "alice");
}

// =============================================================================
// SupplierPatch
// =============================================================================

#[test]
fn patch_default_is_empty() {
    assert!(SupplierPatch::default().is_empty());
}

#[test]
fn patch_with_any_field_is_not_empty() {
    let patch = SupplierPatch { phone: Some("+1 555 0199".into()), ..SupplierPatch::default() };
    assert!(!patch.is_empty());
}

#[test]
fn patch_apply_overrides_set_fields_only() {
    let record = sample_record();
    let patch = SupplierPatch { name: Some("Acme Ltd".into()), ..SupplierPatch::default() };
    let updated = patch.apply(&record);
    assert_eq!(updated.name, "Acme Ltd");
    assert_eq!(updated.description, record.description);
    assert_eq!(updated.phone, record.phone);
}

#[test]
fn patch_apply_fills_previously_null_fields() {
    let record = sample_record();
    let patch = SupplierPatch { address: Some("1 Desert Rd".into()), ..SupplierPatch::default() };
    let updated = patch.apply(&record);
    assert_eq!(updated.address.as_deref(), Some("1 Desert Rd"));
}

#[test]
fn patch_deserializes_with_missing_fields() {
    let patch: SupplierPatch = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
    assert_eq!(patch.name.as_deref(), Some("Acme"));
    assert!(patch.description.is_none());
}
