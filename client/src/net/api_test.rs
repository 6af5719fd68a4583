use super::*;

#[test]
fn save_failed_message_includes_status() {
    assert_eq!(save_failed_message(500), "save failed: 500");
}

#[test]
fn sign_in_failed_message_includes_status() {
    assert_eq!(sign_in_failed_message(404), "sign in failed: 404");
}

#[tokio::test]
async fn update_supplier_is_stubbed_off_the_browser() {
    // Without the hydrate feature the call must fail cleanly, not panic.
    let result = update_supplier(&SupplierPatch::default()).await;
    assert!(result.is_err());
}
