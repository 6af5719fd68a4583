use super::*;

#[test]
fn missing_fields_message_is_stable() {
    assert_eq!(missing_fields_message(), "Enter both email and name.");
}
