use super::*;

fn entry(name: &str, value: &str) -> (Option<String>, Option<String>) {
    (Some(name.to_owned()), Some(value.to_owned()))
}

#[test]
fn text_fields_become_the_body() {
    let payload = payload_from_entries(vec![entry("name", "Ada"), entry("email", "ada@example.com")]);
    assert_eq!(payload.get("name"), Some("Ada"));
    assert_eq!(payload.get("email"), Some("ada@example.com"));
}

#[test]
fn file_entries_are_skipped() {
    let payload = payload_from_entries(vec![entry("name", "Ada"), (Some("cv".to_owned()), None)]);
    assert_eq!(payload.get("cv"), None);
    assert_eq!(payload.to_json().unwrap(), r#"{"name":"Ada"}"#);
}

#[test]
fn repeated_name_keeps_last() {
    let payload = payload_from_entries(vec![entry("topic", "a"), entry("topic", "b")]);
    assert_eq!(payload.get("topic"), Some("b"));
}
