use super::*;
use serde_json::json;

#[test]
fn summary_field_wins() {
    let payload = json!({ "summary": "Video is about cats.", "text": "ignored" });
    assert_eq!(coerce_summary(&payload), "Video is about cats.");
}

#[test]
fn text_used_when_summary_missing() {
    let payload = json!({ "text": "fallback text" });
    assert_eq!(coerce_summary(&payload), "fallback text");
}

#[test]
fn empty_summary_falls_through_to_text() {
    let payload = json!({ "summary": "", "text": "fallback text" });
    assert_eq!(coerce_summary(&payload), "fallback text");
}

#[test]
fn bare_string_payload_is_shown_raw() {
    assert_eq!(coerce_summary(&json!("raw")), "raw");
}

#[test]
fn object_without_known_keys_is_rendered_as_json() {
    let payload = json!({ "output": "x" });
    assert_eq!(coerce_summary(&payload), r#"{"output":"x"}"#);
}

#[test]
fn non_string_summary_is_rendered_as_json() {
    let payload = json!({ "summary": ["a", "b"] });
    assert_eq!(coerce_summary(&payload), r#"["a","b"]"#);
}

#[test]
fn truthiness_matches_js() {
    assert!(!is_truthy(&json!(null)));
    assert!(!is_truthy(&json!(false)));
    assert!(!is_truthy(&json!(0)));
    assert!(!is_truthy(&json!("")));
    assert!(is_truthy(&json!([])));
    assert!(is_truthy(&json!({})));
    assert!(is_truthy(&json!(1.5)));
}
