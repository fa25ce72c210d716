use std::io::Write;

use settings_group_core::{evaluate_json, load_request, EvaluationRequest, SettingsError};

const PROTECT_REQUEST: &str = r#"{
    "context": {"userCanManageModules": true, "isDevMode": false, "isLinked": true},
    "module": {"module": "protect", "learn_more_button": "https://jetpack.com/support/protect"}
}"#;

#[test]
fn test_evaluate_json_structured_module() {
    let d = evaluate_json(PROTECT_REQUEST).unwrap();
    assert!(d.should_render);
    assert!(d.show_learn_more);
    assert_eq!(d.learn_more_url.as_deref(), Some("https://jetpack.com/support/protect"));
    assert!(!d.is_faded);
}

#[test]
fn test_evaluate_json_bare_id() {
    let d = evaluate_json(r#"{"context": {"userCanManageModules": false}, "module": "widget-visibility"}"#).unwrap();
    assert!(!d.should_render);
}

#[test]
fn test_empty_request_renders_generic_group() {
    let d = evaluate_json("{}").unwrap();
    assert!(d.should_render);
    assert!(!d.show_learn_more);
    assert!(!d.is_faded);
}

#[test]
fn test_dev_mode_probe_from_json() {
    let d = evaluate_json(
        r#"{"context": {"isDevMode": true, "disableInDevMode": true, "isUnavailableInDevMode": true}}"#,
    )
    .unwrap();
    assert!(d.is_faded);
}

#[test]
fn test_support_url_field_name_is_accepted() {
    let d = evaluate_json(
        r#"{"context": {"userCanManageModules": true, "supportUrl": "https://jetpack.com/support/protect"}}"#,
    )
    .unwrap();
    assert!(d.show_learn_more);
    assert_eq!(d.learn_more_url.as_deref(), Some("https://jetpack.com/support/protect"));

    let d = evaluate_json(r#"{"context": {"supportUrl": "https://jetpack.com/support/protect"}}"#).unwrap();
    assert!(d.show_learn_more);
}

#[test]
fn test_malformed_request_is_rejected() {
    let err = EvaluationRequest::from_json(r#"{"context": {"isLinked": "yes"}}"#).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidRequest(_)));
    assert!(evaluate_json("not json").is_err());
}

#[test]
fn test_load_request_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PROTECT_REQUEST.as_bytes()).unwrap();

    let request = load_request(file.path()).unwrap();
    assert_eq!(request.module.as_ref().and_then(|m| m.feature_id()), Some("protect"));
}

#[test]
fn test_load_request_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_request(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_decision_serializes_for_view_layer() {
    let d = evaluate_json(PROTECT_REQUEST).unwrap();
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["shouldRender"], true);
    assert_eq!(json["isFaded"], false);
}
