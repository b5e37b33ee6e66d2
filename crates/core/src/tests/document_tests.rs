use super::*;
use crate::error::RenError;

fn sample_document() -> Document {
    let mut document = Document::new();
    document
        .characters
        .add("m", "Mary")
        .expect("add character");
    document.label = "chapter one".to_string();
    document.dialogues.push_line("m", "Hi").expect("line");
    document
        .dialogues
        .push_narration("She waves.")
        .expect("narration");
    document
}

#[test]
fn new_document_uses_default_label() {
    let document = Document::new();
    assert_eq!(document.label, DEFAULT_LABEL);
    assert!(document.characters.is_empty());
    assert!(document.dialogues.is_empty());
}

#[test]
fn json_round_trip_is_identity() {
    let document = sample_document();
    let json = document.to_json().expect("serialize");
    let restored = Document::from_json(&json).expect("parse");
    assert_eq!(document, restored);
}

#[test]
fn project_file_uses_the_documented_keys() {
    let json = sample_document().to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("raw json");
    assert!(value.get("characters").is_some());
    assert!(value.get("current_label").is_some());
    assert_eq!(
        value["dialogues"][0],
        serde_json::json!(["character", "m", "Hi"])
    );
}

#[test]
fn missing_keys_abort_the_load() {
    let err = Document::from_json(r#"{"characters": []}"#).expect_err("missing keys");
    assert!(matches!(err, RenError::Serialization { .. }));
    assert!(err.to_string().contains("current_label"));
}

#[test]
fn broken_json_reports_a_spanned_diagnostic() {
    let input = "{\"characters\": [],\n \"current_label\": oops}";
    let err = Document::from_json(input).expect_err("broken json");
    match err {
        RenError::Serialization { src, .. } => assert_eq!(src, input),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_round_trip_is_identity() {
    let config = CharacterConfig {
        characters: vec![Character::new("m", "Mary"), Character::new("e", "")],
    };
    let json = config.to_json().expect("serialize");
    let restored = CharacterConfig::from_json(&json).expect("parse");
    assert_eq!(config, restored);
    assert_eq!(restored.characters[1].display_name, "e");
}

#[test]
fn config_requires_the_characters_key() {
    let err = CharacterConfig::from_json(r#"{"cast": []}"#).expect_err("wrong key");
    assert!(matches!(err, RenError::Serialization { .. }));
}
