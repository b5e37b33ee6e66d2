use tempfile::tempdir;

use renscript_core::{
    load_config, load_document, save_config, save_document, Character, CharacterConfig, Document,
    RenError,
};

fn sample_document() -> Document {
    let mut document = Document::new();
    document.characters.add("m", "Mary").expect("add m");
    document.characters.add("e", "Eileen").expect("add e");
    document.label = "prologue".to_string();
    document.dialogues.push_line("m", "Hi").expect("line");
    document
        .dialogues
        .push_narration("The door opens.")
        .expect("narration");
    document.dialogues.push_line("e", "Come in.").expect("line");
    document
}

#[test]
fn document_survives_a_file_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("project.json");
    let document = sample_document();

    save_document(&path, &document).expect("save");
    let restored = load_document(&path).expect("load");

    assert_eq!(document, restored);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested/deeper/project.json");

    save_document(&path, &sample_document()).expect("save into fresh dirs");
    assert!(path.exists());
}

#[test]
fn config_survives_a_file_round_trip() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cast.json");
    let config = CharacterConfig {
        characters: vec![Character::new("m", "Mary"), Character::new("e", "Eileen")],
    };

    save_config(&path, &config).expect("save");
    let restored = load_config(&path).expect("load");

    assert_eq!(config, restored);
}

#[test]
fn loading_a_missing_file_is_an_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = load_document(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, RenError::Io(_)));
}

#[test]
fn loading_garbage_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").expect("write");

    let err = load_document(&path).expect_err("garbage");
    assert!(matches!(err, RenError::Serialization { .. }));
}
