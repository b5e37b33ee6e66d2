use super::*;

#[test]
fn sanitize_label_replaces_spaces_and_defaults() {
    assert_eq!(sanitize_label("chapter one"), "chapter_one");
    assert_eq!(sanitize_label("  intro  "), "intro");
    assert_eq!(sanitize_label(""), "start");
    assert_eq!(sanitize_label("   "), "start");
}

#[test]
fn escape_text_escapes_double_quotes_only() {
    assert_eq!(escape_text(r#"say "hi""#), r#"say \"hi\""#);
    assert_eq!(escape_text("plain"), "plain");
}

#[test]
fn single_line_script_matches_reference_output() {
    let mut document = Document::new();
    document.characters.add("m", "Mary").expect("add");
    document.dialogues.push_line("m", "Hi").expect("line");

    let script = generate_script(&document);
    let lines: Vec<&str> = script.lines().collect();
    assert_eq!(
        lines,
        ["define m = Character(\"Mary\")", "", "label start:", "    m \"Hi\""]
    );
}

#[test]
fn narration_only_script_has_no_defines() {
    let mut document = Document::new();
    document.characters.add("m", "Mary").expect("add");
    document
        .dialogues
        .push_narration("A quiet morning.")
        .expect("narration");

    let script = generate_script(&document);
    assert_eq!(script, "label start:\n    \"A quiet morning.\"");
}

#[test]
fn defines_cover_only_spoken_characters_in_registry_order() {
    let mut document = Document::new();
    document.characters.add("a", "Alice").expect("add");
    document.characters.add("b", "Bob").expect("add");
    document.characters.add("c", "Cleo").expect("add");
    document.dialogues.push_line("c", "last").expect("line");
    document.dialogues.push_line("a", "first").expect("line");

    let script = generate_script(&document);
    let defines: Vec<&str> = script
        .lines()
        .filter(|l| l.starts_with("define"))
        .collect();
    assert_eq!(
        defines,
        [
            "define a = Character(\"Alice\")",
            "define c = Character(\"Cleo\")"
        ]
    );
    assert!(!script.contains("Bob"));
}

#[test]
fn dangling_speaker_still_produces_a_dialogue_line() {
    let mut document = Document::new();
    document.dialogues.push_line("ghost", "boo").expect("line");

    let script = generate_script(&document);
    assert_eq!(script, "label start:\n    ghost \"boo\"");
}

#[test]
fn label_field_is_sanitized_in_output() {
    let mut document = Document::new();
    document.label = "  chapter one ".to_string();
    document.dialogues.push_narration("x").expect("narration");

    let script = generate_script(&document);
    assert!(script.starts_with("label chapter_one:"));
}

#[test]
fn quotes_in_text_are_escaped() {
    let mut document = Document::new();
    document.characters.add("m", "Mary").expect("add");
    document
        .dialogues
        .push_line("m", r#"I said "hello" twice"#)
        .expect("line");

    let script = generate_script(&document);
    assert!(script.contains(r#"    m "I said \"hello\" twice""#));
}
