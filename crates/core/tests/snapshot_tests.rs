use renscript_core::{generate_script, Document};

fn scene() -> Document {
    let mut document = Document::new();
    document.characters.add("m", "Mary").expect("add m");
    document.characters.add("e", "Eileen").expect("add e");
    document.label = "first meeting".to_string();
    document
        .dialogues
        .push_narration("A knock at the door.")
        .expect("narration");
    document
        .dialogues
        .push_line("m", "Who's there?")
        .expect("line");
    document
        .dialogues
        .push_line("e", r#"It's me, "the neighbour"."#)
        .expect("line");
    document
}

#[test]
fn generated_script_snapshot() {
    insta::assert_snapshot!(generate_script(&scene()), @r#"
    define m = Character("Mary")
    define e = Character("Eileen")

    label first_meeting:
        "A knock at the door."
        m "Who's there?"
        e "It's me, \"the neighbour\"."
    "#);
}

#[test]
fn empty_document_is_a_bare_label_block() {
    insta::assert_snapshot!(generate_script(&Document::new()), @"label start:");
}
