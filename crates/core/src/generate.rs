//! One-way projection from a document to Ren'Py script text.
//!
//! Generation is deterministic: the output depends only on the document.
//! Defines are emitted in registry order, one per registered character that
//! is actually spoken by a character line; dialogue statements follow in
//! sequence order under a single `label` block.

use crate::dialogue::DialogueEntry;
use crate::document::{Document, DEFAULT_LABEL};

/// Indentation for statements inside the label block.
const INDENT: &str = "    ";

/// Normalizes a scene label: trimmed, spaces become underscores, blank
/// falls back to `start`.
pub fn sanitize_label(label: &str) -> String {
    let label = label.trim().replace(' ', "_");
    if label.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        label
    }
}

/// Escapes double quotes for inclusion in a Ren'Py string literal.
pub fn escape_text(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Renders the document as Ren'Py script text.
pub fn generate_script(document: &Document) -> String {
    let mut lines = Vec::new();

    let spoken: Vec<&str> = document
        .dialogues
        .iter()
        .filter_map(DialogueEntry::speaker)
        .collect();
    let mut defined = false;
    for character in document.characters.iter() {
        if spoken.iter().any(|s| *s == character.var_name) {
            lines.push(format!(
                "define {} = Character(\"{}\")",
                character.var_name,
                escape_text(&character.display_name)
            ));
            defined = true;
        }
    }
    if defined {
        lines.push(String::new());
    }

    lines.push(format!("label {}:", sanitize_label(&document.label)));
    for entry in document.dialogues.iter() {
        match entry {
            DialogueEntry::Line { speaker, text } => {
                lines.push(format!("{INDENT}{speaker} \"{}\"", escape_text(text)));
            }
            DialogueEntry::Narration { text } => {
                lines.push(format!("{INDENT}\"{}\"", escape_text(text)));
            }
        }
    }

    lines.join("\n")
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests/generate_tests.rs"]
mod tests;
