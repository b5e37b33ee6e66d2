//! The script document and its JSON-facing formats.
//!
//! Two file shapes exist:
//! - the project file: characters + scene label + dialogue sequence;
//! - the character config file: characters only.
//!
//! Neither format is versioned and there is no migration path; a file that
//! fails to parse or is missing a key aborts the load with a diagnostic.

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterRegistry};
use crate::dialogue::DialogueSequence;
use crate::error::{RenError, RenResult};

/// Default scene label for new documents and blank label fields.
pub const DEFAULT_LABEL: &str = "start";

/// The single mutable document the editor manipulates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub characters: CharacterRegistry,
    #[serde(rename = "current_label")]
    pub label: String,
    pub dialogues: DialogueSequence,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty document with the default scene label.
    pub fn new() -> Self {
        Self {
            characters: CharacterRegistry::new(),
            label: DEFAULT_LABEL.to_string(),
            dialogues: DialogueSequence::new(),
        }
    }

    /// Parses a project file.
    pub fn from_json(input: &str) -> RenResult<Self> {
        serde_json::from_str(input).map_err(|err| json_deserialize_error(input, &err))
    }

    /// Serializes the document as a pretty-printed project file.
    pub fn to_json(&self) -> RenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RenError::Serialization {
            message: e.to_string(),
            src: String::new(),
            span: (0, 0).into(),
        })
    }
}

/// Character config file: a registry snapshot without label or dialogues.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterConfig {
    pub characters: Vec<Character>,
}

impl CharacterConfig {
    /// Parses a character config file.
    pub fn from_json(input: &str) -> RenResult<Self> {
        serde_json::from_str(input).map_err(|err| json_deserialize_error(input, &err))
    }

    /// Serializes the config as a pretty-printed file.
    pub fn to_json(&self) -> RenResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RenError::Serialization {
            message: e.to_string(),
            src: String::new(),
            span: (0, 0).into(),
        })
    }
}

/// Maps a serde_json error to a spanned diagnostic over the input text.
#[cold]
#[inline(never)]
fn json_deserialize_error(input: &str, err: &serde_json::Error) -> RenError {
    let offset = byte_offset(input, err.line(), err.column());
    let span_len = usize::from(offset < input.len());
    RenError::Serialization {
        message: err.to_string(),
        src: input.to_string(),
        span: (offset, span_len).into(),
    }
}

/// Converts serde_json's 1-based line/column into a byte offset, clamped to
/// the input length and snapped to a char boundary.
fn byte_offset(input: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0usize;
    for (current, chunk) in input.split_inclusive('\n').enumerate() {
        if current + 1 == line {
            let column_index = column.saturating_sub(1);
            let in_line = chunk
                .char_indices()
                .nth(column_index)
                .map(|(idx, _)| idx)
                .unwrap_or_else(|| chunk.len());
            return (offset + in_line).min(input.len());
        }
        offset += chunk.len();
    }
    input.len()
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests/document_tests.rs"]
mod tests;
