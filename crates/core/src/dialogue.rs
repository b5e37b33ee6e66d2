//! Ordered dialogue entries and the splice operations the editor needs.
//!
//! The wire format for an entry is a 3-element array
//! `[type, var_name_or_empty, text]` where `type` is `"character"` or
//! `"narration"`. Narration carries an empty string in the middle slot.

use serde::{Deserialize, Serialize};

use crate::error::{RenError, RenResult};

/// One line of the script: attributed speech or narration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WireEntry", into = "WireEntry")]
pub enum DialogueEntry {
    /// Speech attributed to a character, referenced by `var_name`.
    Line { speaker: String, text: String },
    /// Unattributed narration text.
    Narration { text: String },
}

impl DialogueEntry {
    /// The text payload of the entry.
    pub fn text(&self) -> &str {
        match self {
            DialogueEntry::Line { text, .. } | DialogueEntry::Narration { text } => text,
        }
    }

    /// The speaker var name, `None` for narration.
    pub fn speaker(&self) -> Option<&str> {
        match self {
            DialogueEntry::Line { speaker, .. } => Some(speaker),
            DialogueEntry::Narration { .. } => None,
        }
    }
}

/// On-disk shape of a dialogue entry.
type WireEntry = (String, String, String);

impl From<DialogueEntry> for WireEntry {
    fn from(entry: DialogueEntry) -> Self {
        match entry {
            DialogueEntry::Line { speaker, text } => ("character".to_string(), speaker, text),
            DialogueEntry::Narration { text } => ("narration".to_string(), String::new(), text),
        }
    }
}

impl TryFrom<WireEntry> for DialogueEntry {
    type Error = String;

    fn try_from((kind, speaker, text): WireEntry) -> Result<Self, Self::Error> {
        match kind.as_str() {
            "character" => Ok(DialogueEntry::Line { speaker, text }),
            "narration" => Ok(DialogueEntry::Narration { text }),
            other => Err(format!("unknown dialogue entry type '{other}'")),
        }
    }
}

/// Ordered, reorderable sequence of dialogue entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogueSequence {
    entries: Vec<DialogueEntry>,
}

impl DialogueSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a character line.
    ///
    /// # Errors
    /// [`RenError::EmptyField`] if the text is blank after trimming.
    pub fn push_line(&mut self, speaker: &str, text: &str) -> RenResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RenError::EmptyField("dialogue text"));
        }
        self.entries.push(DialogueEntry::Line {
            speaker: speaker.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    /// Appends a narration line.
    ///
    /// # Errors
    /// [`RenError::EmptyField`] if the text is blank after trimming.
    pub fn push_narration(&mut self, text: &str) -> RenResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RenError::EmptyField("narration text"));
        }
        self.entries.push(DialogueEntry::Narration {
            text: text.to_string(),
        });
        Ok(())
    }

    /// Swaps the entry at `index` with its predecessor.
    ///
    /// Returns false (no state change) at the top boundary or for an
    /// invalid index.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.entries.len() {
            return false;
        }
        self.entries.swap(index, index - 1);
        true
    }

    /// Swaps the entry at `index` with its successor.
    ///
    /// Returns false (no state change) at the bottom boundary or for an
    /// invalid index.
    pub fn move_down(&mut self, index: usize) -> bool {
        if self.entries.is_empty() || index + 1 >= self.entries.len() {
            return false;
        }
        self.entries.swap(index, index + 1);
        true
    }

    /// Removes the entry at `index`, returning it if the index was valid.
    pub fn remove(&mut self, index: usize) -> Option<DialogueEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    /// Moves the entry at `from` so that it ends up at `to`.
    ///
    /// Implemented as remove-then-insert, the splice a drag-and-drop gesture
    /// maps to. Returns false (no state change) when `from == to` or either
    /// index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.entries.len() || to >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Gets an entry by position.
    pub fn get(&self, index: usize) -> Option<&DialogueEntry> {
        self.entries.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = &DialogueEntry> {
        self.entries.iter()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests/dialogue_tests.rs"]
mod tests;
