//! File round-trips for project and character config files.
//!
//! Writes create missing parent directories; reads propagate I/O and parse
//! failures without touching any in-memory state.

use std::fs;
use std::path::Path;

use crate::document::{CharacterConfig, Document};
use crate::error::RenResult;

/// Saves the document as a pretty-printed JSON project file.
pub fn save_document(path: &Path, document: &Document) -> RenResult<()> {
    write_text(path, &document.to_json()?)
}

/// Loads a project file.
pub fn load_document(path: &Path) -> RenResult<Document> {
    let raw = fs::read_to_string(path)?;
    Document::from_json(&raw)
}

/// Saves a character config file.
pub fn save_config(path: &Path, config: &CharacterConfig) -> RenResult<()> {
    write_text(path, &config.to_json()?)
}

/// Loads a character config file.
pub fn load_config(path: &Path) -> RenResult<CharacterConfig> {
    let raw = fs::read_to_string(path)?;
    CharacterConfig::from_json(&raw)
}

/// Writes a generated script (or any text artifact) to disk.
pub fn write_text(path: &Path, payload: &str) -> RenResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, payload)?;
    Ok(())
}
