//! Document model for the Ren'Py dialogue script editor.
//!
//! This crate holds the plain data and pure transformations: the character
//! registry, the ordered dialogue sequence, JSON persistence for project
//! and config files, and the one-way Ren'Py script projection. It has no
//! presentation dependencies; the GUI crate binds forms to these types.

mod character;
mod dialogue;
mod document;
mod error;
mod generate;
mod io;

pub use character::{is_valid_var_name, Character, CharacterRegistry};
pub use dialogue::{DialogueEntry, DialogueSequence};
pub use document::{CharacterConfig, Document, DEFAULT_LABEL};
pub use error::{RenError, RenResult};
pub use generate::{escape_text, generate_script, sanitize_label};
pub use io::{load_config, load_document, save_config, save_document, write_text};
