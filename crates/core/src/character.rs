//! Character registry for the script document.
//!
//! Characters are keyed by `var_name`, the identifier used in generated
//! `define` statements. The registry preserves insertion order because the
//! generated define block follows it.
//!
//! # Contracts
//! - **Invariant**: `var_name` values are unique within a registry.
//! - **Invariant**: every stored `var_name` satisfies [`is_valid_var_name`].

use serde::{Deserialize, Serialize};

use crate::error::{RenError, RenResult};

/// Checks the identifier rule for character variable names: ASCII letters,
/// digits and underscores only, not starting with a digit, non-empty.
pub fn is_valid_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A speaker definition: the script-side identifier plus the name shown to
/// the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub var_name: String,
    pub display_name: String,
}

impl Character {
    /// Builds a character, defaulting an empty display name to the var name.
    ///
    /// Does not validate the identifier; use [`CharacterRegistry::add`] for
    /// validated insertion.
    pub fn new(var_name: impl Into<String>, display_name: impl Into<String>) -> Self {
        let var_name = var_name.into();
        let display_name = display_name.into();
        let display_name = if display_name.trim().is_empty() {
            var_name.clone()
        } else {
            display_name
        };
        Self {
            var_name,
            display_name,
        }
    }
}

/// Ordered, set-like list of characters keyed by `var_name`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterRegistry {
    characters: Vec<Character>,
}

impl CharacterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and adds a character.
    ///
    /// Inputs are trimmed. An empty display name defaults to the var name.
    ///
    /// # Errors
    /// - [`RenError::EmptyField`] if the var name is empty after trimming.
    /// - [`RenError::InvalidIdentifier`] if the var name breaks the pattern.
    /// - [`RenError::DuplicateIdentifier`] if the var name is already taken.
    pub fn add(&mut self, var_name: &str, display_name: &str) -> RenResult<Character> {
        let var_name = var_name.trim();
        let display_name = display_name.trim();
        if var_name.is_empty() {
            return Err(RenError::EmptyField("character variable name"));
        }
        if !is_valid_var_name(var_name) {
            return Err(RenError::InvalidIdentifier(var_name.to_string()));
        }
        if self.contains(var_name) {
            return Err(RenError::DuplicateIdentifier(var_name.to_string()));
        }
        let character = Character::new(var_name, display_name);
        self.characters.push(character.clone());
        Ok(character)
    }

    /// Removes the character at `index`, returning it if the index was valid.
    pub fn remove(&mut self, index: usize) -> Option<Character> {
        if index < self.characters.len() {
            Some(self.characters.remove(index))
        } else {
            None
        }
    }

    /// Replaces the whole registry with an imported list.
    ///
    /// Imported lists are taken as-is; duplicates or invalid identifiers in
    /// the source file are not rejected here. This matches the import
    /// semantics of config files.
    pub fn replace_all(&mut self, characters: Vec<Character>) {
        self.characters = characters;
    }

    /// Returns true if a character with this var name exists.
    pub fn contains(&self, var_name: &str) -> bool {
        self.characters.iter().any(|c| c.var_name == var_name)
    }

    /// Looks up a character by var name.
    pub fn find(&self, var_name: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.var_name == var_name)
    }

    /// Resolves the display name for a speaker, `None` for dangling
    /// references.
    pub fn display_for(&self, var_name: &str) -> Option<&str> {
        self.find(var_name).map(|c| c.display_name.as_str())
    }

    /// Gets a character by position.
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    /// Removes all characters.
    pub fn clear(&mut self) {
        self.characters.clear();
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
#[path = "tests/character_tests.rs"]
mod tests;
