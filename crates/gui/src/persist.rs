use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Small editor preferences persisted between sessions.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct UserPreferences {
    pub ui_scale: f32,
    pub last_dir: Option<PathBuf>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            ui_scale: 1.0,
            last_dir: None,
        }
    }
}

impl UserPreferences {
    pub fn load_from(path: &Path) -> std::io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let parsed = serde_json::from_str(&raw)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err.to_string()))?;
        Ok(parsed)
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(self)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
        fs::write(path, payload)
    }

    /// Remembers the directory of the last file the user touched.
    pub fn remember_dir(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_dir = Some(parent.to_path_buf());
        }
    }
}
