use crate::theme::error::ThemeError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "sensorview";
const THEME_FILE_NAME: &str = "theme.json";

// The fixed key the preference is stored under, kept verbatim from the page
// it replaces so the stored file stays self-describing.
#[derive(Debug, Serialize, Deserialize)]
struct ThemePreference {
    #[serde(rename = "darkMode")]
    dark_mode: bool,
}

/// Persists the single cross-session boolean: is dark mode on.
///
/// Stored as a small JSON file in the platform config directory. Loading is
/// deliberately tolerant: a missing or unreadable preference means light
/// mode, same as a visitor who never touched the switch.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store backed by the platform config directory
    /// (e.g. `~/.config/sensorview/theme.json` on Linux).
    pub fn new() -> Result<Self, ThemeError> {
        let base = dirs::config_dir().ok_or(ThemeError::ConfigDirResolution)?;
        Ok(Self {
            path: base.join(CONFIG_DIR_NAME).join(THEME_FILE_NAME),
        })
    }

    /// Store backed by an explicit file, for tests and embedders with their
    /// own state directory.
    pub fn with_file(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted flag; `false` when absent or malformed.
    pub fn load(&self) -> bool {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return false,
        };
        match serde_json::from_str::<ThemePreference>(&text) {
            Ok(pref) => pref.dark_mode,
            Err(e) => {
                warn!(
                    "Malformed theme preference at {:?}, falling back to light mode: {e}",
                    self.path
                );
                false
            }
        }
    }

    /// Writes the flag, creating the parent directory on first use.
    pub fn save(&self, dark_mode: bool) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ThemeError::ConfigDirCreation(parent.to_path_buf(), e))?;
        }
        let text = serde_json::to_string(&ThemePreference { dark_mode })
            .map_err(|e| ThemeError::Encode(self.path.clone(), e))?;
        std::fs::write(&self.path, text).map_err(|e| ThemeError::Write(self.path.clone(), e))
    }
}
