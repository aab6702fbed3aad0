//! Saved calculator state
//!
//! Only history, memory and mode survive a reload. The JSON shape is
//! `{"history": [...], "memory": 0, "advanced_mode": false}` with every key
//! optional.

use crate::error::StateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Persisted subset of engine state
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SavedState {
    /// History lines, oldest first
    pub history: Vec<String>,
    /// Memory register
    pub memory: f64,
    /// Whether the advanced keypad was active
    pub advanced_mode: bool,
}

impl SavedState {
    /// Serializes to compact JSON
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes to indented JSON
    pub fn to_json_pretty(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a JSON payload; absent keys take their defaults
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a state file. A missing file yields the default state.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let state = Self::from_json(&json)?;
                debug!(path = %path.display(), entries = state.history.len(), "loaded state");
                Ok(state)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no state file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(StateError::io(path, err)),
        }
    }

    /// Writes the state file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| StateError::io(parent, err))?;
        }
        let json = self.to_json_pretty()?;
        fs::write(path, json).map_err(|err| StateError::io(path, err))?;
        debug!(path = %path.display(), "saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> SavedState {
        SavedState {
            history: vec!["5 + 3 = 8".into(), "8 × 2 = 16".into()],
            memory: 12.5,
            advanced_mode: true,
        }
    }

    #[test]
    fn test_empty_object_is_default() {
        let state = SavedState::from_json("{}").unwrap();
        assert_eq!(state, SavedState::default());
        assert!(state.history.is_empty());
        assert_eq!(state.memory, 0.0);
        assert!(!state.advanced_mode);
    }

    #[test]
    fn test_integer_memory_accepted() {
        let state = SavedState::from_json(r#"{"memory": 7}"#).unwrap();
        assert_eq!(state.memory, 7.0);
    }

    #[test]
    fn test_json_keys() {
        let json = sample().to_json().unwrap();
        assert!(json.contains("\"history\""));
        assert!(json.contains("\"memory\":12.5"));
        assert!(json.contains("\"advanced_mode\":true"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = SavedState::from_json(r#"{"memory": "lots"}"#).unwrap_err();
        assert!(matches!(err, StateError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let state = SavedState::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(state, SavedState::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("calc.json");
        sample().save(&path).unwrap();
        assert_eq!(SavedState::load(&path).unwrap(), sample());
    }

    #[test]
    fn test_load_unreadable_path_is_io_error() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as a file
        let err = SavedState::load(dir.path()).unwrap_err();
        assert!(matches!(err, StateError::Io { .. }));
    }
}
