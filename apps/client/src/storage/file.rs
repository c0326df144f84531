//! File-backed token storage.
//!
//! The persisted analog of the browser's local storage: a small JSON object
//! on disk. Reads re-load the file on every call so queries always see the
//! latest persisted state; a missing, unreadable, or corrupt file reads as
//! "no value" with one warning, never as an error.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::storage::TokenStore;

/// `TokenStore` persisted as a JSON map at a fixed path.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Option<HashMap<String, String>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read token storage");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(values) => Some(values),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "token storage is not valid JSON");
                None
            }
        }
    }

    fn save(&self, values: &HashMap<String, String>) -> Result<(), AppError> {
        let json = serde_json::to_vec(values)
            .map_err(|e| AppError::storage(format!("failed to serialize token storage: {e}")))?;
        fs::write(&self.path, json).map_err(|e| {
            AppError::storage(format!(
                "failed to write token storage at {}: {e}",
                self.path.display()
            ))
        })
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.load()?.remove(key).filter(|v| !v.is_empty())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.load().unwrap_or_default();
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn clear(&self, key: &str) -> Result<(), AppError> {
        let mut values = self.load().unwrap_or_default();
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}
