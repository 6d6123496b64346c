//! TOML-file [`KeyValueStore`] used where no native registry exists.
//!
//! The document maps each store path to a table of integer values:
//!
//! ```toml
//! ["Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize"]
//! AppsUseLightTheme = 1
//! SystemUsesLightTheme = 1
//! ```
//!
//! A missing or unparsable file reads as empty. Writes rewrite the whole
//! document and preserve unrelated tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::PersistenceError;

use super::KeyValueStore;

type Document = BTreeMap<String, BTreeMap<String, toml::Value>>;

/// Store persisted as a single TOML file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Document, PersistenceError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(err) => {
                return Err(PersistenceError::io(
                    format!("read {}", self.path.display()),
                    err,
                ))
            }
        };
        match toml::from_str(&text) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                warn!(path = %self.path.display(), "ignoring unparsable preference state: {err}");
                Ok(Document::new())
            }
        }
    }
}

impl KeyValueStore for FileStore {
    fn read_int(&self, path: &str, key: &str, default: u32) -> Result<u32, PersistenceError> {
        let doc = self.load()?;
        let value = doc
            .get(path)
            .and_then(|table| table.get(key))
            .and_then(toml::Value::as_integer)
            .and_then(|raw| u32::try_from(raw).ok());
        Ok(value.unwrap_or(default))
    }

    fn write_int(&self, path: &str, key: &str, value: u32) -> Result<(), PersistenceError> {
        let mut doc = self.load()?;
        doc.entry(path.to_string())
            .or_default()
            .insert(key.to_string(), toml::Value::Integer(i64::from(value)));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                PersistenceError::io(format!("create {}", parent.display()), err)
            })?;
        }
        let text = toml::to_string(&doc)?;
        std::fs::write(&self.path, text)
            .map_err(|err| PersistenceError::io(format!("write {}", self.path.display()), err))
    }
}
