//! Session storage backed by a small JSON file per backend origin.
//!
//! File location: `<dir>/session-<host>_<port>.json`, holding a flat object
//! of string keys to string values.

use crate::{ClientError, ClientResult, SessionStorage};

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Storage for `origin` (e.g. `http://localhost:8000`) inside `dir`.
    pub fn for_origin(dir: &Path, origin: &str) -> Self {
        Self {
            path: dir.join(format!("session-{}.json", origin_slug(origin))),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> ClientResult<BTreeMap<String, String>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(ClientError::storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        serde_json::from_str(&contents).map_err(|e| {
            ClientError::storage(format!(
                "Session file {} is corrupt: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> ClientResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir).map_err(|e| {
                ClientError::storage(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, content).map_err(|e| {
            ClientError::storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!("Wrote session file {}", self.path.display());
        Ok(())
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        // A corrupt file is replaced rather than blocking new writes
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&self, key: &str) -> ClientResult<()> {
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(_) => BTreeMap::new(),
        };
        if map.remove(key).is_none() && !self.path.exists() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

/// `http://localhost:8000` -> `localhost_8000`
fn origin_slug(origin: &str) -> String {
    let without_scheme = origin.split_once("://").map_or(origin, |(_, rest)| rest);
    without_scheme
        .trim_end_matches('/')
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' { c } else { '_' })
        .collect()
}
