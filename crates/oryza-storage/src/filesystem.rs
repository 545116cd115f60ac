//! Single-file JSON store.
//!
//! All keys live in one JSON object on disk. Every write serializes the
//! whole object to a temporary file beside the target and renames it into
//! place, so a reader never observes a half-written file.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::traits::KeyValueStore;
use crate::{Error, Result};

/// A [`KeyValueStore`] persisted as a JSON object file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`, creating parent directories as needed.
    ///
    /// A missing file is an empty store. A file that is not a JSON object of
    /// strings is treated as empty as well (with a warning); the next write
    /// replaces it.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }

        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => parse_entries(&path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(Error::io_with_path(e, &path)),
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Opened store file");
        Ok(Self { path, entries })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let json = serde_json::to_string_pretty(entries)?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io_with_path(e, dir))?;
        tmp.write_all(json.as_bytes())
            .map_err(|e| Error::io_with_path(e, tmp.path()))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| Error::io_with_path(e, tmp.path()))?;
        tmp.persist(&self.path)
            .map_err(|e| Error::io_with_path(e.error, &self.path))?;
        Ok(())
    }

    // Entries are only replaced once the file write has succeeded.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<()> {
        self.write_all(&entries)?;
        self.entries = entries;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.commit(next)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

fn parse_entries(path: &Path, content: &str) -> BTreeMap<String, String> {
    if content.trim().is_empty() {
        return BTreeMap::new();
    }
    match serde_json::from_str(content) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Store file is corrupt, starting empty");
            BTreeMap::new()
        }
    }
}
