use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// Key-value store backed by a directory, one `<key>.json` file per key (native only).
///
/// Writes go to a temporary sibling file first and are renamed into place,
/// so a crash mid-write never leaves a truncated cart behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) the storage directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| {
            CoreError::PersistenceWrite(format!(
                "Failed to create storage directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    /// Directory holding the per-key files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File path for a key. Bytes outside `[A-Za-z0-9._-]` are percent-encoded
    /// so keys like `@wearles_cart_v1` map to distinct, portable file names.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len() + 5);
        for b in key.bytes() {
            if b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-') {
                name.push(b as char);
            } else {
                name.push_str(&format!("%{b:02X}"));
            }
        }
        name.push_str(".json");
        self.dir.join(name)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::PersistenceRead(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value).map_err(|e| {
            CoreError::PersistenceWrite(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            // Best effort: the rename error is the one worth reporting.
            let _ = std::fs::remove_file(&tmp);
            return Err(CoreError::PersistenceWrite(format!(
                "Failed to replace {}: {e}",
                path.display()
            )));
        }
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), CoreError> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::PersistenceWrite(format!(
                "Failed to remove {}: {e}",
                path.display()
            ))),
        }
    }
}
