use crate::error::{FfResult, FrameForgeError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable string storage owned by the host (browser local storage, a
/// settings file, ...). The stores only ever hand it serialized snapshots.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> FfResult<Option<String>>;
    fn set(&mut self, key: &str, value: String) -> FfResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: BTreeMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> FfResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> FfResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// A single JSON object on disk mapping keys to string values. A missing
/// file reads as empty; every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileKv {
    path: PathBuf,
}

impl JsonFileKv {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_all(&self) -> FfResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            FrameForgeError::Persistence(format!(
                "Corrupt store '{}': {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KeyValueStore for JsonFileKv {
    fn get(&self, key: &str) -> FfResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> FfResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        let json = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
