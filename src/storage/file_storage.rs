use anyhow::{Context, Result, anyhow};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

use super::Storage;

type Slots = BTreeMap<String, String>;

/// Stores every slot in one JSON object on disk: `{ "<key>": "<text>" }`.
///
/// Writes go to a sibling temp file which is then renamed over the target.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", self.path.display())),
        }
    }

    fn parse_slots(&self, raw: &str) -> Result<Slots> {
        serde_json::from_str(raw)
            .with_context(|| format!("Storage file {} is not a JSON object", self.path.display()))
    }

    fn read_slots(&self) -> Result<Slots> {
        match self.read_raw()? {
            Some(raw) => self.parse_slots(&raw),
            None => Ok(Slots::new()),
        }
    }

    /// Like [`Self::read_slots`], but moves an unparsable file aside to
    /// `<name>.json.bak` and starts over from an empty object.
    fn read_slots_for_write(&self) -> Result<Slots> {
        let Some(raw) = self.read_raw()? else {
            return Ok(Slots::new());
        };
        match self.parse_slots(&raw) {
            Ok(slots) => Ok(slots),
            Err(e) => {
                let backup = self.backup_path();
                warn!(backup = %backup.display(), "{e:#}. Moving it aside.");
                fs::rename(&self.path, &backup)
                    .with_context(|| format!("Failed to move {} aside", self.path.display()))?;
                Ok(Slots::new())
            }
        }
    }

    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    fn write_slots(&self, slots: &Slots) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(slots)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).with_context(|| format!("Failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))
    }

    fn modify<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Slots),
    {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| anyhow!("Storage lock poisoned: {e}"))?;
        let mut slots = self.read_slots_for_write()?;
        f(&mut slots);
        self.write_slots(&slots)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_slots()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|slots| {
            slots.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.modify(|slots| {
            slots.remove(key);
        })
    }
}

/// In-process storage; nothing survives the process.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<Slots>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|e| anyhow!("Storage lock poisoned: {e}"))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| anyhow!("Storage lock poisoned: {e}"))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|e| anyhow!("Storage lock poisoned: {e}"))?;
        slots.remove(key);
        Ok(())
    }
}
