use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

use super::Storage;

/// A value initialised from a storage slot and written back on every change.
///
/// The slot holds the JSON text of the value. A missing or unparsable slot
/// falls back to the caller's initial value.
pub struct PersistedState<T> {
    storage: Arc<dyn Storage>,
    key: String,
    value: T,
}

impl<T> PersistedState<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load(storage: Arc<dyn Storage>, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let value = match storage.get(&key) {
            Ok(Some(text)) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key = %key, "Ignoring unparsable stored value: {e}");
                    initial
                }
            },
            Ok(None) => initial,
            Err(e) => {
                warn!(key = %key, "Failed to read stored value: {e:#}");
                initial
            }
        };
        Self {
            storage,
            key,
            value,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replaces the value and writes it to the slot.
    ///
    /// The in-memory value is updated even when the write fails.
    pub fn set(&mut self, value: T) -> Result<()> {
        self.value = value;
        self.flush()
    }

    pub fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        let text = serde_json::to_string(&self.value)
            .with_context(|| format!("Failed to serialize slot `{}`", self.key))?;
        self.storage
            .set(&self.key, &text)
            .with_context(|| format!("Failed to persist slot `{}`", self.key))
    }
}
