//! Named text slots on disk, plus a typed state wrapper that mirrors a value into one slot.

pub mod file_storage;
pub mod persisted;


pub use file_storage::{FileStorage, MemoryStorage};
pub use persisted::PersistedState;

use anyhow::Result;

/// Slot name of the watched list.
pub const WATCHED_KEY: &str = "watched";

/// Key/value store of text slots.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}
