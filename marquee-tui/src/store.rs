//! Preference store selection for the binary

use std::path::Path;

use marquee_core::StoreError;
use marquee_core::prefs::{FileStore, MemoryStore, PreferenceStore};

#[derive(Debug)]
pub enum Prefs {
    File(FileStore),
    Memory(MemoryStore),
}

impl Prefs {
    /// `path` when given; otherwise the platform default file, or memory when
    /// `persist` is off or no preference directory exists.
    pub fn open(path: Option<&Path>, persist: bool) -> Result<Self, StoreError> {
        if let Some(path) = path {
            return Ok(Self::File(FileStore::open(path)?));
        }
        if !persist {
            return Ok(Self::Memory(MemoryStore::new()));
        }
        match FileStore::default_path() {
            Ok(path) => Ok(Self::File(FileStore::open(path)?)),
            Err(err) => {
                log::warn!("Preferences will not persist: {err}");
                Ok(Self::Memory(MemoryStore::new()))
            }
        }
    }
}

impl PreferenceStore for Prefs {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}
