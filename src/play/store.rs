//! Key-value persistence capability owned by the game loop.
//!
//! Values are plain strings; the session decides how to encode them.

use std::collections::HashMap;

use thiserror::Error;

pub mod keys {
    pub const HISTORY: &str = "odd_weight.history";
    pub const MODE: &str = "odd_weight.mode";
    pub const POLICY: &str = "odd_weight.policy";
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("store rejected `{key}`: {reason}")]
pub struct StoreError {
    pub key: String,
    pub reason: String,
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str);
}

/// In-process store. `with_quota` caps the byte size of a single value.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if let Some(quota) = self.quota
            && value.len() > quota
        {
            return Err(StoreError {
                key: key.to_owned(),
                reason: format!("{} bytes exceeds quota of {quota}", value.len()),
            });
        }
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
