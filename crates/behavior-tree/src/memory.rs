//! Typed key/value scratch storage.
//!
//! [`Memory`] backs two things: the node-local execution memory kept in every
//! [`NodeCore`](crate::NodeCore), and the tree-wide shared data map reachable
//! through [`Tick::set_data`](crate::Tick::set_data). Values are stored as
//! `Box<dyn Any>` and read back with a requested type; a read with the wrong
//! type behaves exactly like a missing key.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// Heterogeneous map from text keys to values of any `Send` type.
#[derive(Default)]
pub struct Memory {
    entries: HashMap<String, Box<dyn Any + Send>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set<T: Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), Box::new(value));
    }

    /// Returns the value under `key` if it exists and has type `T`.
    pub fn get<T: Any>(&self, key: &str) -> Option<&T> {
        self.entries.get(key)?.downcast_ref::<T>()
    }

    pub fn get_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.entries.get_mut(key)?.downcast_mut::<T>()
    }

    /// Removes `key`. Returns `true` if something was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Memory").field("keys", &keys).finish()
    }
}
