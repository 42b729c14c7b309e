//! Tree-wide shared data store.
//!
//! A [`Blackboard`] lives as long as its [`BehaviorTree`](crate::BehaviorTree)
//! and is the sanctioned way for nodes to exchange data. It has two
//! namespaces:
//!
//! - a **global** namespace keyed by text only
//! - **scoped** namespaces keyed by a category type plus text, so two systems
//!   can use the same key text without colliding
//!
//! Writes are last-write-wins. Reads are type-checked: asking for a value with
//! the wrong type is reported as "not found".
//!
//! # Example
//!
//! ```
//! use behavior_tree::Blackboard;
//!
//! struct Hunting;
//! struct Wandering;
//!
//! let mut bb = Blackboard::new();
//! bb.set_value_for::<Hunting, _>("target", 7u32);
//! bb.set_value_for::<Wandering, _>("target", 2u32);
//!
//! assert_eq!(bb.try_get_value_for::<Hunting, u32>("target"), Some(&7));
//! assert_eq!(bb.try_get_value_for::<Wandering, u32>("target"), Some(&2));
//! assert_eq!(bb.try_get_value::<u32>("target"), None);
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

type Slot = Box<dyn Any + Send>;

/// Diagnostic returned by [`Blackboard::require`] and [`Blackboard::require_for`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlackboardError {
    #[error("blackboard key `{key}` not found")]
    Missing { key: String },

    #[error("blackboard key `{key}` does not hold a `{expected}`")]
    TypeMismatch { key: String, expected: &'static str },
}

/// Keyed store shared by every node of one behavior tree.
#[derive(Default)]
pub struct Blackboard {
    global: HashMap<String, Slot>,
    scoped: HashMap<TypeId, Scope>,
}

struct Scope {
    category: &'static str,
    entries: HashMap<String, Slot>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Global namespace
    // ------------------------------------------------------------------------

    /// Stores `value` under `key` in the global namespace.
    pub fn set_value<T: Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.global.insert(key.into(), Box::new(value));
    }

    /// Returns the global value under `key` if present and of type `T`.
    pub fn try_get_value<T: Any>(&self, key: &str) -> Option<&T> {
        self.global.get(key)?.downcast_ref::<T>()
    }

    pub fn try_get_value_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.global.get_mut(key)?.downcast_mut::<T>()
    }

    /// Like [`try_get_value`](Self::try_get_value) but explains why a read failed.
    pub fn require<T: Any>(&self, key: &str) -> Result<&T, BlackboardError> {
        lookup(&self.global, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.global.contains_key(key)
    }

    /// Removes a global key. Returns `true` if something was removed.
    pub fn remove_value(&mut self, key: &str) -> bool {
        self.global.remove(key).is_some()
    }

    // ------------------------------------------------------------------------
    // Category-scoped namespaces
    // ------------------------------------------------------------------------

    /// Stores `value` under `key` in the namespace owned by category `K`.
    pub fn set_value_for<K: 'static, T: Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.scoped
            .entry(TypeId::of::<K>())
            .or_insert_with(|| Scope {
                category: type_name::<K>(),
                entries: HashMap::new(),
            })
            .entries
            .insert(key.into(), Box::new(value));
    }

    /// Returns the value under `key` in category `K` if present and of type `T`.
    pub fn try_get_value_for<K: 'static, T: Any>(&self, key: &str) -> Option<&T> {
        self.scoped
            .get(&TypeId::of::<K>())?
            .entries
            .get(key)?
            .downcast_ref::<T>()
    }

    pub fn try_get_value_for_mut<K: 'static, T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.scoped
            .get_mut(&TypeId::of::<K>())?
            .entries
            .get_mut(key)?
            .downcast_mut::<T>()
    }

    pub fn require_for<K: 'static, T: Any>(&self, key: &str) -> Result<&T, BlackboardError> {
        match self.scoped.get(&TypeId::of::<K>()) {
            Some(scope) => lookup(&scope.entries, key),
            None => Err(BlackboardError::Missing { key: key.to_owned() }),
        }
    }

    pub fn contains_key_for<K: 'static>(&self, key: &str) -> bool {
        self.scoped
            .get(&TypeId::of::<K>())
            .is_some_and(|scope| scope.entries.contains_key(key))
    }

    pub fn remove_value_for<K: 'static>(&mut self, key: &str) -> bool {
        self.scoped
            .get_mut(&TypeId::of::<K>())
            .is_some_and(|scope| scope.entries.remove(key).is_some())
    }

    // ------------------------------------------------------------------------
    // Whole-board operations
    // ------------------------------------------------------------------------

    /// Wipes both the global and every scoped namespace.
    pub fn clear(&mut self) {
        self.global.clear();
        self.scoped.clear();
    }

    /// Total number of entries across all namespaces.
    pub fn len(&self) -> usize {
        self.global.len()
            + self
                .scoped
                .values()
                .map(|scope| scope.entries.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lookup<'a, T: Any>(map: &'a HashMap<String, Slot>, key: &str) -> Result<&'a T, BlackboardError> {
    let slot = map.get(key).ok_or_else(|| BlackboardError::Missing {
        key: key.to_owned(),
    })?;
    slot.downcast_ref::<T>()
        .ok_or_else(|| BlackboardError::TypeMismatch {
            key: key.to_owned(),
            expected: type_name::<T>(),
        })
}

impl fmt::Debug for Blackboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut global: Vec<&str> = self.global.keys().map(String::as_str).collect();
        global.sort_unstable();

        let mut scoped: Vec<(&str, usize)> = self
            .scoped
            .values()
            .map(|scope| (scope.category, scope.entries.len()))
            .collect();
        scoped.sort_unstable();

        f.debug_struct("Blackboard")
            .field("global", &global)
            .field("scoped", &scoped)
            .finish()
    }
}
