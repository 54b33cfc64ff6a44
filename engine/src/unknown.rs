//! Record-wide storage for document keys the schema does not define.

use serde_json::{Map, Value as Json};

/// Unrecognized keys and their raw values, in document order.
///
/// Owned by its record. Entries whose key the record's schema defines are
/// ignored on encode, so a caller writing one here cannot shadow a property.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownBag {
    entries: Map<String, Json>,
}

impl UnknownBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raw` under `key`, returning any value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, raw: Json) -> Option<Json> {
        self.entries.insert(key.into(), raw)
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.entries.get(key)
    }

    /// Removes and returns the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<Json> {
        self.entries.shift_remove(key)
    }

    /// Returns true if `key` is stored.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Json)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
