//! Natural-language maps.
//!
//! A text property such as `name` may carry a `nameMap` alongside its primary
//! values. Lookups are total: an absent tag reads as the empty string.

use std::collections::BTreeMap;

use serde_json::{Map, Value as Json};

use crate::primitive;

/// Language tag to text, independent of the property's primary values.
///
/// An absent map and a present-but-empty map are distinct states: the first
/// is not emitted on encode, the second is emitted as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Option<BTreeMap<String, String>>,
}

impl LanguageMap {
    /// Creates an absent map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the map exists, even with no entries.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.entries.is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, BTreeMap::len)
    }

    /// Returns true if the map is absent or has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the stored tags in sorted order. Empty when the map is
    /// absent; call again (or clone the iterator) to restart.
    pub fn languages(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.entries
            .iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// Returns the text for `tag`, or the empty string if there is none.
    #[must_use]
    pub fn get(&self, tag: &str) -> &str {
        self.entries
            .as_ref()
            .and_then(|entries| entries.get(tag))
            .map_or("", String::as_str)
    }

    /// Stores `text` under `tag`, creating the map on first write.
    pub fn set(&mut self, tag: impl Into<String>, text: impl Into<String>) {
        self.entries
            .get_or_insert_with(BTreeMap::new)
            .insert(tag.into(), text.into());
    }

    /// Removes one entry, returning its text.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.entries.as_mut().and_then(|entries| entries.remove(tag))
    }

    /// Drops the map entirely, returning it to the absent state.
    pub fn clear(&mut self) {
        self.entries = None;
    }

    /// Decodes the raw `<name>Map` value, or `None` if it is not an object
    /// of strings.
    pub(crate) fn decode(raw: &Json) -> Option<Self> {
        primitive::decode_language_map(raw).map(|entries| Self {
            entries: Some(entries),
        })
    }

    /// Encodes the map, or `None` when it is absent.
    pub(crate) fn encode(&self) -> Option<Json> {
        self.entries.as_ref().map(|entries| {
            Json::Object(
                entries
                    .iter()
                    .map(|(tag, text)| (tag.clone(), Json::String(text.clone())))
                    .collect::<Map<String, Json>>(),
            )
        })
    }
}
