//! Language tags and language-tagged string maps (`rdf:langString`).

use std::collections::BTreeMap;

use serde_json::Value as Json;

/// Returns true if `s` is shaped like a BCP 47 tag: one or more `-`
/// separated subtags of one to eight ASCII alphanumerics, the first
/// alphabetic.
#[must_use]
pub fn is_language_tag(s: &str) -> bool {
    let mut subtags = s.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|p| (1..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok
        && subtags.all(|t| (1..=8).contains(&t.len()) && t.chars().all(|c| c.is_ascii_alphanumeric()))
}

/// Decodes a JSON object of language tag to string.
///
/// Keys are taken as written. Returns `None` unless `raw` is an object whose
/// values are all strings; such values are kept opaque by the caller.
#[must_use]
pub fn decode_language_map(raw: &Json) -> Option<BTreeMap<String, String>> {
    raw.as_object()?
        .iter()
        .map(|(tag, text)| Some((tag.clone(), text.as_str()?.to_owned())))
        .collect()
}
