//! Polymorphic property engine for ActivityStreams documents.
//!
//! The `streams-engine` crate decodes a parsed JSON document into a typed
//! [`Record`] and encodes it back. Every property occurrence is decoded by
//! trial against the property's candidate kinds; an occurrence that matches
//! none of them is kept verbatim so that vocabulary extensions survive a
//! round trip. Concrete types are never named here: they are reached through
//! an injected [`TypeRegistry`].
//!
//! # Decoding
//!
//! ```
//! use serde_json::json;
//! use streams_engine::{decode, DecodeOptions, VocabularyRegistry};
//!
//! let document = json!({
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Move",
//!     "actor": "https://a.example/x",
//!     "object": [{ "type": "Note", "id": "https://a.example/n" }],
//!     "ex:mood": { "level": 3 }
//! });
//! let record = decode(&document, &VocabularyRegistry::default(), &DecodeOptions::default())?;
//!
//! assert_eq!(record.type_name(), "Move");
//! assert!(record.get("actor", 0)?.as_iri().is_some());
//! assert_eq!(record.get("object", 0)?.as_object().map(|o| o.type_name()), Some("Note"));
//!
//! let out = record.to_value()?;
//! assert_eq!(out["object"]["id"], "https://a.example/n");
//! assert_eq!(out["ex:mood"], json!({ "level": 3 }));
//! assert!(out.get("@context").is_none());
//! # Ok::<(), streams_engine::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod language_map;
pub mod options;
pub mod primitive;
pub mod property;
pub mod record;
pub mod registry;
pub mod unknown;
pub mod value;

pub use error::{Error, FormatError, Result};
pub use language_map::LanguageMap;
pub use options::DecodeOptions;
pub use property::{Property, Values};
pub use record::{Decoder, Record, CONTEXT_KEY, TYPE_KEY};
pub use registry::{TypeRegistry, VocabularyRegistry};
pub use unknown::UnknownBag;
pub use value::Value;

/// Decodes `document` into a record, resolving its type through `registry`.
///
/// # Errors
///
/// Returns [`Error::NotAnObject`] or [`Error::UnresolvedType`] if the root
/// cannot be typed, and any hard error raised while decoding its properties.
pub fn decode(
    document: &serde_json::Value,
    registry: &dyn TypeRegistry,
    options: &DecodeOptions,
) -> Result<Record> {
    Decoder::new(registry, options).decode(document)
}
