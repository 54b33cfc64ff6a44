//! ActivityStreams 2.0 vocabulary encoded as typed Rust data.
//!
//! The `streams-vocab` crate provides the ActivityStreams core and extended
//! vocabulary (54 types) as static Rust data structures, the flattened
//! per-type [`Schema`]s the property engine decodes against, and a serializer
//! that produces the vocabulary's JSON-LD `@context`.
//!
//! # Entry Point
//!
//! ```
//! let vocabulary = streams_vocab::Vocabulary::full();
//! let schema = vocabulary.schema("Move").expect("Move is defined");
//! assert!(schema.is_a("Activity"));
//! assert!(schema.property("actor").is_some());
//! ```
//!
//! # Serialization
//!
//! ```
//! let vocabulary = streams_vocab::Vocabulary::full();
//! let context = streams_vocab::serializer::context::to_context(vocabulary);
//! assert!(context["@context"].is_object());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod types;

pub use model::{PropertyDef, Range, Schema, TypeDef, TypeKind, Vocabulary};

impl Vocabulary {
    /// Returns the complete ActivityStreams vocabulary.
    ///
    /// Assembly order keeps every parent ahead of its children:
    /// `base → activity → actor → object → collection → link`
    #[must_use]
    pub fn full() -> &'static Vocabulary {
        static VOCABULARY: std::sync::OnceLock<Vocabulary> = std::sync::OnceLock::new();
        VOCABULARY.get_or_init(|| {
            let types: Vec<TypeDef> = [
                types::base::types(),
                types::activity::types(),
                types::actor::types(),
                types::object::types(),
                types::collection::types(),
                types::link::types(),
            ]
            .into_iter()
            .flatten()
            .collect();
            let schemas = model::flatten(&types);
            Vocabulary {
                version: "2.0",
                base_iri: model::iris::AS,
                types,
                schemas,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_count() {
        // 2 roots + 28 activities + 2 activity bases + 5 actors + 12 objects
        // + 4 collections + Mention.
        assert_eq!(Vocabulary::full().type_count(), 54);
    }

    #[test]
    fn all_type_names_unique() {
        let mut names = std::collections::HashSet::new();
        for def in &Vocabulary::full().types {
            assert!(names.insert(def.name), "Duplicate type name: {}", def.name);
        }
    }

    #[test]
    fn every_parent_is_defined_before_its_children() {
        let vocabulary = Vocabulary::full();
        for (i, def) in vocabulary.types.iter().enumerate() {
            if let Some(parent) = def.extends {
                let pos = vocabulary.types.iter().position(|t| t.name == parent);
                assert!(
                    pos.is_some_and(|p| p < i),
                    "{} extends {} which is not defined earlier",
                    def.name,
                    parent
                );
            }
        }
    }

    #[test]
    fn property_names_unique_within_schema() {
        for schema in &Vocabulary::full().schemas {
            let mut names = std::collections::HashSet::new();
            for prop in &schema.properties {
                assert!(
                    names.insert(prop.name),
                    "Duplicate property {} in {}",
                    prop.name,
                    schema.name
                );
            }
        }
    }

    #[test]
    fn link_kinds_descend_from_link() {
        for schema in &Vocabulary::full().schemas {
            assert_eq!(
                schema.kind == TypeKind::Link,
                schema.is_a("Link"),
                "{} kind disagrees with its ancestry",
                schema.name
            );
        }
    }

    #[test]
    fn every_property_has_ranges() {
        for schema in &Vocabulary::full().schemas {
            for prop in &schema.properties {
                assert!(!prop.ranges.is_empty(), "{}.{} has no range", schema.name, prop.name);
            }
        }
    }
}
