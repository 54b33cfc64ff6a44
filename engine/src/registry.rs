//! Type resolution.
//!
//! The engine never names a concrete vocabulary type. Every discriminator is
//! resolved through a [`TypeRegistry`] handed to the decoder, which answers
//! with the flattened [`Schema`] to decode against.

use streams_vocab::{Schema, TypeKind, Vocabulary};

/// Resolves discriminator strings to schemas.
///
/// Consulted only for maps that carry a `type` key.
pub trait TypeRegistry: Send + Sync {
    /// Returns the object schema named by `name`, if any.
    fn resolve_object(&self, name: &str) -> Option<&'static Schema>;

    /// Returns the link schema named by `name`, if any.
    fn resolve_link(&self, name: &str) -> Option<&'static Schema>;
}

/// A registry backed by a static [`Vocabulary`].
///
/// Accepts the bare term (`Note`), the compact form (`as:Note`) and the
/// expanded IRI (`https://www.w3.org/ns/activitystreams#Note`).
#[derive(Debug, Clone, Copy)]
pub struct VocabularyRegistry {
    vocabulary: &'static Vocabulary,
}

impl VocabularyRegistry {
    /// Creates a registry over `vocabulary`.
    #[must_use]
    pub fn new(vocabulary: &'static Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Returns the backing vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &'static Vocabulary {
        self.vocabulary
    }

    fn resolve(&self, name: &str, kind: TypeKind) -> Option<&'static Schema> {
        let vocabulary = self.vocabulary;
        let term = name
            .strip_prefix(vocabulary.base_iri)
            .or_else(|| name.strip_prefix("as:"))
            .unwrap_or(name);
        vocabulary.schema(term).filter(|schema| schema.kind == kind)
    }
}

impl Default for VocabularyRegistry {
    fn default() -> Self {
        Self::new(Vocabulary::full())
    }
}

impl TypeRegistry for VocabularyRegistry {
    fn resolve_object(&self, name: &str) -> Option<&'static Schema> {
        self.resolve(name, TypeKind::Object)
    }

    fn resolve_link(&self, name: &str) -> Option<&'static Schema> {
        self.resolve(name, TypeKind::Link)
    }
}
