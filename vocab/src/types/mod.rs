//! ActivityStreams type families.
//!
//! Each sub-module encodes one family of the vocabulary as Rust static data.
//! Families are listed parents-first; see [`crate::Vocabulary::full`] for the
//! assembly sequence.

pub mod activity;
pub mod actor;
pub mod base;
pub mod collection;
pub mod link;
pub mod object;

use crate::model::{PropertyDef, Range};

/// Embedded object, embedded link, or bare reference.
pub(crate) const REFERENCE: &[Range] = &[Range::Object, Range::Link, Range::Iri];
/// Embedded link or bare reference.
pub(crate) const LINK_OR_IRI: &[Range] = &[Range::Link, Range::Iri];
/// Embedded object or bare reference.
pub(crate) const OBJECT_OR_IRI: &[Range] = &[Range::Object, Range::Iri];
/// Embedded collection, embedded link, or bare reference.
pub(crate) const COLLECTION_REF: &[Range] = &[Range::Collection, Range::Link, Range::Iri];

/// Declares a single-valued property.
pub(crate) const fn functional(
    name: &'static str,
    ranges: &'static [Range],
    comment: &'static str,
) -> PropertyDef {
    PropertyDef {
        name,
        comment,
        functional: true,
        ranges,
        natural_language: false,
    }
}

/// Declares a repeatable, ordered property.
pub(crate) const fn repeatable(
    name: &'static str,
    ranges: &'static [Range],
    comment: &'static str,
) -> PropertyDef {
    PropertyDef {
        name,
        comment,
        functional: false,
        ranges,
        natural_language: false,
    }
}

/// Declares a repeatable text property that also accepts a `<name>Map`.
pub(crate) const fn text(name: &'static str, comment: &'static str) -> PropertyDef {
    PropertyDef {
        name,
        comment,
        functional: false,
        ranges: &[Range::String],
        natural_language: true,
    }
}
