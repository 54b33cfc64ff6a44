//! Collection types.
//!
//! Pages point at their collection through `partOf` and at sibling pages
//! through `next`/`prev`.

use super::{functional, repeatable, COLLECTION_REF, REFERENCE};
use crate::model::{Range, TypeDef, TypeKind};

/// Returns the collection type definitions, parents first.
#[must_use]
pub fn types() -> Vec<TypeDef> {
    vec![
        TypeDef {
            name: "Collection",
            comment: "A Collection is a subtype of Object that represents ordered or \
                      unordered sets of Object or Link instances.",
            kind: TypeKind::Object,
            extends: Some("Object"),
            without: &[],
            properties: vec![
                functional(
                    "totalItems",
                    &[Range::NonNegativeInteger],
                    "The total number of items in a logical collection.",
                ),
                functional(
                    "current",
                    COLLECTION_REF,
                    "In a paged Collection, indicates the page that contains the most \
                     recently updated member items.",
                ),
                functional(
                    "first",
                    COLLECTION_REF,
                    "In a paged Collection, indicates the furthest preceeding page of \
                     items in the collection.",
                ),
                functional(
                    "last",
                    COLLECTION_REF,
                    "In a paged Collection, indicates the furthest proceeding page of \
                     the collection.",
                ),
                repeatable("items", REFERENCE, "Identifies the items contained in a collection."),
            ],
        },
        TypeDef {
            name: "OrderedCollection",
            comment: "A subtype of Collection in which members of the logical \
                      collection are assumed to always be strictly ordered.",
            kind: TypeKind::Object,
            extends: Some("Collection"),
            without: &["items"],
            properties: vec![repeatable(
                "orderedItems",
                REFERENCE,
                "Identifies the items contained in an ordered collection, in order.",
            )],
        },
        TypeDef {
            name: "CollectionPage",
            comment: "Used to represent distinct subsets of items from a Collection.",
            kind: TypeKind::Object,
            extends: Some("Collection"),
            without: &[],
            properties: vec![
                functional(
                    "partOf",
                    &[Range::Link, Range::Collection, Range::Iri],
                    "Identifies the Collection to which a CollectionPage objects items belong.",
                ),
                functional("next", COLLECTION_REF, "In a paged Collection, indicates the next page of items."),
                functional(
                    "prev",
                    COLLECTION_REF,
                    "In a paged Collection, identifies the previous page of items.",
                ),
            ],
        },
        TypeDef {
            name: "OrderedCollectionPage",
            comment: "Used to represent ordered subsets of items from an OrderedCollection.",
            kind: TypeKind::Object,
            extends: Some("CollectionPage"),
            without: &["items"],
            properties: vec![
                repeatable(
                    "orderedItems",
                    REFERENCE,
                    "Identifies the items contained in this page, in order.",
                ),
                functional(
                    "startIndex",
                    &[Range::NonNegativeInteger],
                    "A non-negative integer value identifying the relative position \
                     within the logical view of a strictly ordered collection.",
                ),
            ],
        },
    ]
}
