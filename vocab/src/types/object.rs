//! Extended object types.
//!
//! Document-like media types, places, relationships, profiles and tombstones.

use super::{functional, repeatable, OBJECT_OR_IRI, REFERENCE};
use crate::model::{Range, TypeDef, TypeKind};

/// Returns the extended object type definitions, parents first.
#[must_use]
pub fn types() -> Vec<TypeDef> {
    let plain = |name: &'static str, extends: &'static str, comment: &'static str| TypeDef {
        name,
        comment,
        kind: TypeKind::Object,
        extends: Some(extends),
        without: &[],
        properties: vec![],
    };

    vec![
        plain("Article", "Object", "Represents any kind of multi-paragraph written work."),
        plain("Document", "Object", "Represents a document of any kind."),
        plain("Audio", "Document", "Represents an audio document of any kind."),
        plain("Image", "Document", "An image document of any kind."),
        plain("Video", "Document", "Represents a video document of any kind."),
        plain("Page", "Document", "Represents a Web Page."),
        plain("Note", "Object", "Represents a short written work typically less than a single paragraph in length."),
        plain("Event", "Object", "Represents any kind of event."),
        TypeDef {
            name: "Place",
            comment: "Represents a logical or physical location.",
            kind: TypeKind::Object,
            extends: Some("Object"),
            without: &[],
            properties: vec![
                functional(
                    "accuracy",
                    &[Range::Float],
                    "Indicates the accuracy of position coordinates on a Place \
                     object, expressed in properties of percentage.",
                ),
                functional(
                    "altitude",
                    &[Range::Float, Range::Iri],
                    "Indicates the altitude of a place. The measurement units is \
                     indicated using the units property.",
                ),
                functional("latitude", &[Range::Float], "The latitude of a place."),
                functional("longitude", &[Range::Float], "The longitude of a place."),
                functional(
                    "radius",
                    &[Range::Float],
                    "The radius from the given latitude and longitude for a Place.",
                ),
                functional(
                    "units",
                    &[Range::Iri, Range::String],
                    "Specifies the measurement units for the radius and altitude \
                     properties on a Place object.",
                ),
            ],
        },
        TypeDef {
            name: "Relationship",
            comment: "Describes a relationship between two individuals.",
            kind: TypeKind::Object,
            extends: Some("Object"),
            without: &[],
            properties: vec![
                functional(
                    "subject",
                    REFERENCE,
                    "The subject of the relationship: the entity that is related.",
                ),
                repeatable(
                    "object",
                    REFERENCE,
                    "The entity to which the subject is related.",
                ),
                repeatable(
                    "relationship",
                    OBJECT_OR_IRI,
                    "The kind of relationship that is thought to exist between the \
                     subject and object.",
                ),
            ],
        },
        TypeDef {
            name: "Profile",
            comment: "A Profile is a content object that describes another Object, \
                      typically used to describe Actor Type objects.",
            kind: TypeKind::Object,
            extends: Some("Object"),
            without: &[],
            properties: vec![functional(
                "describes",
                OBJECT_OR_IRI,
                "The object that is described by the Profile.",
            )],
        },
        TypeDef {
            name: "Tombstone",
            comment: "A Tombstone represents a content object that has been deleted.",
            kind: TypeKind::Object,
            extends: Some("Object"),
            without: &[],
            properties: vec![
                repeatable(
                    "formerType",
                    &[Range::Object, Range::String],
                    "The type of the object that was deleted.",
                ),
                functional(
                    "deleted",
                    &[Range::DateTime],
                    "The date and time at which the object was deleted.",
                ),
            ],
        },
    ]
}
