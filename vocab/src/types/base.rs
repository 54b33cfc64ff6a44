//! Core root types: `Object` and `Link`.
//!
//! Every other type in the vocabulary descends from one of these two.

use super::{functional, repeatable, text, COLLECTION_REF, LINK_OR_IRI, REFERENCE};
use crate::model::{Range, TypeDef, TypeKind};

/// Returns the root type definitions.
#[must_use]
pub fn types() -> Vec<TypeDef> {
    vec![object(), link()]
}

fn object() -> TypeDef {
    TypeDef {
        name: "Object",
        comment: "Describes an object of any kind. The Object type serves as the \
                  base type for most of the other kinds of objects defined in the \
                  vocabulary, including Activity, IntransitiveActivity, Collection \
                  and OrderedCollection.",
        kind: TypeKind::Object,
        extends: None,
        without: &[],
        properties: vec![
            functional("id", &[Range::Iri], "The globally unique identifier of the object."),
            repeatable(
                "attachment",
                REFERENCE,
                "Identifies a resource attached or related to an object that \
                 potentially requires special handling.",
            ),
            repeatable(
                "attributedTo",
                REFERENCE,
                "Identifies one or more entities to which this object is attributed.",
            ),
            repeatable(
                "audience",
                REFERENCE,
                "Identifies one or more entities that represent the total population \
                 of entities for which the object can be considered to be relevant.",
            ),
            repeatable("bcc", REFERENCE, "Identifies one or more objects of the blind carbon copy audience."),
            repeatable("bto", REFERENCE, "Identifies an object that is part of the private primary audience."),
            repeatable("cc", REFERENCE, "Identifies an object that is part of the public secondary audience."),
            text("content", "The content or textual representation of the object."),
            repeatable(
                "context",
                REFERENCE,
                "Identifies the context within which the object exists or an \
                 activity was performed.",
            ),
            functional(
                "duration",
                &[Range::Duration],
                "When the object describes a time-bound resource, the approximate \
                 duration of the resource.",
            ),
            functional(
                "endTime",
                &[Range::DateTime],
                "The date and time describing the actual or expected ending time of the object.",
            ),
            repeatable("generator", REFERENCE, "Identifies the entity that generated the object."),
            repeatable("icon", REFERENCE, "Indicates an entity that describes an icon for this object."),
            repeatable("image", REFERENCE, "Indicates an entity that describes an image for this object."),
            repeatable(
                "inReplyTo",
                REFERENCE,
                "Indicates one or more entities for which this object is considered a response.",
            ),
            repeatable(
                "location",
                REFERENCE,
                "Indicates one or more physical or logical locations associated with the object.",
            ),
            functional(
                "mediaType",
                &[Range::MediaType],
                "Identifies the MIME media type of the value of the content property.",
            ),
            text("name", "A simple, human-readable, plain-text name for the object."),
            repeatable(
                "preview",
                REFERENCE,
                "Identifies an entity that provides a preview of this object.",
            ),
            functional(
                "published",
                &[Range::DateTime],
                "The date and time at which the object was published.",
            ),
            functional(
                "replies",
                &[Range::Collection, Range::Iri],
                "Identifies a Collection containing objects considered to be \
                 responses to this object.",
            ),
            functional(
                "startTime",
                &[Range::DateTime],
                "The date and time describing the actual or expected starting time of the object.",
            ),
            text("summary", "A natural language summarization of the object."),
            repeatable(
                "tag",
                REFERENCE,
                "One or more \"tags\" that have been associated with an object.",
            ),
            repeatable("to", REFERENCE, "Identifies an entity considered to be part of the public primary audience."),
            functional(
                "updated",
                &[Range::DateTime],
                "The date and time at which the object was updated.",
            ),
            repeatable("url", LINK_OR_IRI, "Identifies one or more links to representations of the object."),
            functional("likes", COLLECTION_REF, "A Collection of Like activities that reference this object."),
            functional("shares", COLLECTION_REF, "A Collection of Announce activities that reference this object."),
        ],
    }
}

fn link() -> TypeDef {
    TypeDef {
        name: "Link",
        comment: "A Link is an indirect, qualified reference to a resource \
                  identified by a URL. The properties of the Link are properties \
                  of the reference as opposed to properties of the resource.",
        kind: TypeKind::Link,
        extends: None,
        without: &[],
        properties: vec![
            functional("id", &[Range::Iri], "The globally unique identifier of the link."),
            functional("href", &[Range::Iri], "The target resource pointed to by the link."),
            repeatable(
                "rel",
                &[Range::String],
                "A link relation associated with the link, as defined by HTML5 and RFC 5988.",
            ),
            functional(
                "mediaType",
                &[Range::MediaType],
                "Identifies the MIME media type of the referenced resource.",
            ),
            text("name", "A simple, human-readable, plain-text name for the link."),
            functional(
                "hreflang",
                &[Range::LanguageTag],
                "Hints as to the language used by the target resource.",
            ),
            functional(
                "height",
                &[Range::NonNegativeInteger],
                "A hint as to the rendering height in device-independent pixels.",
            ),
            functional(
                "width",
                &[Range::NonNegativeInteger],
                "A hint as to the rendering width in device-independent pixels.",
            ),
            repeatable(
                "preview",
                REFERENCE,
                "Identifies an entity that provides a preview of this link.",
            ),
            repeatable("attributedTo", REFERENCE, "Identifies one or more entities to which this link is attributed."),
        ],
    }
}
