//! Activity types.
//!
//! `Activity` adds the actor/object/target family of properties to `Object`.
//! `IntransitiveActivity` is an `Activity` without an `object`. The remaining
//! types add no properties of their own except `Question`.

use super::{repeatable, REFERENCE};
use crate::model::{Range, TypeDef, TypeKind};

/// Returns the activity type definitions, parents first.
#[must_use]
pub fn types() -> Vec<TypeDef> {
    let mut types = vec![
        TypeDef {
            name: "Activity",
            comment: "An Activity is a subtype of Object that describes some form of \
                      action that may happen, is currently happening, or has already \
                      happened.",
            kind: TypeKind::Object,
            extends: Some("Object"),
            without: &[],
            properties: vec![
                repeatable(
                    "actor",
                    REFERENCE,
                    "Describes one or more entities that either performed or are \
                     expected to perform the activity.",
                ),
                repeatable(
                    "object",
                    REFERENCE,
                    "Describes the direct object of the activity.",
                ),
                repeatable(
                    "target",
                    REFERENCE,
                    "Describes the indirect object, or target, of the activity.",
                ),
                repeatable(
                    "result",
                    REFERENCE,
                    "Describes the result of the activity.",
                ),
                repeatable(
                    "origin",
                    REFERENCE,
                    "Describes an indirect object of the activity from which the \
                     activity is directed.",
                ),
                repeatable(
                    "instrument",
                    REFERENCE,
                    "Identifies one or more objects used (or to be used) in the \
                     completion of an Activity.",
                ),
            ],
        },
        TypeDef {
            name: "IntransitiveActivity",
            comment: "Instances of IntransitiveActivity are a subtype of Activity \
                      representing intransitive actions. The object property is \
                      therefore inappropriate for these activities.",
            kind: TypeKind::Object,
            extends: Some("Activity"),
            without: &["object"],
            properties: vec![],
        },
    ];

    types.extend(
        [
            ("Accept", "Activity", "The actor accepts the object."),
            ("TentativeAccept", "Accept", "A specialization of Accept indicating that the acceptance is tentative."),
            ("Add", "Activity", "The actor has added the object to the target."),
            ("Arrive", "IntransitiveActivity", "The actor has arrived at the location."),
            ("Create", "Activity", "The actor has created the object."),
            ("Delete", "Activity", "The actor has deleted the object."),
            ("Follow", "Activity", "The actor is \"following\" the object."),
            ("Ignore", "Activity", "The actor is ignoring the object."),
            ("Join", "Activity", "The actor has joined the object."),
            ("Leave", "Activity", "The actor has left the object."),
            ("Like", "Activity", "The actor likes, recommends or endorses the object."),
            ("Offer", "Activity", "The actor is offering the object."),
            ("Invite", "Offer", "A specialization of Offer in which the actor is extending an invitation for the object to the target."),
            ("Reject", "Activity", "The actor is rejecting the object."),
            ("TentativeReject", "Reject", "A specialization of Reject in which the rejection is considered tentative."),
            ("Remove", "Activity", "The actor is removing the object."),
            ("Undo", "Activity", "The actor is undoing the object."),
            ("Update", "Activity", "The actor has updated the object."),
            ("View", "Activity", "The actor has viewed the object."),
            ("Listen", "Activity", "The actor has listened to the object."),
            ("Read", "Activity", "The actor has read the object."),
            ("Move", "Activity", "The actor has moved object from origin to target."),
            ("Travel", "IntransitiveActivity", "The actor is traveling to target from origin."),
            ("Announce", "Activity", "The actor is calling the target's attention the object."),
            ("Block", "Ignore", "The actor is blocking the object."),
            ("Flag", "Activity", "The actor is \"flagging\" the object."),
            ("Dislike", "Activity", "The actor dislikes the object."),
        ]
        .into_iter()
        .map(|(name, parent, comment)| TypeDef {
            name,
            comment,
            kind: TypeKind::Object,
            extends: Some(parent),
            without: &[],
            properties: vec![],
        }),
    );

    types.push(TypeDef {
        name: "Question",
        comment: "Represents a question being asked. Either of the anyOf and oneOf \
                  properties may be used to express possible answers, but a \
                  Question must not have both.",
        kind: TypeKind::Object,
        extends: Some("IntransitiveActivity"),
        without: &[],
        properties: vec![
            repeatable("oneOf", REFERENCE, "Identifies an exclusive option for a Question."),
            repeatable("anyOf", REFERENCE, "Identifies an inclusive option for a Question."),
            repeatable(
                "closed",
                &[
                    Range::Object,
                    Range::Link,
                    Range::DateTime,
                    Range::Boolean,
                    Range::Iri,
                ],
                "Indicates that a question has been closed, and answers are no \
                 longer accepted.",
            ),
        ],
    });

    types
}
