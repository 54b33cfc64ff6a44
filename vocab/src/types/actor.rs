//! Actor types.

use crate::model::{TypeDef, TypeKind};

/// Returns the actor type definitions.
#[must_use]
pub fn types() -> Vec<TypeDef> {
    [
        ("Application", "Describes a software application."),
        ("Group", "Represents a formal or informal collective of Actors."),
        ("Organization", "Represents an organization."),
        ("Person", "Represents an individual person."),
        ("Service", "Represents a service of any kind."),
    ]
    .into_iter()
    .map(|(name, comment)| TypeDef {
        name,
        comment,
        kind: TypeKind::Object,
        extends: Some("Object"),
        without: &[],
        properties: vec![],
    })
    .collect()
}
