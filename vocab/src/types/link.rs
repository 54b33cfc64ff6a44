//! Link subtypes.

use crate::model::{TypeDef, TypeKind};

/// Returns the link subtype definitions.
#[must_use]
pub fn types() -> Vec<TypeDef> {
    vec![TypeDef {
        name: "Mention",
        comment: "A specialized Link that represents an @mention.",
        kind: TypeKind::Link,
        extends: Some("Link"),
        without: &[],
        properties: vec![],
    }]
}
