//! Core vocabulary model types.
//!
//! These types represent the ActivityStreams vocabulary as typed Rust data.
//! Type definitions are declared per family in [`crate::types`] and flattened
//! into [`Schema`]s when the vocabulary is assembled. The top-level entry point
//! is [`Vocabulary::full()`](crate::Vocabulary::full).

/// A candidate kind that a property occurrence may decode into.
///
/// A property declares its ranges as an ordered slice; that order is the
/// trial order used when a raw value is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    /// An embedded object of any `Object`-kind type.
    Object,
    /// An embedded link of any `Link`-kind type.
    Link,
    /// An embedded object whose type descends from `Collection`.
    Collection,
    /// A bare reference to another resource.
    Iri,
    /// `xsd:dateTime`.
    DateTime,
    /// `xsd:duration`.
    Duration,
    /// `xsd:float`.
    Float,
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:string`.
    String,
    /// A MIME media type such as `text/html`.
    MediaType,
    /// A BCP 47 language tag.
    LanguageTag,
}

impl Range {
    /// Returns true for the ranges resolved through the type registry.
    #[must_use]
    pub fn is_embedded(self) -> bool {
        matches!(self, Range::Object | Range::Link | Range::Collection)
    }

    /// Returns a short lowercase label used in diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Range::Object => "object",
            Range::Link => "link",
            Range::Collection => "collection",
            Range::Iri => "iri",
            Range::DateTime => "dateTime",
            Range::Duration => "duration",
            Range::Float => "float",
            Range::NonNegativeInteger => "nonNegativeInteger",
            Range::Boolean => "boolean",
            Range::String => "string",
            Range::MediaType => "mediaType",
            Range::LanguageTag => "languageTag",
        }
    }
}

/// A property definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    /// Compact term used as the document key (e.g., `"actor"`).
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Whether the property holds at most one value.
    pub functional: bool,
    /// Candidate kinds in trial order.
    pub ranges: &'static [Range],
    /// Whether the property also accepts a `<name>Map` natural-language map.
    pub natural_language: bool,
}

impl PropertyDef {
    /// Returns the document key of this property's natural-language map,
    /// or `None` if the property has none.
    #[must_use]
    pub fn language_map_key(&self) -> Option<String> {
        self.natural_language.then(|| format!("{}Map", self.name))
    }

    /// Returns true if at least one range is resolved through the registry.
    #[must_use]
    pub fn accepts_embedded(&self) -> bool {
        self.ranges.iter().any(|r| r.is_embedded())
    }
}

/// Whether a type describes an object or a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Descends from `Object`.
    Object,
    /// Descends from `Link`.
    Link,
}

/// A vocabulary type definition.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Canonical type name, used as the discriminator value (e.g., `"Move"`).
    pub name: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Object or link.
    pub kind: TypeKind,
    /// Parent type name, or `None` for a root type.
    pub extends: Option<&'static str>,
    /// Inherited property names this type does not carry.
    pub without: &'static [&'static str],
    /// Properties declared by this type itself.
    pub properties: Vec<PropertyDef>,
}

/// The flattened form of a type: everything the engine needs to decode
/// and encode one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Canonical type name.
    pub name: &'static str,
    /// Object or link.
    pub kind: TypeKind,
    /// Ancestor type names, nearest first.
    pub ancestors: Vec<&'static str>,
    /// All properties, root ancestor's first, in declaration order.
    pub properties: Vec<PropertyDef>,
}

impl Schema {
    /// Returns true if this schema is `name` or descends from it.
    #[must_use]
    pub fn is_a(&self, name: &str) -> bool {
        self.name == name || self.ancestors.iter().any(|a| *a == name)
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Returns the slot index of a property.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Returns true if `key` is a property name or a natural-language map
    /// key of this schema.
    #[must_use]
    pub fn owns_key(&self, key: &str) -> bool {
        self.properties.iter().any(|p| {
            p.name == key
                || (p.natural_language
                    && key.strip_suffix("Map").is_some_and(|base| base == p.name))
        })
    }
}

/// The complete vocabulary.
#[derive(Debug)]
pub struct Vocabulary {
    /// Vocabulary version.
    pub version: &'static str,
    /// Namespace IRI every term expands against.
    pub base_iri: &'static str,
    /// All type definitions, parents before children.
    pub types: Vec<TypeDef>,
    /// Flattened schemas, parallel to `types`.
    pub schemas: Vec<Schema>,
}

impl Vocabulary {
    /// Looks up a type definition by name. Returns `None` if not found.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&TypeDef> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Looks up a flattened schema by type name. Returns `None` if not found.
    #[must_use]
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Returns the number of types.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Returns the number of distinct property terms declared across all types.
    #[must_use]
    pub fn property_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .types
            .iter()
            .flat_map(|t| t.properties.iter().map(|p| p.name))
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}

/// Flattens type definitions into schemas.
///
/// `types` must list every parent before its children; a child whose parent
/// has not been seen yet is flattened as if it were a root type.
#[must_use]
pub fn flatten(types: &[TypeDef]) -> Vec<Schema> {
    let mut schemas: Vec<Schema> = Vec::with_capacity(types.len());
    for def in types {
        let parent = def
            .extends
            .and_then(|name| schemas.iter().find(|s| s.name == name));
        let (ancestors, mut properties) = match parent {
            Some(p) => {
                let mut ancestors = vec![p.name];
                ancestors.extend(p.ancestors.iter().copied());
                let properties: Vec<PropertyDef> = p
                    .properties
                    .iter()
                    .filter(|prop| !def.without.contains(&prop.name))
                    .copied()
                    .collect();
                (ancestors, properties)
            }
            None => (Vec::new(), Vec::new()),
        };
        for prop in &def.properties {
            // A redeclared property replaces the inherited one in place.
            match properties.iter_mut().find(|p| p.name == prop.name) {
                Some(existing) => *existing = *prop,
                None => properties.push(*prop),
            }
        }
        schemas.push(Schema {
            name: def.name,
            kind: def.kind,
            ancestors,
            properties,
        });
    }
    schemas
}

/// Standard IRI constants.
pub mod iris {
    /// ActivityStreams namespace.
    pub const AS: &str = "https://www.w3.org/ns/activitystreams#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    /// Canonical ActivityStreams context document.
    pub const AS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: PropertyDef = PropertyDef {
        name: "id",
        comment: "",
        functional: true,
        ranges: &[Range::Iri],
        natural_language: false,
    };
    const NAME: PropertyDef = PropertyDef {
        name: "name",
        comment: "",
        functional: false,
        ranges: &[Range::String],
        natural_language: true,
    };
    const OBJECT: PropertyDef = PropertyDef {
        name: "object",
        comment: "",
        functional: false,
        ranges: &[Range::Object, Range::Link, Range::Iri],
        natural_language: false,
    };

    fn defs() -> Vec<TypeDef> {
        vec![
            TypeDef {
                name: "Root",
                comment: "",
                kind: TypeKind::Object,
                extends: None,
                without: &[],
                properties: vec![ID, NAME],
            },
            TypeDef {
                name: "Act",
                comment: "",
                kind: TypeKind::Object,
                extends: Some("Root"),
                without: &[],
                properties: vec![OBJECT],
            },
            TypeDef {
                name: "Intransitive",
                comment: "",
                kind: TypeKind::Object,
                extends: Some("Act"),
                without: &["object"],
                properties: vec![],
            },
        ]
    }

    #[test]
    fn flatten_orders_ancestors_first() {
        let schemas = flatten(&defs());
        let act = &schemas[1];
        let names: Vec<_> = act.properties.iter().map(|p| p.name).collect();
        assert_eq!(names, ["id", "name", "object"]);
        assert_eq!(act.ancestors, ["Root"]);
    }

    #[test]
    fn flatten_drops_excluded_properties() {
        let schemas = flatten(&defs());
        let intransitive = &schemas[2];
        assert!(intransitive.property("object").is_none());
        assert_eq!(intransitive.ancestors, ["Act", "Root"]);
        assert!(intransitive.is_a("Root"));
        assert!(!intransitive.is_a("Other"));
    }

    #[test]
    fn owns_key_covers_language_maps() {
        let schemas = flatten(&defs());
        let root = &schemas[0];
        assert!(root.owns_key("name"));
        assert!(root.owns_key("nameMap"));
        assert!(!root.owns_key("idMap"));
        assert!(!root.owns_key("Map"));
        assert_eq!(NAME.language_map_key().as_deref(), Some("nameMap"));
        assert_eq!(ID.language_map_key(), None);
    }
}
