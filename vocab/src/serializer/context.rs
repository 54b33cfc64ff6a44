//! JSON-LD 1.1 context serializer for the vocabulary.
//!
//! Produces a single JSON-LD document whose `@context` maps every type and
//! property term to the ActivityStreams namespace. The term definitions follow
//! the shape of the published ActivityStreams context:
//! - reference-valued properties are coerced with `"@type": "@id"`
//! - typed literals carry their XSD datatype
//! - `<name>Map` terms use `"@container": "@language"`

use serde_json::{json, Map, Value};

use crate::model::{iris, PropertyDef, Range, Vocabulary};

/// Serializes the vocabulary's term definitions to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_context(vocabulary: &Vocabulary) -> Value {
    json!({ "@context": build_context(vocabulary) })
}

fn build_context(vocabulary: &Vocabulary) -> Value {
    let mut ctx = Map::new();
    ctx.insert("@vocab".to_owned(), json!("_:"));
    ctx.insert("xsd".to_owned(), json!(iris::XSD));
    ctx.insert("as".to_owned(), json!(vocabulary.base_iri));
    ctx.insert("id".to_owned(), json!("@id"));
    ctx.insert("type".to_owned(), json!("@type"));

    for def in &vocabulary.types {
        ctx.insert(def.name.to_owned(), json!(format!("as:{}", def.name)));
    }

    // A term shared by several types is defined once, by its first declaration.
    for def in &vocabulary.types {
        for prop in &def.properties {
            if ctx.contains_key(prop.name) {
                continue;
            }
            ctx.insert(prop.name.to_owned(), property_term(prop));
            if let Some(map_key) = prop.language_map_key() {
                ctx.insert(
                    map_key,
                    json!({
                        "@id": format!("as:{}", prop.name),
                        "@container": "@language"
                    }),
                );
            }
        }
    }

    Value::Object(ctx)
}

fn property_term(prop: &PropertyDef) -> Value {
    let id = format!("as:{}", prop.name);
    match coercion(prop.ranges) {
        Some(type_) => json!({ "@id": id, "@type": type_ }),
        None => json!(id),
    }
}

/// Returns the `@type` coercion shared by every range, if there is one.
fn coercion(ranges: &[Range]) -> Option<&'static str> {
    if ranges
        .iter()
        .all(|r| r.is_embedded() || *r == Range::Iri)
    {
        return Some("@id");
    }
    let datatype = |r: &Range| match r {
        Range::DateTime => Some("xsd:dateTime"),
        Range::Duration => Some("xsd:duration"),
        Range::Float => Some("xsd:float"),
        Range::NonNegativeInteger => Some("xsd:nonNegativeInteger"),
        Range::Boolean => Some("xsd:boolean"),
        _ => None,
    };
    match ranges {
        [only] => datatype(only),
        _ => None,
    }
}
