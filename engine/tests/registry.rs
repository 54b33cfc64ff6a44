//! The engine against an injected registry that knows nothing of the
//! ActivityStreams catalog.

use std::sync::OnceLock;

use serde_json::json;
use streams_engine::{decode, DecodeOptions, Error, TypeRegistry, Value};
use streams_vocab::{PropertyDef, Range, Schema, TypeKind};

const LABEL: PropertyDef = PropertyDef {
    name: "label",
    comment: "",
    functional: true,
    ranges: &[Range::String],
    natural_language: true,
};
const PART: PropertyDef = PropertyDef {
    name: "part",
    comment: "",
    functional: false,
    ranges: &[Range::Object, Range::Link, Range::Iri],
    natural_language: false,
};
const HREF: PropertyDef = PropertyDef {
    name: "href",
    comment: "",
    functional: true,
    ranges: &[Range::Iri],
    natural_language: false,
};

/// `Thing` and `Ref`, where `Twin` names both an object and a link.
struct Stub;

impl Stub {
    fn schemas() -> &'static [Schema] {
        static SCHEMAS: OnceLock<Vec<Schema>> = OnceLock::new();
        SCHEMAS.get_or_init(|| {
            vec![
                Schema {
                    name: "Thing",
                    kind: TypeKind::Object,
                    ancestors: vec![],
                    properties: vec![LABEL, PART],
                },
                Schema {
                    name: "Ref",
                    kind: TypeKind::Link,
                    ancestors: vec![],
                    properties: vec![HREF],
                },
            ]
        })
    }

    fn find(name: &str, kind: TypeKind) -> Option<&'static Schema> {
        let name = if name == "Twin" {
            match kind {
                TypeKind::Object => "Thing",
                TypeKind::Link => "Ref",
            }
        } else {
            name
        };
        Self::schemas().iter().find(|s| s.name == name && s.kind == kind)
    }
}

impl TypeRegistry for Stub {
    fn resolve_object(&self, name: &str) -> Option<&'static Schema> {
        Self::find(name, TypeKind::Object)
    }

    fn resolve_link(&self, name: &str) -> Option<&'static Schema> {
        Self::find(name, TypeKind::Link)
    }
}

#[test]
fn stub_types_decode() {
    let document = json!({
        "type": "Thing",
        "label": "root",
        "labelMap": { "en": "root" },
        "part": [
            { "type": "Ref", "href": "https://a.example/r" },
            { "type": "Thing", "label": "child" },
            "https://a.example/p"
        ]
    });
    let record = decode(&document, &Stub, &DecodeOptions::default()).unwrap();
    assert_eq!(record.type_name(), "Thing");
    assert_eq!(record.get("label", 0).unwrap(), &Value::String("root".into()));
    assert!(record.get("part", 0).unwrap().as_link().is_some());
    assert!(record.get("part", 1).unwrap().as_object().is_some());
    assert!(record.get("part", 2).unwrap().as_iri().is_some());
    assert_eq!(record.to_value().unwrap(), document);
}

#[test]
fn catalog_types_are_unknown_to_a_stub() {
    let document = json!({ "type": "Thing", "part": { "type": "Note", "content": "hi" } });
    let record = decode(&document, &Stub, &DecodeOptions::default()).unwrap();
    assert!(record.get("part", 0).unwrap().is_unknown());

    let err = decode(&json!({ "type": "Note" }), &Stub, &DecodeOptions::default()).unwrap_err();
    assert_eq!(err, Error::UnresolvedType { found: vec!["Note".into()] });
}

#[test]
fn objects_win_when_a_name_is_both() {
    let document = json!({ "type": "Thing", "part": { "type": "Twin", "href": "https://a.example/r" } });
    let record = decode(&document, &Stub, &DecodeOptions::default()).unwrap();
    let twin = record.get("part", 0).unwrap().as_object().unwrap();
    assert_eq!(twin.type_name(), "Thing");
    assert_eq!(twin.unknown().get("href"), Some(&json!("https://a.example/r")));

    let root = decode(&json!({ "type": "Twin" }), &Stub, &DecodeOptions::default()).unwrap();
    assert_eq!(root.type_name(), "Thing");
}

#[test]
fn nesting_depth_is_bounded() {
    let mut document = json!({ "type": "Thing" });
    for _ in 0..5 {
        document = json!({ "type": "Thing", "part": document });
    }
    let options = DecodeOptions {
        max_depth: 5,
        ..DecodeOptions::default()
    };
    assert!(decode(&document, &Stub, &options).is_ok());
    let options = DecodeOptions {
        max_depth: 4,
        ..DecodeOptions::default()
    };
    assert_eq!(
        decode(&document, &Stub, &options),
        Err(Error::DepthExceeded { max_depth: 4 })
    );
}
