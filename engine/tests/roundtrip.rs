//! Round-trip laws: decode after encode reproduces the record, and encode
//! after decode reproduces every key the schema does not understand.

use chrono::DateTime;
use proptest::prelude::*;
use serde_json::{json, Value as Json};
use streams_engine::primitive::Duration;
use streams_engine::{decode, DecodeOptions, Record, TypeRegistry, Value, VocabularyRegistry};
use url::Url;

fn read(document: &Json) -> Record {
    decode(document, &VocabularyRegistry::default(), &DecodeOptions::default())
        .expect("document decodes")
}

fn new_record(type_name: &str) -> Record {
    let schema = VocabularyRegistry::default()
        .resolve_object(type_name)
        .expect("type is defined");
    Record::new(schema)
}

#[test]
fn built_records_survive_a_round_trip() {
    let mut note = new_record("Note");
    note.push_type("Note");
    note.set("id", Url::parse("https://a.example/n").unwrap().into()).unwrap();
    note.push_back("content", Value::String("hello".into())).unwrap();
    note.language_map_mut("content").unwrap().set("fr", "bonjour");

    let mut place = new_record("Place");
    place.push_type("Place");
    place.set("altitude", Value::Float(120.5)).unwrap();
    place.set("radius", Value::Float(3.0)).unwrap();

    let mut activity = new_record("Move");
    activity.push_type("Move");
    activity.push_back("actor", Url::parse("https://a.example/x").unwrap().into()).unwrap();
    activity.push_back("actor", Url::parse("https://a.example/y").unwrap().into()).unwrap();
    activity.push_back("object", note.into()).unwrap();
    activity.push_back("target", place.into()).unwrap();
    activity
        .set(
            "published",
            Value::DateTime(DateTime::parse_from_rfc3339("2016-05-10T00:00:00+02:00").unwrap()),
        )
        .unwrap();
    activity
        .set("duration", Value::Duration("PT2H30M".parse::<Duration>().unwrap()))
        .unwrap();

    let encoded = activity.to_value().unwrap();
    let decoded = read(&encoded);
    assert_eq!(decoded, activity);
    assert_eq!(decoded.to_value().unwrap(), encoded);
}

#[test]
fn opaque_values_survive_two_levels_down() {
    let document = json!({
        "type": "Create",
        "ex:top": [1, { "deep": [null, true] }],
        "object": {
            "type": "Note",
            "ex:middle": { "a": { "b": "c" } },
            "attachment": {
                "type": "Document",
                "ex:bottom": ["x", { "y": 1.5 }],
                "location": { "name": "no discriminator here" }
            }
        }
    });
    let out = read(&document).to_value().unwrap();
    assert_eq!(out, document);
}

#[test]
fn single_values_encode_the_same_either_way() {
    // `name` is non-functional, `mediaType` functional.
    let mut a = new_record("Note");
    a.push_back("name", Value::String("x".into())).unwrap();
    let mut b = new_record("Note");
    b.set("mediaType", Value::MediaType("x/y".into())).unwrap();
    let (a, b) = (a.to_value().unwrap(), b.to_value().unwrap());
    assert_eq!(a["name"], json!("x"));
    assert_eq!(b["mediaType"], json!("x/y"));
}

#[test]
fn functional_lists_keep_their_shape() {
    let document = json!({
        "type": "Note",
        "published": ["2016-05-10T00:00:00Z", "2017-05-10T00:00:00Z"],
        "startTime": ["2016-05-10T00:00:00Z"]
    });
    let record = read(&document);
    assert!(record.get("published", 0).unwrap().is_unknown());
    assert!(matches!(record.get("startTime", 0).unwrap(), Value::DateTime(_)));
    let out = record.to_value().unwrap();
    assert_eq!(out["published"], document["published"]);
    assert_eq!(out["startTime"], json!("2016-05-10T00:00:00Z"));
}

#[test]
fn empty_lists_keep_their_shape() {
    let document = json!({ "type": "Note", "to": [], "published": [] });
    let record = read(&document);
    assert_eq!(record.len("to").unwrap(), 1);
    assert!(record.get("to", 0).unwrap().is_unknown());
    assert!(record.get("published", 0).unwrap().is_unknown());
    assert_eq!(record.to_value().unwrap(), document);
}

#[test]
fn language_maps_round_trip() {
    let document = json!({
        "type": "Note",
        "name": "A note",
        "nameMap": { "en": "A note", "es": "Una nota" },
        "summaryMap": {}
    });
    let record = read(&document);
    assert_eq!(record.language_map("name").unwrap().get("es"), "Una nota");
    assert_eq!(record.language_map("name").unwrap().get("de"), "");
    assert!(record.language_map("summary").unwrap().is_present());
    assert!(!record.language_map("content").unwrap().is_present());
    assert_eq!(record.to_value().unwrap(), document);
}

#[test]
fn collections_round_trip() {
    let document = json!({
        "type": "OrderedCollectionPage",
        "id": "https://a.example/outbox?page=2",
        "partOf": "https://a.example/outbox",
        "totalItems": 3,
        "startIndex": 20,
        "orderedItems": [
            "https://a.example/1",
            { "type": "Like", "object": "https://a.example/2" },
            { "type": "ex:Boost" }
        ],
        "prev": "https://a.example/outbox?page=1"
    });
    let record = read(&document);
    assert_eq!(record.get("totalItems", 0).unwrap(), &Value::NonNegativeInteger(3));
    assert_eq!(record.len("orderedItems").unwrap(), 3);
    assert!(record.property("items").is_err());
    assert_eq!(record.to_value().unwrap(), document);
}

fn scalar() -> impl Strategy<Value = Json> {
    prop_oneof![
        any::<bool>().prop_map(Json::from),
        any::<i32>().prop_map(Json::from),
        "[a-z ]{0,8}".prop_map(Json::from),
        Just(Json::Null),
    ]
}

fn opaque() -> impl Strategy<Value = Json> {
    scalar().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Json::from),
            proptest::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Json::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_extension_keys_round_trip(
        entries in proptest::collection::btree_map("ex:[a-z]{1,6}", opaque(), 0..6),
    ) {
        let mut document = json!({ "type": "Note" });
        for (key, value) in &entries {
            document[key.as_str()] = value.clone();
        }
        let out = read(&document).to_value().unwrap();
        prop_assert_eq!(out, document);
    }

    #[test]
    fn prop_actor_order_is_preserved(
        paths in proptest::collection::vec("[a-z]{1,8}", 2..8),
    ) {
        let actors: Vec<Json> = paths
            .iter()
            .map(|p| Json::from(format!("https://a.example/{p}")))
            .collect();
        let document = json!({ "type": "Follow", "actor": actors });
        let out = read(&document).to_value().unwrap();
        prop_assert_eq!(out, document);
    }
}
