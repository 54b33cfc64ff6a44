//! Flattened schema checks against the published vocabulary.

use streams_vocab::{Range, TypeKind, Vocabulary};

#[test]
fn move_inherits_object_and_activity_properties() {
    let schema = Vocabulary::full().schema("Move").expect("Move");
    assert_eq!(schema.ancestors, ["Activity", "Object"]);
    // Object's properties come first, in declaration order.
    assert_eq!(schema.properties[0].name, "id");
    let actor = schema.position("actor").expect("actor");
    let name = schema.position("name").expect("name");
    assert!(name < actor);
    for prop in ["actor", "object", "target", "origin", "result", "instrument"] {
        let def = schema.property(prop).expect(prop);
        assert!(!def.functional, "{prop} should be repeatable");
        assert_eq!(def.ranges, [Range::Object, Range::Link, Range::Iri]);
    }
}

#[test]
fn intransitive_activities_have_no_object() {
    let vocabulary = Vocabulary::full();
    for name in ["IntransitiveActivity", "Arrive", "Travel", "Question"] {
        let schema = vocabulary.schema(name).expect(name);
        assert!(schema.is_a("Activity"), "{name}");
        assert!(schema.property("object").is_none(), "{name} has object");
        assert!(schema.property("actor").is_some(), "{name} lacks actor");
    }
}

#[test]
fn place_altitude_tries_float_before_iri() {
    let schema = Vocabulary::full().schema("Place").expect("Place");
    let altitude = schema.property("altitude").expect("altitude");
    assert!(altitude.functional);
    assert_eq!(altitude.ranges, [Range::Float, Range::Iri]);
}

#[test]
fn links_are_link_kind() {
    let vocabulary = Vocabulary::full();
    let mention = vocabulary.schema("Mention").expect("Mention");
    assert_eq!(mention.kind, TypeKind::Link);
    assert!(mention.property("href").is_some());
    assert_eq!(vocabulary.schema("Note").map(|s| s.kind), Some(TypeKind::Object));
}

#[test]
fn text_properties_accept_language_maps() {
    let schema = Vocabulary::full().schema("Note").expect("Note");
    for key in ["nameMap", "contentMap", "summaryMap"] {
        assert!(schema.owns_key(key), "{key}");
    }
    assert!(!schema.owns_key("actor"));
    assert!(!schema.owns_key("@context"));
}

#[test]
fn ordered_collections_swap_items_for_ordered_items() {
    let vocabulary = Vocabulary::full();
    let ordered = vocabulary.schema("OrderedCollectionPage").expect("page");
    assert!(ordered.property("items").is_none());
    assert!(ordered.property("orderedItems").is_some());
    assert!(ordered.property("partOf").is_some());
    assert!(ordered.is_a("Collection"));
}
