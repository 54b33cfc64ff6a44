//! Human-readable views of a decoded record.

use streams_engine::{Property, Record, Value};

/// Describes every populated property of `record`, one line each, with
/// embedded records indented below the property that holds them.
#[must_use]
pub fn describe(record: &Record) -> Vec<String> {
    let mut lines = Vec::new();
    describe_into(record, 0, &mut lines);
    lines
}

fn describe_into(record: &Record, indent: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(indent);
    let types: Vec<String> = record.types().iter().map(ToString::to_string).collect();
    lines.push(format!("{pad}{} (type: [{}])", record.type_name(), types.join(", ")));

    for property in record.properties() {
        if !property.is_empty() {
            let kinds: Vec<&str> = property.iter().map(Value::kind).collect();
            lines.push(format!(
                "{pad}  {} ({}, {}): {}",
                property.name(),
                cardinality(property),
                plural(property.len(), "value"),
                kinds.join(", ")
            ));
        }
        let languages = property.language_map();
        if languages.is_present() {
            let tags: Vec<&str> = languages.languages().collect();
            lines.push(format!("{pad}  {}Map: [{}]", property.name(), tags.join(", ")));
        }
        for value in property.iter() {
            if let Some(nested) = value.as_object().or_else(|| value.as_link()) {
                describe_into(nested, indent + 2, lines);
            }
        }
    }

    for (key, raw) in record.unknown().iter() {
        lines.push(format!("{pad}  {key} (opaque): {raw}"));
    }
}

fn cardinality(property: &Property) -> &'static str {
    if property.is_functional() {
        "functional"
    } else {
        "non-functional"
    }
}

pub(crate) fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Lists the paths of everything `record` keeps opaque: unknown keys and
/// property values that matched no candidate kind, at any depth.
///
/// Values of non-functional properties are addressed as `name[index]`.
#[must_use]
pub fn opaque_paths(record: &Record) -> Vec<String> {
    let mut paths = Vec::new();
    collect_opaque(record, "", &mut paths);
    paths
}

fn collect_opaque(record: &Record, prefix: &str, paths: &mut Vec<String>) {
    for property in record.properties() {
        for (index, value) in property.iter().enumerate() {
            let path = if property.is_functional() {
                format!("{prefix}{}", property.name())
            } else {
                format!("{prefix}{}[{index}]", property.name())
            };
            match value {
                Value::Unknown(_) => paths.push(path),
                Value::Object(nested) | Value::Link(nested) => {
                    collect_opaque(nested, &format!("{path}."), paths);
                }
                _ => {}
            }
        }
    }
    paths.extend(record.unknown().iter().map(|(key, _)| format!("{prefix}{key}")));
}
