//! Record assembly and disassembly.
//!
//! A [`Record`] is one typed entity of a document: its discriminator values,
//! one [`Property`] per schema slot, and an [`UnknownBag`] for every key the
//! schema does not define. [`Decoder`] carries the registry, options and
//! current nesting depth through a recursive decode.

use serde::ser::{Error as _, Serialize, Serializer};
use serde_json::{Map, Value as Json};
use streams_vocab::Schema;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::language_map::LanguageMap;
use crate::options::DecodeOptions;
use crate::property::Property;
use crate::registry::TypeRegistry;
use crate::unknown::UnknownBag;
use crate::value::Value;

/// The discriminator key.
pub const TYPE_KEY: &str = "type";

/// The JSON-LD context key, dropped on decode and never emitted.
pub const CONTEXT_KEY: &str = "@context";

/// Returns the string discriminators of a map, in document order.
///
/// Non-string entries in a discriminator list are skipped.
pub(crate) fn discriminators(map: &Map<String, Json>) -> Vec<&str> {
    match map.get(TYPE_KEY) {
        Some(Json::String(name)) => vec![name.as_str()],
        Some(Json::Array(items)) => items.iter().filter_map(Json::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Decode context threaded through nested records.
#[derive(Clone, Copy)]
pub struct Decoder<'a> {
    registry: &'a dyn TypeRegistry,
    options: &'a DecodeOptions,
    depth: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder for a root record.
    #[must_use]
    pub fn new(registry: &'a dyn TypeRegistry, options: &'a DecodeOptions) -> Self {
        Self {
            registry,
            options,
            depth: 0,
        }
    }

    /// Returns the registry embedded types are resolved through.
    #[must_use]
    pub fn registry(&self) -> &'a dyn TypeRegistry {
        self.registry
    }

    /// Returns the decode options.
    #[must_use]
    pub fn options(&self) -> &'a DecodeOptions {
        self.options
    }

    /// Returns how many embedded objects enclose the record being decoded.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns a decoder one nesting level deeper.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthExceeded`] once the configured maximum depth
    /// is reached.
    pub fn descend(&self) -> Result<Self> {
        if self.depth >= self.options.max_depth {
            return Err(Error::DepthExceeded {
                max_depth: self.options.max_depth,
            });
        }
        Ok(Self {
            depth: self.depth + 1,
            ..*self
        })
    }

    /// Decodes a whole document into a record.
    ///
    /// The root type is the first discriminator the registry resolves as an
    /// object, falling back to the first it resolves as a link.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAnObject`] if `document` is not a map,
    /// [`Error::UnresolvedType`] if no discriminator resolves, or any hard
    /// error raised by [`Record::deserialize`].
    pub fn decode(&self, document: &Json) -> Result<Record> {
        let Json::Object(map) = document else {
            return Err(Error::NotAnObject);
        };
        let names = discriminators(map);
        let schema = names
            .iter()
            .find_map(|name| self.registry.resolve_object(name))
            .or_else(|| names.iter().find_map(|name| self.registry.resolve_link(name)))
            .ok_or_else(|| Error::UnresolvedType {
                found: names.iter().map(|name| (*name).to_owned()).collect(),
            })?;
        trace!(type_name = schema.name, "resolved root type");
        let mut record = Record::new(schema);
        record.deserialize(map, self)?;
        Ok(record)
    }
}

fn unknown_property(schema: &Schema, name: &str) -> Error {
    Error::UnknownProperty {
        type_name: schema.name,
        property: name.to_owned(),
    }
}

/// One typed entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: &'static Schema,
    types: Vec<Json>,
    properties: Vec<Property>,
    unknown: UnknownBag,
}

impl Record {
    /// Creates an empty record of `schema`'s type.
    #[must_use]
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            types: Vec::new(),
            properties: schema.properties.iter().copied().map(Property::new).collect(),
            unknown: UnknownBag::new(),
        }
    }

    /// Returns the record's schema.
    #[must_use]
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Returns the canonical type name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.schema.name
    }

    /// Returns the discriminator values as decoded or set. The canonical
    /// name is only added on encode.
    #[must_use]
    pub fn types(&self) -> &[Json] {
        &self.types
    }

    /// Returns the discriminator values for edits. Any JSON value is
    /// accepted.
    pub fn types_mut(&mut self) -> &mut Vec<Json> {
        &mut self.types
    }

    /// Appends a discriminator string.
    pub fn push_type(&mut self, name: impl Into<String>) {
        self.types.push(Json::String(name.into()));
    }

    /// Iterates every property slot in schema order, populated or not.
    pub fn properties(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    /// Returns the property named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn property(&self, name: &str) -> Result<&Property> {
        self.schema
            .position(name)
            .and_then(|i| self.properties.get(i))
            .ok_or_else(|| unknown_property(self.schema, name))
    }

    /// Returns the property named `name` for edits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn property_mut(&mut self, name: &str) -> Result<&mut Property> {
        let schema = self.schema;
        schema
            .position(name)
            .and_then(|i| self.properties.get_mut(i))
            .ok_or_else(|| unknown_property(schema, name))
    }

    /// Returns every value of `name` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn values(&self, name: &str) -> Result<&[Value]> {
        Ok(self.property(name)?.values().as_slice())
    }

    /// Returns the number of values `name` holds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn len(&self, name: &str) -> Result<usize> {
        Ok(self.property(name)?.len())
    }

    /// Returns the value of `name` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property,
    /// or [`Error::IndexOutOfBounds`] if `index` is past the last value.
    pub fn get(&self, name: &str, index: usize) -> Result<&Value> {
        let property = self.property(name)?;
        property.get(index).ok_or_else(|| Error::IndexOutOfBounds {
            property: property.name().to_owned(),
            index,
            len: property.len(),
        })
    }

    /// Replaces every value of `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn set(&mut self, name: &str, value: Value) -> Result<()> {
        self.property_mut(name)?.set(value);
        Ok(())
    }

    /// Inserts `value` before the other values of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or [`Error::FunctionalOccupied`].
    pub fn push_front(&mut self, name: &str, value: Value) -> Result<()> {
        self.property_mut(name)?.push_front(value)
    }

    /// Appends `value` after the other values of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or [`Error::FunctionalOccupied`].
    pub fn push_back(&mut self, name: &str, value: Value) -> Result<()> {
        self.property_mut(name)?.push_back(value)
    }

    /// Inserts `value` into `name` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`], [`Error::IndexOutOfBounds`] or
    /// [`Error::FunctionalOccupied`].
    pub fn insert(&mut self, name: &str, index: usize, value: Value) -> Result<()> {
        self.property_mut(name)?.insert(index, value)
    }

    /// Removes and returns the value of `name` at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or [`Error::IndexOutOfBounds`].
    pub fn remove(&mut self, name: &str, index: usize) -> Result<Value> {
        self.property_mut(name)?.remove(index)
    }

    /// Drops every value of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn clear(&mut self, name: &str) -> Result<()> {
        self.property_mut(name)?.clear();
        Ok(())
    }

    /// Returns the natural-language map of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] if the schema has no such property.
    pub fn language_map(&self, name: &str) -> Result<&LanguageMap> {
        Ok(self.property(name)?.language_map())
    }

    /// Returns the natural-language map of `name` for edits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProperty`] or [`Error::NoLanguageMap`].
    pub fn language_map_mut(&mut self, name: &str) -> Result<&mut LanguageMap> {
        self.property_mut(name)?.language_map_mut()
    }

    /// Returns the keys the schema does not define.
    #[must_use]
    pub fn unknown(&self) -> &UnknownBag {
        &self.unknown
    }

    /// Returns the keys the schema does not define, for edits.
    pub fn unknown_mut(&mut self) -> &mut UnknownBag {
        &mut self.unknown
    }

    /// Reads every key of `map` into this record.
    ///
    /// Schema properties and their `<name>Map` keys are decoded into their
    /// slots, `type` is kept as a list and `@context` is dropped. Every other
    /// key, and any `<name>Map` that is not an object of strings, is copied
    /// verbatim into the unknown bag.
    ///
    /// # Errors
    ///
    /// Returns the first hard error raised by a property. The record may be
    /// partially populated afterwards.
    pub fn deserialize(&mut self, map: &Map<String, Json>, decoder: &Decoder<'_>) -> Result<()> {
        for (key, raw) in map {
            if key == CONTEXT_KEY {
                continue;
            }
            if key == TYPE_KEY {
                self.types = match raw {
                    Json::Array(items) => items.clone(),
                    other => vec![other.clone()],
                };
                continue;
            }
            if let Some(property) = self.slot_mut(key) {
                property.decode(raw, decoder)?;
                continue;
            }
            if let Some(property) = key.strip_suffix("Map").and_then(|base| self.slot_mut(base)) {
                if property.def().natural_language && property.decode_language_map(raw) {
                    continue;
                }
            }
            debug!(type_name = self.schema.name, key = %key, "keeping unrecognized key");
            self.unknown.insert(key.clone(), raw.clone());
        }
        Ok(())
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Property> {
        let index = self.schema.position(name)?;
        self.properties.get_mut(index)
    }

    /// Writes this record back out as a document map.
    ///
    /// `type` comes first and always includes the canonical type name. Schema
    /// properties follow in schema order, each followed by its language map,
    /// then the unknown bag in insertion order. Bag entries that collide with
    /// an emitted key or a property name are skipped; a bag entry under a
    /// `<name>Map` key is emitted only while that language map is absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] naming the offending property if a value
    /// cannot be encoded.
    pub fn serialize(&self) -> Result<Map<String, Json>> {
        let mut out = Map::new();
        out.insert(TYPE_KEY.to_owned(), self.encode_types());
        for property in &self.properties {
            if let Some(raw) = property.encode()? {
                out.insert(property.name().to_owned(), raw);
            }
            if let Some((key, raw)) = property.encode_language_map() {
                out.insert(key, raw);
            }
        }
        for (key, raw) in self.unknown.iter() {
            if key == TYPE_KEY
                || key == CONTEXT_KEY
                || self.schema.property(key).is_some()
                || out.contains_key(key)
            {
                debug!(type_name = self.schema.name, key, "unknown entry shadowed by a schema key");
                continue;
            }
            out.insert(key.to_owned(), raw.clone());
        }
        Ok(out)
    }

    /// Writes this record back out as a JSON value.
    ///
    /// # Errors
    ///
    /// See [`Record::serialize`].
    pub fn to_value(&self) -> Result<Json> {
        self.serialize().map(Json::Object)
    }

    fn encode_types(&self) -> Json {
        let canonical = Json::String(self.schema.name.to_owned());
        let mut types = self.types.clone();
        if !types.contains(&canonical) {
            types.push(canonical);
        }
        if types.len() == 1 {
            if let Some(only) = types.pop() {
                return only;
            }
        }
        Json::Array(types)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        Record::serialize(self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}
