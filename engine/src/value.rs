//! The polymorphic property cell.
//!
//! A [`Value`] is one occurrence of a property value. Exactly one kind is
//! populated at a time; a raw value that matches none of the property's
//! candidate kinds is kept verbatim as [`Value::Unknown`].

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value as Json};
use streams_vocab::{PropertyDef, Range, Schema};
use tracing::{debug, trace};
use url::Url;

use crate::error::{Error, Result};
use crate::primitive::{self, Duration};
use crate::record::{discriminators, Decoder, Record};

/// One property occurrence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An embedded object (including collections).
    Object(Box<Record>),
    /// An embedded link.
    Link(Box<Record>),
    /// A bare reference to another resource.
    Iri(Url),
    /// `xsd:dateTime`.
    DateTime(DateTime<FixedOffset>),
    /// `xsd:duration`.
    Duration(Duration),
    /// `xsd:float`.
    Float(f64),
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger(u64),
    /// `xsd:boolean`.
    Boolean(bool),
    /// `xsd:string`.
    String(String),
    /// A MIME media type.
    MediaType(String),
    /// A BCP 47 language tag.
    LanguageTag(String),
    /// A raw value whose shape matched no candidate kind.
    Unknown(Json),
}

impl Value {
    /// Decodes one raw occurrence of `prop`.
    ///
    /// Maps carrying a `type` discriminator are offered to the embedded
    /// candidates first (objects, links and collections in declared order, each
    /// against every discriminator string in order). Maps without a
    /// discriminator are never resolved. Other values are offered to the scalar
    /// candidates in declared order; the first success wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when no candidate succeeded and at least one
    /// scalar codec rejected the content, [`Error::UnexpectedMap`] under
    /// strict scalar maps, or any error raised while decoding an embedded
    /// record.
    pub fn decode(raw: &Json, prop: &PropertyDef, decoder: &Decoder<'_>) -> Result<Value> {
        if let Json::Object(map) = raw {
            return Self::decode_map(raw, map, prop, decoder);
        }

        let mut first_error = None;
        for range in prop.ranges.iter().filter(|r| !r.is_embedded()) {
            match primitive::decode(*range, raw) {
                Ok(Some(value)) => return Ok(value),
                Ok(None) => {}
                Err(e) => {
                    first_error.get_or_insert(e);
                }
            }
        }
        if let Some(source) = first_error {
            return Err(Error::from(source).within(prop.name));
        }
        debug!(property = prop.name, "no candidate kind matched; keeping value opaque");
        Ok(Value::Unknown(raw.clone()))
    }

    fn decode_map(
        raw: &Json,
        map: &Map<String, Json>,
        prop: &PropertyDef,
        decoder: &Decoder<'_>,
    ) -> Result<Value> {
        if !prop.accepts_embedded() && decoder.options().strict_scalar_maps {
            return Err(Error::UnexpectedMap {
                property: prop.name.to_owned(),
            });
        }

        let names = discriminators(map);
        if names.is_empty() {
            debug!(property = prop.name, "map has no discriminator; keeping value opaque");
            return Ok(Value::Unknown(raw.clone()));
        }

        let registry = decoder.registry();
        for range in prop.ranges.iter().filter(|r| r.is_embedded()) {
            for name in &names {
                let schema: Option<&'static Schema> = match range {
                    Range::Object => registry.resolve_object(name),
                    Range::Collection => registry
                        .resolve_object(name)
                        .filter(|s| s.is_a("Collection")),
                    Range::Link => registry.resolve_link(name),
                    _ => None,
                };
                let Some(schema) = schema else {
                    continue;
                };
                trace!(property = prop.name, type_name = schema.name, "resolved embedded type");
                let nested = decoder.descend()?;
                let mut record = Record::new(schema);
                record
                    .deserialize(map, &nested)
                    .map_err(|e| e.within(prop.name))?;
                return Ok(match range {
                    Range::Link => Value::Link(Box::new(record)),
                    _ => Value::Object(Box::new(record)),
                });
            }
        }

        debug!(
            property = prop.name,
            types = ?names,
            "no candidate type resolved; keeping value opaque"
        );
        Ok(Value::Unknown(raw.clone()))
    }

    /// Encodes the populated kind back to its raw form.
    ///
    /// Codec failures carry an empty property path; the owning property
    /// attaches its name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] for a float JSON cannot represent, or any
    /// error raised while encoding an embedded record.
    pub fn encode(&self) -> Result<Json> {
        Ok(match self {
            Value::Object(record) | Value::Link(record) => record.to_value()?,
            Value::Iri(url) => Json::String(url.as_str().to_owned()),
            Value::DateTime(dt) => primitive::encode_date_time(dt),
            Value::Duration(d) => Json::String(d.to_string()),
            Value::Float(f) => primitive::encode_float(*f)?,
            Value::NonNegativeInteger(n) => Json::from(*n),
            Value::Boolean(b) => Json::Bool(*b),
            Value::String(s) | Value::MediaType(s) | Value::LanguageTag(s) => {
                Json::String(s.clone())
            }
            Value::Unknown(raw) => raw.clone(),
        })
    }

    /// Returns a short label naming the populated kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Object(_) => "object",
            Value::Link(_) => "link",
            Value::Iri(_) => Range::Iri.as_str(),
            Value::DateTime(_) => Range::DateTime.as_str(),
            Value::Duration(_) => Range::Duration.as_str(),
            Value::Float(_) => Range::Float.as_str(),
            Value::NonNegativeInteger(_) => Range::NonNegativeInteger.as_str(),
            Value::Boolean(_) => Range::Boolean.as_str(),
            Value::String(_) => Range::String.as_str(),
            Value::MediaType(_) => Range::MediaType.as_str(),
            Value::LanguageTag(_) => Range::LanguageTag.as_str(),
            Value::Unknown(_) => "unknown",
        }
    }

    /// Returns the embedded object, if this is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Record> {
        match self {
            Value::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the embedded link, if this is one.
    #[must_use]
    pub fn as_link(&self) -> Option<&Record> {
        match self {
            Value::Link(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the bare reference, if this is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Url> {
        match self {
            Value::Iri(url) => Some(url),
            _ => None,
        }
    }

    /// Returns the float, if this is one.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text of a string, media type or language tag.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::MediaType(s) | Value::LanguageTag(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the raw value kept for an unrecognized shape.
    #[must_use]
    pub fn as_unknown(&self) -> Option<&Json> {
        match self {
            Value::Unknown(raw) => Some(raw),
            _ => None,
        }
    }

    /// Returns true if the value was kept opaque.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown(_))
    }
}

impl From<Url> for Value {
    fn from(url: Url) -> Self {
        Value::Iri(url)
    }
}

impl From<Record> for Value {
    /// Wraps a record as an object or a link according to its schema.
    fn from(record: Record) -> Self {
        match record.schema().kind {
            streams_vocab::TypeKind::Link => Value::Link(Box::new(record)),
            streams_vocab::TypeKind::Object => Value::Object(Box::new(record)),
        }
    }
}
