//! Error types for decoding and encoding records.
//!
//! Two tiers exist. Classification misses never surface here: a value that
//! matches no candidate kind is kept opaque. Everything in [`Error`] is a hard
//! failure that aborts the enclosing decode or encode.

use thiserror::Error;

/// A primitive value that was eligible for a codec but failed its grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The string is not an absolute IRI.
    #[error("`{value}` is not an absolute IRI: {source}")]
    Iri {
        /// The offending string.
        value: String,
        /// Parser diagnostic.
        source: url::ParseError,
    },
    /// The string is not an RFC 3339 date-time.
    #[error("`{value}` is not an RFC 3339 date-time: {source}")]
    DateTime {
        /// The offending string.
        value: String,
        /// Parser diagnostic.
        source: chrono::ParseError,
    },
    /// The string is not an ISO 8601 duration.
    #[error("`{0}` is not an ISO 8601 duration")]
    Duration(String),
    /// The number is negative or fractional.
    #[error("{0} is not a non-negative integer")]
    NonNegativeInteger(String),
    /// The string is not a `type/subtype` media type.
    #[error("`{0}` is not a media type")]
    MediaType(String),
    /// The string is not a well-formed BCP 47 tag.
    #[error("`{0}` is not a BCP 47 language tag")]
    LanguageTag(String),
    /// A float that JSON cannot represent.
    #[error("{0} is not a finite number")]
    NonFiniteFloat(f64),
}

/// Errors returned by the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A primitive failed its grammar.
    ///
    /// `property` is a dotted path when the failure happened inside an
    /// embedded object (e.g. `object.published`).
    #[error("property `{property}`: {source}")]
    Format {
        /// Path of the offending property.
        property: String,
        /// The codec failure.
        source: FormatError,
    },
    /// A map was given to a property that only holds scalars, and
    /// [`DecodeOptions::strict_scalar_maps`](crate::DecodeOptions::strict_scalar_maps)
    /// is enabled.
    #[error("property `{property}` was given a map but only accepts scalar values")]
    UnexpectedMap {
        /// Path of the offending property.
        property: String,
    },
    /// Embedded objects nest deeper than the configured limit.
    #[error("embedded objects nest deeper than {max_depth} levels")]
    DepthExceeded {
        /// The configured limit.
        max_depth: usize,
    },
    /// The document root is not a JSON object.
    #[error("document is not a JSON object")]
    NotAnObject,
    /// No registered type matches the root discriminator.
    #[error("no registered type matches discriminator {found:?}")]
    UnresolvedType {
        /// The discriminator strings that were tried.
        found: Vec<String>,
    },
    /// The record's type does not define the property.
    #[error("type `{type_name}` has no property `{property}`")]
    UnknownProperty {
        /// Canonical type name of the record.
        type_name: &'static str,
        /// Requested property name.
        property: String,
    },
    /// The property does not accept a natural-language map.
    #[error("property `{property}` has no natural-language map")]
    NoLanguageMap {
        /// Requested property name.
        property: String,
    },
    /// An index-addressed operation past the end of a property.
    #[error("index {index} out of bounds for property `{property}` holding {len} value(s)")]
    IndexOutOfBounds {
        /// Property name.
        property: String,
        /// Requested index.
        index: usize,
        /// Number of values held.
        len: usize,
    },
    /// An insert into a functional property that already holds its value.
    #[error("functional property `{property}` already holds a value")]
    FunctionalOccupied {
        /// Property name.
        property: String,
    },
}

impl Error {
    /// Prefixes the property path of a decode or encode failure with the
    /// property it was nested under. Other variants are returned unchanged.
    #[must_use]
    pub fn within(self, outer: &str) -> Self {
        let nest = |property: String| {
            if property.is_empty() {
                outer.to_owned()
            } else {
                format!("{outer}.{property}")
            }
        };
        match self {
            Error::Format { property, source } => Error::Format {
                property: nest(property),
                source,
            },
            Error::UnexpectedMap { property } => Error::UnexpectedMap {
                property: nest(property),
            },
            other => other,
        }
    }

    /// Returns the offending property path, if the error names one.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        match self {
            Error::Format { property, .. }
            | Error::UnexpectedMap { property }
            | Error::UnknownProperty { property, .. }
            | Error::NoLanguageMap { property }
            | Error::IndexOutOfBounds { property, .. }
            | Error::FunctionalOccupied { property } => Some(property),
            _ => None,
        }
    }
}

impl From<FormatError> for Error {
    /// Wraps a codec failure with an empty path; callers attach the property
    /// through [`Error::within`].
    fn from(source: FormatError) -> Self {
        Error::Format {
            property: String::new(),
            source,
        }
    }
}

/// Convenience alias used throughout the engine.
pub type Result<T, E = Error> = std::result::Result<T, E>;
