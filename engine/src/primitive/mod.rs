//! Primitive codecs.
//!
//! Every codec answers in three ways: `Ok(Some(_))` when the raw value
//! decodes, `Ok(None)` when the raw value is not structurally eligible (a
//! classification miss), and `Err(_)` when it is eligible but its content
//! fails the grammar. Decoding never mutates anything, so a failed trial
//! leaves no trace.

mod duration;
mod language;

pub use duration::Duration;
pub use language::{decode_language_map, is_language_tag};

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{Number, Value as Json};
use streams_vocab::Range;
use url::{ParseError, Url};

use crate::error::FormatError;
use crate::value::Value;

/// Decodes `raw` as the scalar kind `range`.
///
/// Embedded ranges (`Object`, `Link`, `Collection`) are never eligible here;
/// they are resolved through the type registry instead.
///
/// # Errors
///
/// Returns a [`FormatError`] when `raw` has the right JSON shape for `range`
/// but its content is malformed.
pub fn decode(range: Range, raw: &Json) -> Result<Option<Value>, FormatError> {
    Ok(match range {
        Range::Object | Range::Link | Range::Collection => None,
        Range::Iri => decode_iri(raw)?.map(Value::Iri),
        Range::DateTime => decode_date_time(raw)?.map(Value::DateTime),
        Range::Duration => match raw.as_str() {
            Some(s) => Some(Value::Duration(s.parse()?)),
            None => None,
        },
        Range::Float => raw.as_f64().map(Value::Float),
        Range::NonNegativeInteger => decode_non_negative_integer(raw)?.map(Value::NonNegativeInteger),
        Range::Boolean => raw.as_bool().map(Value::Boolean),
        Range::String => raw.as_str().map(|s| Value::String(s.to_owned())),
        Range::MediaType => decode_media_type(raw)?.map(Value::MediaType),
        Range::LanguageTag => match raw.as_str() {
            Some(s) if is_language_tag(s) => Some(Value::LanguageTag(s.to_owned())),
            Some(s) => return Err(FormatError::LanguageTag(s.to_owned())),
            None => None,
        },
    })
}

/// Decodes an absolute IRI.
///
/// Relative references and blank-node labels (`/notes/1`, `../x`, `_:b0`)
/// are not eligible; they fall through to later candidates or stay opaque.
///
/// # Errors
///
/// Returns [`FormatError::Iri`] for an absolute-looking string that does not
/// parse.
pub fn decode_iri(raw: &Json) -> Result<Option<Url>, FormatError> {
    let Some(s) = raw.as_str() else {
        return Ok(None);
    };
    match Url::parse(s) {
        Ok(url) => Ok(Some(url)),
        Err(ParseError::RelativeUrlWithoutBase) => Ok(None),
        Err(source) => Err(FormatError::Iri {
            value: s.to_owned(),
            source,
        }),
    }
}

/// Decodes an RFC 3339 date-time, keeping its original offset.
///
/// # Errors
///
/// Returns [`FormatError::DateTime`] for a string that does not parse.
pub fn decode_date_time(raw: &Json) -> Result<Option<DateTime<FixedOffset>>, FormatError> {
    let Some(s) = raw.as_str() else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(s)
        .map(Some)
        .map_err(|source| FormatError::DateTime {
            value: s.to_owned(),
            source,
        })
}

/// Encodes a date-time as RFC 3339, using `Z` for UTC.
#[must_use]
pub fn encode_date_time(value: &DateTime<FixedOffset>) -> Json {
    Json::String(value.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

/// Decodes a non-negative integer from any JSON number.
///
/// # Errors
///
/// Returns [`FormatError::NonNegativeInteger`] for negative or fractional
/// numbers.
pub fn decode_non_negative_integer(raw: &Json) -> Result<Option<u64>, FormatError> {
    match raw {
        Json::Number(n) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| FormatError::NonNegativeInteger(n.to_string())),
        _ => Ok(None),
    }
}

/// Encodes a float.
///
/// # Errors
///
/// Returns [`FormatError::NonFiniteFloat`] for NaN and infinities, which JSON
/// cannot carry.
pub fn encode_float(value: f64) -> Result<Json, FormatError> {
    Number::from_f64(value)
        .map(Json::Number)
        .ok_or(FormatError::NonFiniteFloat(value))
}

/// Decodes a `type/subtype` media type, parameters allowed.
///
/// # Errors
///
/// Returns [`FormatError::MediaType`] for strings without a non-empty type
/// and subtype.
pub fn decode_media_type(raw: &Json) -> Result<Option<String>, FormatError> {
    let Some(s) = raw.as_str() else {
        return Ok(None);
    };
    let essence = s.split(';').next().unwrap_or_default().trim();
    let valid = essence.split_once('/').is_some_and(|(type_, subtype)| {
        is_token(type_) && is_token(subtype)
    });
    if valid {
        Ok(Some(s.to_owned()))
    } else {
        Err(FormatError::MediaType(s.to_owned()))
    }
}

/// RFC 6838 restricted-name characters.
fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn iri_requires_absolute_form() {
        let url = decode_iri(&json!("https://a.example/x")).unwrap().unwrap();
        assert_eq!(url.as_str(), "https://a.example/x");
        assert!(decode_iri(&json!(42)).unwrap().is_none());
        assert!(matches!(
            decode_iri(&json!("https://exa mple.com/")),
            Err(FormatError::Iri { .. })
        ));
    }

    #[test]
    fn relative_references_are_not_eligible() {
        for s in ["/notes/1", "../x", "_:b0", "not an iri"] {
            assert_eq!(decode_iri(&json!(s)).unwrap(), None, "{s}");
        }
    }

    #[test]
    fn date_time_round_trips_utc_and_offsets() {
        for s in ["2015-01-25T12:34:56Z", "2014-12-12T12:12:12+02:00", "2016-05-10T00:00:00.500Z"] {
            let parsed = decode_date_time(&json!(s)).unwrap().unwrap();
            assert_eq!(encode_date_time(&parsed), json!(s));
        }
        assert!(matches!(
            decode_date_time(&json!("yesterday")),
            Err(FormatError::DateTime { .. })
        ));
    }

    #[test]
    fn float_accepts_any_number() {
        assert_eq!(decode(Range::Float, &json!(120.5)).unwrap(), Some(Value::Float(120.5)));
        assert_eq!(decode(Range::Float, &json!(3)).unwrap(), Some(Value::Float(3.0)));
        assert_eq!(decode(Range::Float, &json!("3")).unwrap(), None);
        assert!(encode_float(f64::NAN).is_err());
    }

    #[test]
    fn non_negative_integer_rejects_signs_and_fractions() {
        assert_eq!(decode_non_negative_integer(&json!(7)).unwrap(), Some(7));
        assert!(decode_non_negative_integer(&json!(-1)).is_err());
        assert!(decode_non_negative_integer(&json!(1.5)).is_err());
        assert_eq!(decode_non_negative_integer(&json!("7")).unwrap(), None);
    }

    #[test]
    fn media_types() {
        assert!(decode_media_type(&json!("text/html")).unwrap().is_some());
        assert!(decode_media_type(&json!("text/html; charset=utf-8")).unwrap().is_some());
        assert!(decode_media_type(&json!("application/ld+json")).unwrap().is_some());
        assert!(decode_media_type(&json!("html")).is_err());
        assert!(decode_media_type(&json!("/html")).is_err());
    }

    #[test]
    fn embedded_ranges_are_never_scalar_eligible() {
        for range in [Range::Object, Range::Link, Range::Collection] {
            assert_eq!(decode(range, &json!("https://a.example")).unwrap(), None);
        }
    }

    #[test]
    fn language_tags() {
        assert_eq!(
            decode(Range::LanguageTag, &json!("en-GB")).unwrap(),
            Some(Value::LanguageTag("en-GB".into()))
        );
        assert!(decode(Range::LanguageTag, &json!("not a tag")).is_err());
    }
}
