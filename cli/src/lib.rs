//! Command-line front end for the streams engine.
//!
//! The `streams` binary wraps these modules:
//!
//! - [`check`] decodes, re-encodes and re-decodes documents and reports the
//!   outcome per file.
//! - [`inspect`] renders a decoded record for humans.
//! - [`config`] loads decode options from a TOML file.
//! - [`report`] aggregates check results.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod check;
pub mod config;
pub mod inspect;
pub mod report;

pub use check::{check_document, check_file, check_files};
pub use config::Config;
pub use report::{CheckReport, CheckResult, Severity};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value as Json};
use streams_engine::{decode, DecodeOptions, Record, TypeRegistry, CONTEXT_KEY};
use streams_vocab::model::iris;

/// Reads a JSON document from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not JSON.
pub fn read_document(path: &Path) -> Result<Json> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Reads and decodes the document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the engine rejects it.
pub fn decode_file(path: &Path, registry: &dyn TypeRegistry, options: &DecodeOptions) -> Result<Record> {
    let document = read_document(path)?;
    decode(&document, registry, options).with_context(|| format!("decoding {}", path.display()))
}

/// Decodes and re-encodes the document at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read, decoded or encoded.
pub fn roundtrip_file(path: &Path, registry: &dyn TypeRegistry, options: &DecodeOptions) -> Result<Json> {
    let record = decode_file(path, registry, options)?;
    record
        .to_value()
        .with_context(|| format!("encoding {}", path.display()))
}

/// Puts the ActivityStreams context reference in front of an encoded
/// document. Non-object values are returned unchanged.
#[must_use]
pub fn with_context(encoded: Json) -> Json {
    match encoded {
        Json::Object(fields) => {
            let mut out = Map::new();
            out.insert(CONTEXT_KEY.to_owned(), Json::from(iris::AS_CONTEXT));
            out.extend(fields);
            Json::Object(out)
        }
        other => other,
    }
}
