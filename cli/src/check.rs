//! Document checks: decode, encode, decode again and compare.

use std::fs;
use std::path::Path;

use serde_json::Value as Json;
use streams_engine::{decode, DecodeOptions, TypeRegistry};
use tracing::debug;

use crate::inspect::{opaque_paths, plural};
use crate::report::{CheckReport, CheckResult};

/// Checks one parsed document.
///
/// Hard errors and round trips that change the encoding are failures;
/// opaque content is a warning listing where it sits.
#[must_use]
pub fn check_document(
    subject: &str,
    document: &Json,
    registry: &dyn TypeRegistry,
    options: &DecodeOptions,
) -> CheckResult {
    let record = match decode(document, registry, options) {
        Ok(record) => record,
        Err(e) => return CheckResult::fail(subject, format!("decode failed: {e}")),
    };
    let encoded = match record.to_value() {
        Ok(encoded) => encoded,
        Err(e) => return CheckResult::fail(subject, format!("encode failed: {e}")),
    };
    let reencoded = match decode(&encoded, registry, options).and_then(|r| r.to_value()) {
        Ok(reencoded) => reencoded,
        Err(e) => return CheckResult::fail(subject, format!("re-decode failed: {e}")),
    };
    if encoded != reencoded {
        return CheckResult::fail_with_details(
            subject,
            "round trip changed the document",
            vec![format!("first:  {encoded}"), format!("second: {reencoded}")],
        );
    }

    let opaque = opaque_paths(&record);
    debug!(subject, opaque = opaque.len(), "document checked");
    if opaque.is_empty() {
        CheckResult::pass(subject, format!("{} round-tripped", record.type_name()))
    } else {
        CheckResult::warn(
            subject,
            format!(
                "{} round-tripped with {} kept opaque",
                record.type_name(),
                plural(opaque.len(), "value")
            ),
            opaque,
        )
    }
}

/// Reads and checks the document at `path`. Unreadable or unparsable files
/// are failures.
#[must_use]
pub fn check_file(path: &Path, registry: &dyn TypeRegistry, options: &DecodeOptions) -> CheckResult {
    let subject = path.display().to_string();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => return CheckResult::fail(subject, format!("cannot read: {e}")),
    };
    match serde_json::from_str::<Json>(&text) {
        Ok(document) => check_document(&subject, &document, registry, options),
        Err(e) => CheckResult::fail(subject, format!("not JSON: {e}")),
    }
}

/// Checks every file in `paths`, in order.
#[must_use]
pub fn check_files<P: AsRef<Path>>(
    paths: &[P],
    registry: &dyn TypeRegistry,
    options: &DecodeOptions,
) -> CheckReport {
    let mut report = CheckReport::new();
    for path in paths {
        report.push(check_file(path.as_ref(), registry, options));
    }
    report
}
