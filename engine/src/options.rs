//! Decode configuration.

use serde::{Deserialize, Serialize};

/// Options that tune how documents are decoded.
///
/// Deserializable so front ends can load it from a configuration file:
///
/// ```
/// let options: streams_engine::DecodeOptions =
///     serde_json::from_str(r#"{ "max-depth": 8 }"#).unwrap();
/// assert_eq!(options.max_depth, 8);
/// assert!(!options.strict_scalar_maps);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DecodeOptions {
    /// Maximum nesting depth of embedded objects below the root record.
    pub max_depth: usize,
    /// Reject a map given to a property whose candidates are all scalars,
    /// instead of keeping it opaque.
    pub strict_scalar_maps: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            strict_scalar_maps: false,
        }
    }
}
