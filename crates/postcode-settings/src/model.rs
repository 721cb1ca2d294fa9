use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `postcode.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PostcodeConfigV1 {
    /// Optional schema string for tooling (`postcode.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Table to start from: `builtin` (default) or `empty`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Default for space-tolerant matching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_spaces: Option<bool>,

    /// Countries dropped from the base table.
    #[serde(default)]
    pub remove: Vec<String>,

    /// Map of country code -> formats. Adds the country or replaces its formats.
    #[serde(default)]
    pub countries: BTreeMap<String, CountryConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CountryConfig {
    /// Accepted formats. An empty list accepts any postal code.
    #[serde(default)]
    pub formats: Vec<String>,
}
