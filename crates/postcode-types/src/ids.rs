//! Stable identifiers.

/// Schema id accepted in `postcode.toml`.
pub const SCHEMA_CONFIG_V1: &str = "postcode.config.v1";

/// Base table names accepted by the settings layer.
pub const BASE_BUILTIN: &str = "builtin";
pub const BASE_EMPTY: &str = "empty";

/// Tool name written into reports.
pub const TOOL_NAME: &str = "postcode";
