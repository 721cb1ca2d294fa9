//! Config parsing and format table resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CountryConfig, PostcodeConfigV1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `postcode.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<PostcodeConfigV1> {
    let cfg: PostcodeConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the table and matching defaults used by the validator (base + removals + overrides).
pub fn resolve_config(
    cfg: PostcodeConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// Parse `input` when it has content, otherwise fall back to defaults, then resolve.
pub fn load_config(input: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if input.trim().is_empty() {
        PostcodeConfigV1::default()
    } else {
        parse_config_toml(input)?
    };
    resolve_config(cfg, overrides)
}
