use crate::model::PostcodeConfigV1;
use anyhow::Context;
use postcode_domain::FormatTable;
use postcode_types::{FormatSpec, ids};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub base: Option<String>,
    pub ignore_spaces: Option<bool>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub table: FormatTable,
    pub ignore_spaces: bool,
}

pub fn resolve_config(
    cfg: PostcodeConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != ids::SCHEMA_CONFIG_V1
    {
        anyhow::bail!(
            "unsupported config schema: {schema} (expected {})",
            ids::SCHEMA_CONFIG_V1
        );
    }

    let base = overrides
        .base
        .clone()
        .or(cfg.base.clone())
        .unwrap_or_else(|| ids::BASE_BUILTIN.to_string());
    let mut table = base_table(&base)?;

    for country in &cfg.remove {
        validate_country(country)?;
        if table.remove(country).is_none() {
            anyhow::bail!("cannot remove {country}: not in the {base} table");
        }
    }

    for (country, cc) in cfg.countries {
        validate_country(&country)?;
        let formats = cc
            .formats
            .into_iter()
            .map(|f| validate_format(&country, f))
            .collect::<anyhow::Result<Vec<FormatSpec>>>()
            .with_context(|| format!("invalid formats for {country}"))?;
        table.insert(country, formats);
    }

    let ignore_spaces = overrides
        .ignore_spaces
        .or(cfg.ignore_spaces)
        .unwrap_or(false);

    Ok(ResolvedConfig {
        table,
        ignore_spaces,
    })
}

fn base_table(v: &str) -> anyhow::Result<FormatTable> {
    match v {
        ids::BASE_BUILTIN => Ok(FormatTable::builtin()),
        ids::BASE_EMPTY => Ok(FormatTable::empty()),
        other => anyhow::bail!("unknown base: {other} (expected 'builtin' or 'empty')"),
    }
}

fn validate_country(country: &str) -> anyhow::Result<()> {
    if country.is_empty() {
        anyhow::bail!("country code must not be empty");
    }
    if country.chars().any(char::is_whitespace) {
        anyhow::bail!("country code must not contain whitespace: {country:?}");
    }
    Ok(())
}

fn validate_format(country: &str, format: String) -> anyhow::Result<FormatSpec> {
    if format.is_empty() {
        anyhow::bail!("empty format for {country}");
    }
    Ok(FormatSpec::new(format))
}
