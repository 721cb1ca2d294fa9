//! Table queries: formats for a country, the list of countries.

use anyhow::Context;
use postcode_domain::Validator;
use postcode_settings::Overrides;
use postcode_types::FormatSpec;

/// A country and its accepted formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountrySummary {
    pub country: String,
    pub formats: Vec<FormatSpec>,
}

fn load_validator(config_text: &str, overrides: Overrides) -> anyhow::Result<Validator> {
    let resolved =
        postcode_settings::load_config(config_text, overrides).context("resolve config")?;
    Validator::new(resolved.table).context("compile format table")
}

/// Formats for `country` in table order. Unknown countries are an error.
pub fn run_formats(
    config_text: &str,
    overrides: Overrides,
    country: &str,
) -> anyhow::Result<Vec<FormatSpec>> {
    let validator = load_validator(config_text, overrides)?;
    let formats = validator.formats(country)?;
    Ok(formats.to_vec())
}

pub fn run_has_country(
    config_text: &str,
    overrides: Overrides,
    country: &str,
) -> anyhow::Result<bool> {
    let validator = load_validator(config_text, overrides)?;
    Ok(validator.has_country(country))
}

/// Every known country in sorted order.
pub fn run_countries(
    config_text: &str,
    overrides: Overrides,
) -> anyhow::Result<Vec<CountrySummary>> {
    let validator = load_validator(config_text, overrides)?;
    Ok(validator
        .table()
        .iter()
        .map(|(country, formats)| CountrySummary {
            country: country.to_string(),
            formats: formats.to_vec(),
        })
        .collect())
}
