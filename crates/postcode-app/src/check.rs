//! The `check` use case: validate postal codes and produce a report.

use anyhow::Context;
use postcode_domain::{MatchOptions, ValidationError, Validator};
use postcode_settings::{Overrides, ResolvedConfig};
use postcode_types::{
    CheckReport, CheckResult, CheckStatus, Counts, SCHEMA_REPORT_V1, ToolMeta, Verdict, ids,
};

/// One postal code to check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckEntry {
    pub country: String,
    pub postal_code: String,
}

impl CheckEntry {
    pub fn new(country: impl Into<String>, postal_code: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            postal_code: postal_code.into(),
        }
    }
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Codes to check, reported in this order.
    pub entries: Vec<CheckEntry>,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: CheckReport,
    /// The resolved configuration used.
    pub resolved: ResolvedConfig,
}

/// Run the check use case: resolve config, build the validator, check every entry.
///
/// An unknown country does not abort the run; it is reported per entry and fails the verdict.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let resolved = postcode_settings::load_config(input.config_text, input.overrides.clone())
        .context("resolve config")?;
    let validator = Validator::new(resolved.table.clone()).context("compile format table")?;
    let options = MatchOptions {
        ignore_spaces: resolved.ignore_spaces,
    };

    let results: Vec<CheckResult> = input
        .entries
        .into_iter()
        .map(|entry| check_entry(&validator, entry, options))
        .collect();

    let counts = Counts::from_results(&results);
    let verdict = CheckReport::verdict_for(&counts);
    tracing::info!(
        checked = counts.total(),
        valid = counts.valid,
        invalid = counts.invalid,
        unknown_country = counts.unknown_country,
        "check finished"
    );

    let report = CheckReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        ignore_spaces: options.ignore_spaces,
        verdict,
        counts,
        results,
    };

    Ok(CheckOutput { report, resolved })
}

fn check_entry(validator: &Validator, entry: CheckEntry, options: MatchOptions) -> CheckResult {
    let CheckEntry {
        country,
        postal_code,
    } = entry;

    let outcome = validator.formats(&country).and_then(|formats| {
        let valid = validator.is_valid_with(&country, &postal_code, options)?;
        let matched = validator.matching_format(&country, &postal_code, options)?;
        Ok((formats.to_vec(), valid, matched.cloned()))
    });

    match outcome {
        Ok((formats, valid, matched_format)) => CheckResult {
            status: if valid {
                CheckStatus::Valid
            } else {
                CheckStatus::Invalid
            },
            matched_format,
            formats,
            country,
            postal_code,
        },
        Err(ValidationError::UnknownCountry(_)) => CheckResult {
            status: CheckStatus::UnknownCountry,
            matched_format: None,
            formats: Vec::new(),
            country,
            postal_code,
        },
    }
}

/// Map verdict to exit code: 0 = pass, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
