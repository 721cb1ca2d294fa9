use crate::FormatSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for check reports.
pub const SCHEMA_REPORT_V1: &str = "postcode.report.v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    Valid,
    Invalid,
    UnknownCountry,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Outcome for a single `(country, postal_code)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    pub country: String,
    pub postal_code: String,
    pub status: CheckStatus,

    /// The first format that accepted the code. Absent for countries without
    /// an enforced format, and for invalid or unknown entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_format: Option<FormatSpec>,

    /// Formats the code was checked against (empty for unknown countries).
    #[serde(default)]
    pub formats: Vec<FormatSpec>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Counts {
    pub valid: u32,
    pub invalid: u32,
    pub unknown_country: u32,
}

impl Counts {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut counts = Counts::default();
        for r in results {
            match r.status {
                CheckStatus::Valid => counts.valid += 1,
                CheckStatus::Invalid => counts.invalid += 1,
                CheckStatus::UnknownCountry => counts.unknown_country += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.valid + self.invalid + self.unknown_country
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    pub schema: String,
    pub tool: ToolMeta,
    pub ignore_spaces: bool,
    pub verdict: Verdict,
    pub counts: Counts,
    pub results: Vec<CheckResult>,
}

impl CheckReport {
    /// A report fails as soon as one entry is not valid.
    pub fn verdict_for(counts: &Counts) -> Verdict {
        if counts.invalid > 0 || counts.unknown_country > 0 {
            Verdict::Fail
        } else {
            Verdict::Pass
        }
    }
}
