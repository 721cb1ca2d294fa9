//! Render use cases: terminal text and JSON from in-memory reports.

use crate::catalog::CountrySummary;
use anyhow::Context;
use postcode_types::{CheckReport, CheckStatus, Verdict};

/// One line per checked code, then a verdict line.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();

    for r in &report.results {
        let (label, detail) = match r.status {
            CheckStatus::Valid => match &r.matched_format {
                Some(format) => ("valid", format!("matches {format}")),
                None => ("valid", "no format enforced".to_string()),
            },
            CheckStatus::Invalid => ("invalid", format!("expected one of: {}", join(r))),
            CheckStatus::UnknownCountry => ("unknown", "unknown country code".to_string()),
        };
        out.push_str(&format!(
            "{:<8} {} {:?} {}\n",
            label, r.country, r.postal_code, detail
        ));
    }

    let verdict = match report.verdict {
        Verdict::Pass => "pass",
        Verdict::Fail => "fail",
    };
    out.push_str(&format!(
        "verdict: {} ({} valid, {} invalid, {} unknown country)\n",
        verdict, report.counts.valid, report.counts.invalid, report.counts.unknown_country
    ));

    out
}

fn join(r: &postcode_types::CheckResult) -> String {
    r.formats
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Country codes one per line, optionally followed by their formats.
pub fn render_countries(countries: &[CountrySummary], with_formats: bool) -> String {
    let mut out = String::new();
    for c in countries {
        if !with_formats {
            out.push_str(&c.country);
        } else if c.formats.is_empty() {
            out.push_str(&format!("{}\t(any)", c.country));
        } else {
            let formats: Vec<&str> = c.formats.iter().map(|f| f.as_str()).collect();
            out.push_str(&format!("{}\t{}", c.country, formats.join(" | ")));
        }
        out.push('\n');
    }
    out
}

pub fn serialize_report(report: &CheckReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}
