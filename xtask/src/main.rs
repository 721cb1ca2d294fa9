//! Developer tasks (schema generation, format table review).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use postcode_domain::FormatTable;
use schemars::schema_for;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

/// Generate the CheckReport schema.
fn generate_report_schema() -> schemars::Schema {
    schema_for!(postcode_types::CheckReport)
}

/// Generate the PostcodeConfigV1 schema.
fn generate_config_schema() -> schemars::Schema {
    schema_for!(postcode_settings::PostcodeConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "postcode.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaSpec {
            filename: "postcode.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    if !dir.exists() {
        fs::create_dir_all(&dir).context("Failed to create schemas directory")?;
    }

    for spec in schema_specs() {
        let schema = (spec.generate)();
        let json = serialize_schema(&schema)?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Print a review summary of the built-in table.
///
/// Lists entries that usually deserve a second look when the data is updated:
/// countries without formats, fixed single-code formats, and formats shared
/// verbatim by many countries.
fn table_report() -> anyhow::Result<()> {
    let table = FormatTable::builtin();

    let mut without_formats = Vec::new();
    let mut fixed = Vec::new();
    let mut by_format: BTreeMap<&str, Vec<&str>> = BTreeMap::new();

    for (country, formats) in table.iter() {
        if formats.is_empty() {
            without_formats.push(country);
        }
        for format in formats {
            if format.is_fixed() {
                fixed.push(format!("{country} {format}"));
            }
            by_format.entry(format.as_str()).or_default().push(country);
        }
    }

    let total_formats: usize = table.iter().map(|(_, f)| f.len()).sum();
    println!("countries: {}", table.len());
    println!("formats: {}", total_formats);
    println!(
        "without formats ({}): {}",
        without_formats.len(),
        without_formats.join(" ")
    );
    println!("fixed formats ({}):", fixed.len());
    for entry in &fixed {
        println!("  {entry}");
    }
    println!("most shared formats:");
    let mut shared: Vec<_> = by_format.iter().filter(|(_, c)| c.len() > 1).collect();
    shared.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(b.0)));
    for (format, countries) in shared.into_iter().take(5) {
        println!("  {:<10} {} countries", format, countries.len());
    }

    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  table-report      Summarize the built-in format table for data review");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "table-report" => table_report(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                let name = spec.filename.trim_end_matches(".json");
                println!("{}", name);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
