//! CLI entry point for postcode.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `postcode-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use postcode_app::{
    CheckEntry, CheckInput, render_countries, render_text, run_check, run_countries, run_formats,
    run_has_country, serialize_report, verdict_exit_code,
};
use postcode_settings::Overrides;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `postcode_domain=trace`).
const LOG_ENV: &str = "POSTCODE_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "postcode",
    version,
    about = "Check postal codes against per-country formats"
)]
struct Cli {
    /// Path to postcode config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "postcode.toml")]
    config: Utf8PathBuf,

    /// Override the base table (builtin|empty).
    #[arg(long, global = true)]
    base: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one or more postal codes for a country.
    Check {
        /// Country code (e.g. "CH"). Case-sensitive.
        country: String,

        /// Postal codes to check. Quote codes that contain spaces.
        #[arg(required = true)]
        postal_codes: Vec<String>,

        /// Treat separator spaces in formats as optional.
        #[arg(long)]
        ignore_spaces: bool,

        /// Print the JSON report instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Print the accepted formats for a country, one per line.
    Formats {
        country: String,
    },

    /// List known country codes.
    Countries {
        /// Include each country's formats.
        #[arg(long)]
        with_formats: bool,
    },

    /// Print whether a country code is known; exits 1 when it is not.
    Has {
        country: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_text = read_config(&cli.config)?;
    let overrides = Overrides {
        base: cli.base.clone(),
        ignore_spaces: None,
    };

    match cli.cmd {
        Commands::Check {
            country,
            postal_codes,
            ignore_spaces,
            json,
        } => cmd_check(
            &config_text,
            overrides,
            &country,
            postal_codes,
            ignore_spaces,
            json,
        ),
        Commands::Formats { country } => cmd_formats(&config_text, overrides, &country),
        Commands::Countries { with_formats } => {
            let countries = run_countries(&config_text, overrides)?;
            print!("{}", render_countries(&countries, with_formats));
            Ok(())
        }
        Commands::Has { country } => {
            let known = run_has_country(&config_text, overrides, &country)?;
            println!("{known}");
            if !known {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Missing config is allowed (defaults apply); an unreadable one is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    if !path.exists() {
        tracing::debug!(%path, "no config file; using defaults");
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("read config: {}", path))
}

fn cmd_check(
    config_text: &str,
    mut overrides: Overrides,
    country: &str,
    postal_codes: Vec<String>,
    ignore_spaces: bool,
    json: bool,
) -> anyhow::Result<()> {
    if ignore_spaces {
        overrides.ignore_spaces = Some(true);
    }

    let input = CheckInput {
        config_text,
        overrides,
        entries: postal_codes
            .into_iter()
            .map(|code| CheckEntry::new(country, code))
            .collect(),
    };
    let output = run_check(input)?;

    if json {
        print!("{}", serialize_report(&output.report)?);
    } else {
        print!("{}", render_text(&output.report));
    }

    let code = verdict_exit_code(output.report.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_formats(config_text: &str, overrides: Overrides, country: &str) -> anyhow::Result<()> {
    let formats = run_formats(config_text, overrides, country)?;
    if formats.is_empty() {
        eprintln!("postcode: {country} has no enforced format; any postal code is accepted");
    }
    for format in formats {
        println!("{format}");
    }
    Ok(())
}
