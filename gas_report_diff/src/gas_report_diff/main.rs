//!
//! The gas report diff binary.
//!

pub(crate) mod arguments;

use std::path::Path;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The log filter used if `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = run(&arguments)?;
    match arguments.output_path {
        Some(path) => output.write_to_file(path)?,
        None => output.write_all(&mut std::io::stdout().lock())?,
    }

    Ok(())
}

///
/// Reads both reports and serializes their comparison.
///
fn run(arguments: &Arguments) -> anyhow::Result<gas_report_diff::Output> {
    let before = read_report(arguments.before.as_path(), arguments.quiet)?;
    let after = read_report(arguments.after.as_path(), arguments.quiet)?;

    let options = gas_report_diff::ComparisonOptions::new(arguments.keep_zeros, arguments.both);
    let comparison = gas_report_diff::Comparison::new(&before, &after, options)?;
    tracing::debug!("{} rows to print", comparison.rows.len());

    gas_report_diff::Output::try_from((&comparison, arguments.output_format.clone()))
}

///
/// Reads a report, warning if it does not look like a gas report.
///
fn read_report(path: &Path, quiet: bool) -> anyhow::Result<gas_report_diff::Report> {
    let report = gas_report_diff::Report::try_from(path)?;
    if report.is_empty() && !quiet {
        eprintln!(
            "{} Input file {path:?} contains no gas report records.",
            "Warning:".bright_yellow().bold()
        );
    }
    Ok(report)
}
