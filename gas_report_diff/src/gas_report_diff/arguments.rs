//!
//! The gas report diff arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The gas report diff arguments.
///
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// The gas report before the change.
    pub before: PathBuf,

    /// The gas report after the change.
    pub after: PathBuf,

    /// Print methods and deployments with zero average cost change.
    #[arg(short = 'z', long)]
    pub keep_zeros: bool,

    /// Only print methods and deployments with data in both reports.
    #[arg(short, long)]
    pub both: bool,

    /// Suppresses the warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format: `markdown` or `json`.
    #[arg(long, default_value_t = gas_report_diff::OutputFormat::Markdown)]
    pub output_format: gas_report_diff::OutputFormat,

    /// The output file. If unset, the result is printed to `stdout`.
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,
}
