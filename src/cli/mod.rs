//! Command-line interface for fastqc-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **summary**: Version, module verdicts and headline numbers of a report
//! - **table**: Print one module's table or metadata
//! - **modules**: List the modules expected for a format family
//!
//! ## Usage
//!
//! ```text
//! # Summarize a report
//! fastqc-report summary sample_fastqc/fastqc_data.txt
//!
//! # Read from stdin
//! unzip -p sample_fastqc.zip sample_fastqc/fastqc_data.txt | fastqc-report summary -
//!
//! # JSON output for scripting
//! fastqc-report --format json table fastqc_data.txt "Basic Statistics"
//!
//! # Metadata lines of a module
//! fastqc-report table fastqc_data.txt "Sequence Duplication Levels" --info
//! ```

use std::io::{self, Read};
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::core::report::ParsedReport;
use crate::parsing;

pub mod modules;
pub mod summary;
pub mod table;

#[derive(Parser)]
#[command(name = "fastqc-report")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Parse FastQC text reports into module verdicts and tables")]
#[command(
    long_about = "fastqc-report reads the fastqc_data.txt file written by FastQC.\n\nIt reports:\n- The FastQC version and format family\n- Each module's pass/warn/fail verdict\n- Module tables and metadata\n- Total overrepresented sequence percentage and filtered sequence count"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize a FastQC report
    Summary(summary::SummaryArgs),

    /// Print the table of one module
    Table(table::TableArgs),

    /// List the modules expected for a format family
    Modules(modules::ModulesArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Parse a report from a path, or from stdin when the path is `-`
///
/// # Errors
///
/// Returns an error if the input cannot be read.
pub fn read_report(input: &Path) -> anyhow::Result<ParsedReport> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(parsing::report::parse_text(&buffer));
    }

    Ok(parsing::report::parse_file(input)?)
}
