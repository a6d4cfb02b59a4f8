use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_report, OutputFormat};
use crate::core::report::ParsedReport;
use crate::core::types::Verdict;

#[derive(Args)]
pub struct SummaryArgs {
    /// FastQC report (fastqc_data.txt, optionally .gz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,
}

/// Execute summary subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be read or its summary values do not parse.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SummaryArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = read_report(&args.input)?;

    if verbose {
        eprintln!(
            "Parsed {} modules ({} warnings)",
            report.module_names().count(),
            report.warnings().len()
        );
    }

    match format {
        OutputFormat::Text => print_text_summary(&args, &report)?,
        OutputFormat::Json => print_json_summary(&report)?,
        OutputFormat::Tsv => print_tsv_summary(&report),
    }

    Ok(())
}

fn verdict_tag(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    }
}

fn print_text_summary(args: &SummaryArgs, report: &ParsedReport) -> anyhow::Result<()> {
    println!("FastQC Report");
    println!("{}", "=".repeat(60));

    println!("\nInput: {}", args.input.display());
    match report.version() {
        Some(version) => println!("Version: {version} ({})", version.tool),
        None => println!("Version: unknown"),
    }
    match report.format_family() {
        Some(family) => println!("Format family: {family}"),
        None => println!("Format family: unrecognized"),
    }

    println!("\nModules:");
    for (name, verdict) in report.module_results() {
        println!("  [{}] {name}", verdict_tag(verdict));
    }

    println!("\nOverrepresented sequences: {}%", report.total_percent_overrepresented_sequences()?);
    match report.filtered_sequences()? {
        Some(count) => println!("Filtered sequences: {count}"),
        None => println!("Filtered sequences: n/a"),
    }

    let missing = report.missing_expected_modules();
    if !missing.is_empty() {
        println!("\nMissing expected modules:");
        for name in missing {
            println!("  - {name}");
        }
    }

    let unexpected = report.unexpected_modules();
    if !unexpected.is_empty() {
        println!("\nUnexpected modules:");
        for name in unexpected {
            println!("  - {name}");
        }
    }

    if !report.warnings().is_empty() {
        println!("\nWarnings:");
        for warning in report.warnings() {
            println!("  - {warning}");
        }
    }

    Ok(())
}

fn print_json_summary(report: &ParsedReport) -> anyhow::Result<()> {
    let modules: Vec<_> = report
        .module_results()
        .map(|(name, verdict)| {
            serde_json::json!({
                "name": name,
                "verdict": verdict,
            })
        })
        .collect();

    let output = serde_json::json!({
        "source": report.source(),
        "version": report.version().map(ToString::to_string),
        "tool": report.version().map(|v| v.tool.clone()),
        "format_family": report.format_family(),
        "modules": modules,
        "total_percent_overrepresented_sequences":
            report.total_percent_overrepresented_sequences()?.to_string(),
        "filtered_sequences": report.filtered_sequences()?,
        "missing_expected_modules": report.missing_expected_modules(),
        "unexpected_modules": report.unexpected_modules(),
        "warnings": report.warnings().iter().map(ToString::to_string).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_summary(report: &ParsedReport) {
    println!("module\tverdict");
    for (name, verdict) in report.module_results() {
        println!("{name}\t{verdict}");
    }
}
