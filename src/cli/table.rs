use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_report, OutputFormat};
use crate::core::module::{Module, Row, TableExtraction};

#[derive(Args)]
pub struct TableArgs {
    /// FastQC report (fastqc_data.txt, optionally .gz). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Module name, e.g. "Basic Statistics"
    #[arg(required = true)]
    pub module: String,

    /// Print the module's metadata lines instead of its table
    #[arg(long)]
    pub info: bool,
}

/// Execute table subcommand
///
/// # Errors
///
/// Returns an error if the report cannot be read or has no such module.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: TableArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let report = read_report(&args.input)?;
    let module = report.module(&args.module)?;

    if verbose {
        eprintln!(
            "Module '{}' ({}): {} raw lines",
            module.name(),
            module.verdict(),
            module.raw_lines().len()
        );
    }

    match module.extraction() {
        TableExtraction::Empty => eprintln!("Module '{}' has no data", module.name()),
        TableExtraction::MissingHeader => {
            return Err(anyhow::anyhow!(
                "Module '{}' has no table header",
                module.name()
            ));
        }
        TableExtraction::Table(_) => {}
    }

    match format {
        OutputFormat::Json => print_json_table(module, args.info)?,
        OutputFormat::Text | OutputFormat::Tsv if args.info => print_info(module),
        OutputFormat::Text | OutputFormat::Tsv => print_rows(module),
    }

    Ok(())
}

/// Row cells in header order; fields missing from a short row print empty
fn cells<'a>(headers: &'a [String], row: &'a Row) -> Vec<&'a str> {
    headers
        .iter()
        .map(|h| row.get(h).map_or("", String::as_str))
        .collect()
}

fn print_rows(module: &Module) {
    let (Some(headers), Some(rows)) = (module.headers(), module.rows()) else {
        return;
    };

    println!("{}", headers.join("\t"));
    for row in rows {
        println!("{}", cells(headers, row).join("\t"));
    }
}

fn print_info(module: &Module) {
    for (key, value) in module.info_values().into_iter().flatten() {
        println!("{key}\t{value}");
    }
}

fn print_json_table(module: &Module, info_only: bool) -> anyhow::Result<()> {
    let output = if info_only {
        serde_json::json!({
            "module": module.name(),
            "verdict": module.verdict(),
            "info_values": module.info_values(),
        })
    } else {
        serde_json::json!({
            "module": module.name(),
            "verdict": module.verdict(),
            "headers": module.headers(),
            "info_values": module.info_values(),
            "rows": module.rows(),
        })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_header_order() {
        let headers = vec!["Measure".to_string(), "Value".to_string(), "Note".to_string()];
        let row: Row = [
            ("Value".to_string(), "36".to_string()),
            ("Measure".to_string(), "Sequence length".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(cells(&headers, &row), ["Sequence length", "36", ""]);
    }
}
