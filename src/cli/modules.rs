use clap::Args;

use crate::catalog::known_modules::known_modules;
use crate::cli::OutputFormat;
use crate::core::types::FormatFamily;

#[derive(Args)]
pub struct ModulesArgs {
    /// Format family to list (0.10 or 0.11); both if omitted
    #[arg(long)]
    pub family: Option<FormatFamily>,
}

/// Execute modules subcommand
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ModulesArgs, format: OutputFormat) -> anyhow::Result<()> {
    let families: Vec<FormatFamily> = match args.family {
        Some(family) => vec![family],
        None => FormatFamily::ALL.to_vec(),
    };

    match format {
        OutputFormat::Text => {
            for family in families {
                println!("FastQC {family}");
                for name in known_modules(family) {
                    println!("  {name}");
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = families
                .iter()
                .map(|&family| {
                    serde_json::json!({
                        "family": family,
                        "modules": known_modules(family),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("family\tmodule");
            for family in families {
                for name in known_modules(family) {
                    println!("{family}\t{name}");
                }
            }
        }
    }

    Ok(())
}
