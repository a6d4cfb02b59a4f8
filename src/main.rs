use clap::Parser;
use tracing_subscriber::EnvFilter;

use fastqc_report::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fastqc_report=debug,info")
    } else {
        EnvFilter::new("fastqc_report=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Summary(args) => {
            cli::summary::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Table(args) => {
            cli::table::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Modules(args) => {
            cli::modules::run(args, cli.format)?;
        }
    }

    Ok(())
}
