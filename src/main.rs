use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod engine;
mod motif;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("varmotif=debug,info")
    } else {
        EnvFilter::new("varmotif=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Scan(args) => {
            cli::scan::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Motifs(args) => {
            cli::motifs::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
