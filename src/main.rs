use clap::Parser;
use tracing_subscriber::EnvFilter;

use primaschema::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("primaschema=debug,info")
    } else {
        EnvFilter::new("primaschema=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::HashRef(args) => {
            cli::hash::run_hash_ref(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::HashBed(args) => {
            cli::hash::run_hash_bed(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::SixToSeven(args) => {
            cli::convert::run(&args, cli.verbose)?;
        }
        cli::Commands::SevenToSix(args) => {
            cli::convert::run_seven_to_six(&args, cli.verbose)?;
        }
        cli::Commands::Validate(args) => {
            cli::validate::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::Build(args) => {
            cli::build::run(&args, cli.verbose)?;
        }
        cli::Commands::ShowDiscordantPrimers(args) => {
            cli::inspect::run_discordant(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::ShowIntervals(args) => {
            cli::inspect::run_intervals(&args, cli.format)?;
        }
        cli::Commands::Diff(args) => {
            cli::inspect::run_diff(&args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
