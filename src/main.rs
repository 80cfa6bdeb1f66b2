use clap::Parser;
use tracing_subscriber::EnvFilter;

use lexalign::cli::{self, Commands};
use lexalign::matching::Policy;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("lexalign=debug,info")
    } else {
        EnvFilter::new("lexalign=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let config = cli.batch_config()?;

    match &cli.command {
        Commands::Similarity(args) => {
            cli::score::run_pairs(Policy::Similarity, args, &config)?;
        }
        Commands::WordDelta(args) => {
            cli::score::run_pairs(args.policy(), &args.files, &config)?;
        }
        Commands::Containment(args) => {
            cli::score::run_queries(Policy::Containment, args, &config)?;
        }
        Commands::HyphenComma(args) => {
            cli::score::run_queries(Policy::HyphenComma, args, &config)?;
        }
        Commands::TitleArtist(args) => {
            cli::score::run_queries(Policy::TitleArtist, args, &config)?;
        }
        Commands::Normalize(args) => {
            cli::normalize::run(args, &config)?;
        }
        Commands::Compare(args) => {
            cli::compare::run(args, config.format)?;
        }
    }

    Ok(())
}
