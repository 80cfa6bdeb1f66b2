use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::batch::format::render_normalized;
use crate::batch::{BatchConfig, BatchRunner};
use crate::parsing::lines::{read_lines, write_output};

#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Input file, one string per line
    #[arg(long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Output file, or '-' for stdout
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,
}

/// Execute the normalize command
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run(args: &NormalizeArgs, config: &BatchConfig) -> anyhow::Result<()> {
    let lines = read_lines(&args.input)?;
    let normalized = BatchRunner::new(config.clone()).normalize_lines(&lines)?;

    let rendered = render_normalized(&normalized, config.format)?;
    write_output(&args.output, &rendered)?;

    info!(rows = normalized.len(), output = %args.output.display(), "wrote normalized lines");
    Ok(())
}
