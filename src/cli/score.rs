//! Batch scoring commands.
//!
//! Every policy command reads two line-delimited files of equal length and
//! writes one score per line. Default file names follow the conventions of
//! the existing pipelines: `input1.txt`/`input2.txt` for symmetric
//! comparisons, `input_queries.txt`/`input_names.txt` for query-vs-name ones,
//! and `output.txt` for results.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::batch::format::render_scores;
use crate::batch::{BatchConfig, BatchRunner};
use crate::matching::Policy;
use crate::parsing::lines::{read_lines, write_output};

/// Files for a symmetric comparison
#[derive(Args, Debug, Clone)]
pub struct PairFilesArgs {
    /// First input, one string per line
    #[arg(long, default_value = "input1.txt")]
    pub left: PathBuf,

    /// Second input, one string per line
    #[arg(long, default_value = "input2.txt")]
    pub right: PathBuf,

    /// Output file, or '-' for stdout
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,
}

/// Files for a query-vs-name comparison
#[derive(Args, Debug, Clone)]
pub struct QueryFilesArgs {
    /// Queries, one per line
    #[arg(long, default_value = "input_queries.txt")]
    pub queries: PathBuf,

    /// Names to search in, one per line
    #[arg(long, default_value = "input_names.txt")]
    pub names: PathBuf,

    /// Output file, or '-' for stdout
    #[arg(short, long, default_value = "output.txt")]
    pub output: PathBuf,
}

/// Arguments for the word-delta command
#[derive(Args, Debug, Clone)]
pub struct WordDeltaArgs {
    #[command(flatten)]
    pub files: PairFilesArgs,

    /// Count unique words with set arithmetic instead of aligning
    #[arg(long)]
    pub legacy: bool,
}

impl WordDeltaArgs {
    #[must_use]
    pub fn policy(&self) -> Policy {
        if self.legacy {
            Policy::WordDeltaLegacy
        } else {
            Policy::WordDelta
        }
    }
}

/// Execute a policy over two files
///
/// # Errors
///
/// Returns an error if an input cannot be read, the inputs differ in length,
/// the batch aborts, or the output cannot be written. Nothing is written on
/// error.
pub fn run(
    policy: Policy,
    left: &Path,
    right: &Path,
    output: &Path,
    config: &BatchConfig,
) -> anyhow::Result<()> {
    let left_rows = read_lines(left)?;
    let right_rows = read_lines(right)?;

    let runner = BatchRunner::new(config.clone());
    let scores = runner
        .score_pairs(policy, &left_rows, &right_rows)
        .with_context(|| format!("{policy} of {} and {}", left.display(), right.display()))?;

    let rendered = render_scores(&scores, policy, config.format)?;
    write_output(output, &rendered)?;

    info!(rows = scores.len(), output = %output.display(), "wrote scores");
    Ok(())
}

/// Execute the similarity command
///
/// # Errors
///
/// See [`run`].
pub fn run_pairs(policy: Policy, args: &PairFilesArgs, config: &BatchConfig) -> anyhow::Result<()> {
    run(policy, &args.left, &args.right, &args.output, config)
}

/// Execute a query-vs-name command
///
/// # Errors
///
/// See [`run`].
pub fn run_queries(
    policy: Policy,
    args: &QueryFilesArgs,
    config: &BatchConfig,
) -> anyhow::Result<()> {
    run(policy, &args.queries, &args.names, &args.output, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_lines(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".txt").unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_run_similarity() {
        let left = create_temp_lines(&["Hello, World!", "cat", "love", ""]);
        let right = create_temp_lines(&["hello  world", "dog", "恋", ""]);
        let output = NamedTempFile::new().unwrap();

        run(
            Policy::Similarity,
            left.path(),
            right.path(),
            output.path(),
            &BatchConfig::default(),
        )
        .unwrap();

        let written = std::fs::read_to_string(output.path()).unwrap();
        assert_eq!(written, "1.0\n0.0\n-2\n1\n");
    }

    #[test]
    fn test_run_mismatched_lengths_writes_nothing() {
        let left = create_temp_lines(&["a", "b"]);
        let right = create_temp_lines(&["a"]);
        let output = NamedTempFile::new().unwrap();

        let err = run(
            Policy::Containment,
            left.path(),
            right.path(),
            output.path(),
            &BatchConfig::default(),
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("same number of rows"));
        assert_eq!(std::fs::read_to_string(output.path()).unwrap(), "");
    }

    #[test]
    fn test_word_delta_policy_flag() {
        let files = PairFilesArgs {
            left: PathBuf::from("input1.txt"),
            right: PathBuf::from("input2.txt"),
            output: PathBuf::from("output.txt"),
        };
        let args = WordDeltaArgs {
            files: files.clone(),
            legacy: true,
        };
        assert_eq!(args.policy(), Policy::WordDeltaLegacy);
        let args = WordDeltaArgs {
            files,
            legacy: false,
        };
        assert_eq!(args.policy(), Policy::WordDelta);
    }
}
