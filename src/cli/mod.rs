//! Command-line interface for lexalign.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **similarity**: symmetric similarity of paired lines
//! - **word-delta**: difference in word counts of paired lines
//! - **containment**: how much of each query is found in its paired name
//! - **hyphen-comma**: best similarity against prefixes of a structured name
//! - **title-artist**: best similarity against a `title-artists` name
//! - **normalize**: write the normalized form of every line
//! - **compare**: score a single pair and show the word alignment
//!
//! ## Usage
//!
//! ```text
//! # Score input1.txt against input2.txt into output.txt
//! lexalign similarity
//!
//! # Explicit files, TSV output on stdout
//! lexalign --format tsv containment --queries q.txt --names n.txt -o -
//!
//! # Inspect one pair
//! lexalign compare "Stairway to Heaven" "Stairwya to Heavn (Remaster)"
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::batch::BatchConfig;

pub mod compare;
pub mod normalize;
pub mod score;

pub use crate::batch::OutputFormat;

#[derive(Parser)]
#[command(name = "lexalign")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Score similarity of short strings by optimal word alignment")]
#[command(
    long_about = "lexalign compares two parallel lists of short strings (titles, queries, names) row by row.\n\nEach pair is normalized (case, punctuation, accents), split into words, and the words are paired up so that the total edit distance is minimal. Scores built on that alignment tolerate:\n- Punctuation and accent differences\n- Reordered words\n- Missing or extra words\n- Typos"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// JSON file with batch settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: one per CPU)
    #[arg(long, global = true)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Batch settings from the config file, overridden by flags
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub fn batch_config(&self) -> anyhow::Result<BatchConfig> {
        let mut config = match &self.config {
            Some(path) => BatchConfig::load_from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BatchConfig::default(),
        };
        if let Some(threads) = self.threads {
            config = config.with_threads(threads);
        }
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Symmetric similarity of each pair of lines
    Similarity(score::PairFilesArgs),

    /// Extra words in the second line minus extra words in the first
    WordDelta(score::WordDeltaArgs),

    /// Fraction of each query found in its paired name
    Containment(score::QueryFilesArgs),

    /// Best similarity against hyphen/comma prefixes of each name
    HyphenComma(score::QueryFilesArgs),

    /// Best similarity against the title and artists of each name
    TitleArtist(score::QueryFilesArgs),

    /// Normalize every line of a file
    Normalize(normalize::NormalizeArgs),

    /// Score a single pair and show how the words were aligned
    Compare(compare::CompareArgs),
}
