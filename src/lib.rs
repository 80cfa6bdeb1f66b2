//! # lexalign
//!
//! A library for scoring how lexically similar two short strings are, such as
//! song titles, search queries or product names.
//!
//! Exact comparison fails on data gathered from many sources: the same title
//! shows up with different casing, punctuation, accents, word order, extra
//! words and typos. `lexalign` normalizes both strings, splits them into
//! words, and pairs the words up so that their total edit distance is as small
//! as possible. Scores built on that alignment are insensitive to word order
//! and degrade smoothly with typos.
//!
//! ## Features
//!
//! - **Normalization**: lower-casing, punctuation to spaces, accent folding
//! - **Charset screening**: foreign-script pairs are ignored, unclean pairs flagged
//! - **Word distance**: Damerau-Levenshtein with transpositions
//! - **Optimal alignment**: Kuhn-Munkres assignment over a word cost matrix
//! - **Policies**: similarity, word-count delta, containment, best-of-candidates
//! - **Batch scoring**: parallel, order-preserving, with legacy sentinel output
//!
//! ## Example
//!
//! ```rust
//! use lexalign::{Policy, PairScore, Verdict};
//!
//! let score = Policy::Containment
//!     .score("Halo", "Beyoncé - Halo (Live)")
//!     .unwrap();
//!
//! assert_eq!(score, PairScore::Ratio(Verdict::Scored(1.0)));
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Normalization and character-class checks
//! - [`core`]: Verdicts and their sentinel encoding
//! - [`matching`]: Word distance, alignment and scoring policies
//! - [`batch`]: Parallel row-wise scoring and output formats
//! - [`parsing`]: Line-oriented input and output
//! - [`cli`]: Command-line interface implementation

pub mod batch;
pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod text;

// Re-export commonly used types for convenience
pub use batch::{BatchConfig, BatchError, BatchRunner, OutputFormat};
pub use crate::core::types::*;
pub use matching::{Policy, ScoringError};
pub use text::{normalize, NormalizedString};
