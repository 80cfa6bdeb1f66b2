//! Row-wise scoring of two parallel string lists.
//!
//! - [`BatchRunner`]: scores every row with one [`Policy`](crate::matching::Policy)
//! - [`BatchConfig`]: thread count, output format, abort behaviour
//! - [`format`]: renders results as legacy text lines, JSON or TSV
//!
//! Rows are independent, so they are scored on a rayon pool; results always
//! come back in input order.
//!
//! ## Abort rule
//!
//! For the similarity family (similarity, hyphen-comma, title-artist) a row
//! that could not be normalized to clean text invalidates the whole batch:
//! [`BatchRunner::score_pairs`] returns [`BatchError::InvalidRow`] and nothing
//! is written. Foreign-script rows are not errors; they are emitted with their
//! sentinel like any other score.
//!
//! ## Example
//!
//! ```
//! use lexalign::batch::format::render_scores;
//! use lexalign::batch::{BatchConfig, BatchRunner, OutputFormat};
//! use lexalign::matching::Policy;
//!
//! let runner = BatchRunner::new(BatchConfig::default());
//! let left = vec!["Hello, World!".to_string(), "cat".to_string()];
//! let right = vec!["hello world".to_string(), "dog".to_string()];
//!
//! let scores = runner.score_pairs(Policy::Similarity, &left, &right).unwrap();
//! let text = render_scores(&scores, Policy::Similarity, OutputFormat::Text).unwrap();
//! assert_eq!(text, "1.0\n0.0\n");
//! ```

pub mod config;
pub mod format;
pub mod runner;

pub use config::{BatchConfig, ConfigError};
pub use format::OutputFormat;
pub use runner::{BatchError, BatchRunner};
