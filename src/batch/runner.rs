use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::batch::config::BatchConfig;
use crate::core::types::{PairScore, Status};
use crate::matching::scoring::ScoringError;
use crate::matching::Policy;
use crate::text::{normalize, NormalizedString};

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Inputs must have the same number of rows, got {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Row {row} is not clean after normalization: {left:?} vs {right:?}")]
    InvalidRow {
        row: usize,
        left: String,
        right: String,
    },

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

/// Scores parallel string lists with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    #[must_use]
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Score `left[i]` against `right[i]` for every row, in input order.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::LengthMismatch` if the lists differ in length,
    /// `BatchError::InvalidRow` for the first unclean row of a
    /// similarity-family batch (unless disabled in the config),
    /// `BatchError::Scoring` if an alignment invariant is violated, or
    /// `BatchError::ThreadPool` if the worker pool cannot be created.
    pub fn score_pairs(
        &self,
        policy: Policy,
        left: &[String],
        right: &[String],
    ) -> Result<Vec<PairScore>, BatchError> {
        if left.len() != right.len() {
            return Err(BatchError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }

        debug!(rows = left.len(), %policy, "scoring batch");
        let scores = self.install(|| {
            left.par_iter()
                .zip(right.par_iter())
                .map(|(a, b)| policy.score(a, b))
                .collect::<Result<Vec<_>, _>>()
        })??;

        if policy.aborts_on_invalid() && self.config.abort_on_invalid {
            if let Some(row) = scores.iter().position(PairScore::is_invalid) {
                warn!(row, %policy, "aborting batch on unclean row");
                return Err(BatchError::InvalidRow {
                    row,
                    left: left[row].clone(),
                    right: right[row].clone(),
                });
            }
        }

        let ignored = scores
            .iter()
            .filter(|s| s.status() == Status::Ignored)
            .count();
        info!(rows = scores.len(), ignored, %policy, "batch scored");
        Ok(scores)
    }

    /// Normalize every line, in input order.
    ///
    /// # Errors
    ///
    /// Returns `BatchError::ThreadPool` if the worker pool cannot be created.
    pub fn normalize_lines(&self, lines: &[String]) -> Result<Vec<NormalizedString>, BatchError> {
        let normalized = self.install(|| lines.par_iter().map(|l| normalize(l)).collect())?;
        info!(rows = lines.len(), "lines normalized");
        Ok(normalized)
    }

    /// Run `op` on a dedicated pool when a thread count is configured,
    /// otherwise on rayon's global pool.
    fn install<OP, R>(&self, op: OP) -> Result<R, BatchError>
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| BatchError::ThreadPool(e.to_string()))?;
                Ok(pool.install(op))
            }
            None => Ok(op()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Verdict;

    fn rows(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_length_mismatch() {
        let runner = BatchRunner::default();
        let err = runner
            .score_pairs(Policy::Similarity, &rows(&["a", "b"]), &rows(&["a"]))
            .unwrap_err();
        assert!(matches!(err, BatchError::LengthMismatch { left: 2, right: 1 }));
    }

    #[test]
    fn test_order_preserved() {
        let left: Vec<String> = (0..200).map(|i| format!("word{i}")).collect();
        let right: Vec<String> = (0..200).map(|i| format!("word{i} extra")).collect();

        let runner = BatchRunner::new(BatchConfig::default().with_threads(4));
        let scores = runner.score_pairs(Policy::WordDelta, &left, &right).unwrap();
        assert_eq!(scores.len(), 200);
        assert!(scores
            .iter()
            .all(|s| *s == PairScore::Count(Verdict::Scored(1))));

        let parallel = runner.score_pairs(Policy::Similarity, &left, &right).unwrap();
        let serial = BatchRunner::new(BatchConfig::default().with_threads(1))
            .score_pairs(Policy::Similarity, &left, &right)
            .unwrap();
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_invalid_row_aborts_similarity() {
        let runner = BatchRunner::default();
        let left = rows(&["hello", "straße", "x"]);
        let right = rows(&["hello", "strasse", "y"]);

        let err = runner.score_pairs(Policy::Similarity, &left, &right).unwrap_err();
        match err {
            BatchError::InvalidRow { row, left, .. } => {
                assert_eq!(row, 1);
                assert_eq!(left, "straße");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_row_kept_when_abort_disabled() {
        let config = BatchConfig {
            abort_on_invalid: false,
            ..BatchConfig::default()
        };
        let runner = BatchRunner::new(config);
        let scores = runner
            .score_pairs(Policy::Similarity, &rows(&["straße"]), &rows(&["strasse"]))
            .unwrap();
        assert_eq!(scores, vec![PairScore::Ratio(Verdict::Invalid)]);
    }

    #[test]
    fn test_ignored_rows_do_not_abort() {
        let runner = BatchRunner::default();
        let scores = runner
            .score_pairs(Policy::Similarity, &rows(&["love", "cat"]), &rows(&["恋", "cat"]))
            .unwrap();
        assert_eq!(
            scores,
            vec![
                PairScore::Ratio(Verdict::Ignored),
                PairScore::Ratio(Verdict::Scored(1.0))
            ]
        );
    }

    #[test]
    fn test_invalid_rows_do_not_abort_containment() {
        let runner = BatchRunner::default();
        let scores = runner
            .score_pairs(Policy::Containment, &rows(&["straße"]), &rows(&["x"]))
            .unwrap();
        assert_eq!(scores, vec![PairScore::Ratio(Verdict::Invalid)]);
    }

    #[test]
    fn test_alignment_invariant_error_keeps_both_sides() {
        let err = BatchError::from(ScoringError::BlanksOnBothSides {
            left: vec!["cat".to_string(), String::new()],
            right: vec![String::new(), "dog".to_string()],
        });
        assert!(matches!(err, BatchError::Scoring(_)));

        let message = err.to_string();
        assert!(message.starts_with("Scoring failed: word alignment has placeholders on both sides"));
        assert!(message.contains(r#"["cat", ""]"#));
        assert!(message.contains(r#"["", "dog"]"#));
    }

    #[test]
    fn test_normalize_lines() {
        let runner = BatchRunner::default();
        let normalized = runner
            .normalize_lines(&rows(&["Hello, World!", "  Sigur Rós "]))
            .unwrap();
        let normalized: Vec<&str> = normalized.iter().map(NormalizedString::as_str).collect();
        assert_eq!(normalized, vec!["hello world", "sigur ros"]);
    }
}
