//! Word-level edit distance, optimal word alignment and the scoring policies.
//!
//! This module provides the core matching functionality:
//!
//! - [`distance`]: Damerau-Levenshtein distance between two words
//! - [`alignment`]: minimum-cost pairing of the words of two strings
//! - [`scoring`]: similarity, word-count deltas and containment
//! - [`candidates`]: best-of-candidates wrappers for structured titles
//! - [`Policy`]: selects one of the above for a batch
//!
//! ## Scoring pipeline
//!
//! 1. **Normalize** both strings (see [`crate::text`])
//! 2. **Edge cases**: empty inputs are decided without aligning
//! 3. **Screen**: foreign script first, then leftover characters
//! 4. **Align**: pad, build the cost matrix, solve the assignment problem
//! 5. **Aggregate** the alignment into the policy's score
//!
//! ## Example
//!
//! ```
//! use lexalign::core::types::Verdict;
//! use lexalign::matching::scoring::similarity;
//!
//! // "stairway"/"stairwya" is one transposition, "heaven"/"heavn" one deletion
//! let verdict = similarity("Stairway to Heaven", "Stairwya to Heavn");
//! assert_eq!(verdict, Verdict::Scored(1.0 - 2.0 / 18.0));
//! ```

pub mod alignment;
pub mod candidates;
pub mod distance;
pub mod policy;
pub mod scoring;

pub use policy::Policy;
pub use scoring::ScoringError;
