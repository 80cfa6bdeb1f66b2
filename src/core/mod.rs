//! Core value types shared by the scoring policies and the batch driver.
//!
//! - [`Verdict`]: outcome of one pairwise comparison (scored, trivial, ignored, invalid)
//! - [`PairScore`]: a verdict as carried through a batch, whatever the policy's value type
//! - [`Sentinels`]: the numeric codes a policy family uses for ignored/invalid pairs
//!
//! ## Sentinel encoding
//!
//! Library callers never see sentinel numbers; they match on [`Verdict`]. The
//! numbers only appear when a batch is rendered in the line-oriented text
//! format, which has to stay readable by existing downstream jobs:
//!
//! | Family | Ignored | Invalid |
//! |--------|---------|---------|
//! | similarity, hyphen-comma, title-artist | -2 | -1 |
//! | word-delta, containment | -1000 | -2000 |
//!
//! Title/artist names without exactly one hyphen encode as `-13`.

pub mod types;

pub use types::{PairScore, Sentinels, Status, Verdict};
