use serde::{Deserialize, Serialize};

use crate::core::types::{
    PairScore, Sentinels, Verdict, ALIGNMENT_SENTINELS, SIMILARITY_SENTINELS,
};
use crate::matching::candidates::{
    best_prefix_similarity, best_title_artist_similarity, TitleArtistMatch,
};
use crate::matching::scoring::{
    containment, similarity, word_count_delta_aligned, word_count_delta_set, ScoringError,
};

/// Scoring policy applied to each pair of a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Symmetric similarity
    Similarity,
    /// Word-count delta from the optimal alignment
    WordDelta,
    /// Word-count delta from unique word sets
    WordDeltaLegacy,
    /// How much of the first string is contained in the second
    Containment,
    /// Similarity against hyphen/comma-separated prefixes of the second string
    HyphenComma,
    /// Similarity against a `title-artist, artist` second string
    TitleArtist,
}

impl Policy {
    /// Score one pair.
    ///
    /// # Errors
    ///
    /// Propagates `ScoringError` from the aligned word-count delta.
    pub fn score(self, left: &str, right: &str) -> Result<PairScore, ScoringError> {
        let score = match self {
            Self::Similarity => PairScore::Ratio(similarity(left, right)),
            Self::WordDelta => PairScore::Count(word_count_delta_aligned(left, right)?),
            Self::WordDeltaLegacy => {
                PairScore::Count(Verdict::Scored(word_count_delta_set(left, right)))
            }
            Self::Containment => PairScore::Ratio(containment(left, right)),
            Self::HyphenComma => PairScore::Ratio(best_prefix_similarity(left, right)),
            Self::TitleArtist => match best_title_artist_similarity(left, right) {
                TitleArtistMatch::Malformed => PairScore::Malformed,
                TitleArtistMatch::Best(verdict) => PairScore::Ratio(verdict),
            },
        };
        Ok(score)
    }

    /// Numeric codes this policy's unscored pairs are written as
    #[must_use]
    pub fn sentinels(self) -> Sentinels {
        match self {
            Self::Similarity | Self::HyphenComma | Self::TitleArtist => SIMILARITY_SENTINELS,
            Self::WordDelta | Self::WordDeltaLegacy | Self::Containment => ALIGNMENT_SENTINELS,
        }
    }

    /// Whether an `Invalid` row must abort the whole batch
    #[must_use]
    pub fn aborts_on_invalid(self) -> bool {
        matches!(
            self,
            Self::Similarity | Self::HyphenComma | Self::TitleArtist
        )
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Similarity => write!(f, "similarity"),
            Self::WordDelta => write!(f, "word-delta"),
            Self::WordDeltaLegacy => write!(f, "word-delta-legacy"),
            Self::Containment => write!(f, "containment"),
            Self::HyphenComma => write!(f, "hyphen-comma"),
            Self::TitleArtist => write!(f, "title-artist"),
        }
    }
}
