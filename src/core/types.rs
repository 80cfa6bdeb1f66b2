use serde::{Deserialize, Serialize};

/// Outcome of comparing two strings under one policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict<T> {
    /// Computed from an optimal word alignment
    Scored(T),
    /// Decided by an empty-input edge case, no alignment was run
    Trivial(T),
    /// One side contains foreign-script characters
    Ignored,
    /// One side still has characters outside `a-z0-9 ` after normalization
    Invalid,
}

impl<T: Copy> Verdict<T> {
    /// The score, if the pair was actually scored.
    #[must_use]
    pub fn score(&self) -> Option<T> {
        match self {
            Self::Scored(v) | Self::Trivial(v) => Some(*v),
            Self::Ignored | Self::Invalid => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }

    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Scored(_) => Status::Scored,
            Self::Trivial(_) => Status::Trivial,
            Self::Ignored => Status::Ignored,
            Self::Invalid => Status::Invalid,
        }
    }
}

impl Verdict<f64> {
    /// Numeric value under a sentinel family, used to rank candidates.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn encoded(&self, sentinels: Sentinels) -> f64 {
        match self {
            Self::Scored(v) | Self::Trivial(v) => *v,
            Self::Ignored => sentinels.ignored as f64,
            Self::Invalid => sentinels.invalid as f64,
        }
    }
}

/// Reserved codes for pairs that were not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinels {
    pub ignored: i64,
    pub invalid: i64,
}

/// Codes used by similarity and the candidate wrappers built on it
pub const SIMILARITY_SENTINELS: Sentinels = Sentinels {
    ignored: -2,
    invalid: -1,
};

/// Codes used by the aligned word-count delta and containment
pub const ALIGNMENT_SENTINELS: Sentinels = Sentinels {
    ignored: -1000,
    invalid: -2000,
};

/// Code for a title/artist name that does not have exactly one hyphen
pub const MALFORMED_TITLE_ARTIST: i64 = -13;

/// Classification of a row, independent of the value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Scored,
    Trivial,
    Ignored,
    Invalid,
    Malformed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scored => write!(f, "scored"),
            Self::Trivial => write!(f, "trivial"),
            Self::Ignored => write!(f, "ignored"),
            Self::Invalid => write!(f, "invalid"),
            Self::Malformed => write!(f, "malformed"),
        }
    }
}

/// One row of a batch result
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PairScore {
    /// Fractional score (similarity, containment and their wrappers)
    Ratio(Verdict<f64>),
    /// Word-count delta
    Count(Verdict<i64>),
    /// Title/artist name without exactly one hyphen
    Malformed,
}

impl PairScore {
    #[must_use]
    pub fn status(&self) -> Status {
        match self {
            Self::Ratio(v) => v.status(),
            Self::Count(v) => v.status(),
            Self::Malformed => Status::Malformed,
        }
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.status() == Status::Invalid
    }
}
