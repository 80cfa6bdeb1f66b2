use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::core::types::Verdict;
use crate::matching::alignment::{align, PLACEHOLDER};
use crate::text::charset::{is_clean, is_foreign_script};
use crate::text::{normalize, NormalizedString};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// Only one side is ever padded, so blanks on both sides mean the aligner
    /// or the padding is broken. Not a property of the input.
    #[error("word alignment has placeholders on both sides: {left:?} vs {right:?}")]
    BlanksOnBothSides {
        left: Vec<String>,
        right: Vec<String>,
    },
}

/// Safely convert usize to f64 for score ratios
///
/// Word and character counts of a single line are far below the f64 mantissa.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

#[inline]
fn count_to_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

/// Reject pairs the aligner cannot meaningfully score.
///
/// Foreign script is checked before cleanliness on both sides.
fn screen<T>(a: &NormalizedString, b: &NormalizedString) -> Option<Verdict<T>> {
    if is_foreign_script(a.as_str()) || is_foreign_script(b.as_str()) {
        debug!(left = %a, right = %b, "ignored: foreign script");
        return Some(Verdict::Ignored);
    }
    if !is_clean(a.as_str()) || !is_clean(b.as_str()) {
        debug!(left = %a, right = %b, "not clean after normalization");
        return Some(Verdict::Invalid);
    }
    None
}

/// Symmetric similarity of two strings in `(-inf, 1]`.
///
/// `1 - alignment_cost / max_chars` over the normalized strings. Identical
/// word bags score 1.0 whatever their order.
///
/// # Examples
///
/// ```
/// use lexalign::core::types::Verdict;
/// use lexalign::matching::scoring::similarity;
///
/// assert_eq!(similarity("Hello, World!", "hello  world"), Verdict::Scored(1.0));
/// assert_eq!(similarity("", ""), Verdict::Trivial(1.0));
/// assert_eq!(similarity("abc", ""), Verdict::Trivial(0.0));
/// ```
#[must_use]
pub fn similarity(s1: &str, s2: &str) -> Verdict<f64> {
    let a = normalize(s1);
    let b = normalize(s2);

    let (len_a, len_b) = (a.char_count(), b.char_count());
    let max_chars = len_a.max(len_b);
    if max_chars == 0 {
        return Verdict::Trivial(1.0);
    }
    if len_a.min(len_b) == 0 {
        return Verdict::Trivial(0.0);
    }
    if let Some(rejected) = screen(&a, &b) {
        return rejected;
    }

    let alignment = align(&a.words(), &b.words());
    Verdict::Scored(1.0 - count_to_f64(alignment.total_cost) / count_to_f64(max_chars))
}

/// Extra unique words in `s2` minus extra unique words in `s1`.
///
/// Pure set arithmetic on normalized words, no edit distance. Kept for
/// comparison with [`word_count_delta_aligned`].
#[must_use]
pub fn word_count_delta_set(s1: &str, s2: &str) -> i64 {
    let a = normalize(s1);
    let b = normalize(s2);

    let words1: HashSet<&str> = a.words().into_iter().collect();
    let words2: HashSet<&str> = b.words().into_iter().collect();

    let only1 = words1.difference(&words2).count();
    let only2 = words2.difference(&words1).count();
    count_to_i64(only2) - count_to_i64(only1)
}

/// Words of `s1` left unmatched minus words of `s2` left unmatched.
///
/// Positive when `s2` has more words. After the optimal alignment, every
/// placeholder on the row side stands for a word of `s2` with no counterpart.
///
/// # Errors
///
/// Returns `ScoringError::BlanksOnBothSides` if the alignment pairs
/// placeholders on both sides, which the padding rules make impossible.
pub fn word_count_delta_aligned(s1: &str, s2: &str) -> Result<Verdict<i64>, ScoringError> {
    let a = normalize(s1);
    let b = normalize(s2);

    if a.is_empty() && b.is_empty() {
        return Ok(Verdict::Trivial(0));
    }
    if let Some(rejected) = screen(&a, &b) {
        return Ok(rejected);
    }

    let alignment = align(&a.words(), &b.words());
    let row_blanks = alignment.row_blanks();
    let column_blanks = alignment.column_blanks();

    if row_blanks > 0 && column_blanks > 0 {
        return Err(ScoringError::BlanksOnBothSides {
            left: alignment.rows.iter().map(ToString::to_string).collect(),
            right: alignment.columns.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(Verdict::Scored(
        count_to_i64(row_blanks) - count_to_i64(column_blanks),
    ))
}

/// How much of `query` is found in `name`, in `[0, 1]`.
///
/// Each query word aligned to a real word of `name` earns its length minus
/// the edit distance, when that is positive. The total is divided by the
/// number of non-space characters of the query, so extra words in `name` cost
/// nothing.
///
/// # Examples
///
/// ```
/// use lexalign::core::types::Verdict;
/// use lexalign::matching::scoring::containment;
///
/// assert_eq!(containment("rock", "rock anthem"), Verdict::Scored(1.0));
/// assert_eq!(containment("rock anthem", "rock"), Verdict::Scored(0.4));
/// ```
#[must_use]
pub fn containment(query: &str, name: &str) -> Verdict<f64> {
    let q = normalize(query);
    let n = normalize(name);

    if q.is_empty() {
        return Verdict::Trivial(1.0);
    }
    if let Some(rejected) = screen(&q, &n) {
        return rejected;
    }

    let alignment = align(&q.words(), &n.words());
    let mut found = 0usize;
    for pair in &alignment.pairs {
        let query_word = alignment.row_word(pair);
        if query_word == PLACEHOLDER || alignment.column_word(pair) == PLACEHOLDER {
            continue;
        }
        let len = query_word.chars().count();
        if pair.cost < len {
            found += len - pair.cost;
        }
    }

    Verdict::Scored(count_to_f64(found) / count_to_f64(q.non_space_count()))
}
