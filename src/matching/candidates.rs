//! Best-of-candidates wrappers around [`similarity`].
//!
//! Catalog titles often carry structure the query does not: a subtitle or a
//! remix tag after a hyphen, or an artist list after the title. These
//! policies score the query against several readings of the name and keep the
//! best one.
//!
//! Candidates are ranked by their encoded value, so a real score always beats
//! an unscored one, and `Invalid` (-1) beats `Ignored` (-2). Among equal
//! values the earliest candidate is kept.

use crate::core::types::{Verdict, SIMILARITY_SENTINELS};
use crate::matching::scoring::similarity;
use crate::text::normalize;

/// Outcome of [`best_title_artist_similarity`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TitleArtistMatch {
    /// The name does not contain exactly one hyphen
    Malformed,
    Best(Verdict<f64>),
}

fn keep_better(current: Option<Verdict<f64>>, candidate: Verdict<f64>) -> Verdict<f64> {
    match current {
        Some(best)
            if candidate.encoded(SIMILARITY_SENTINELS) <= best.encoded(SIMILARITY_SENTINELS) =>
        {
            best
        }
        _ => candidate,
    }
}

/// Best similarity between `query` and a growing prefix of `candidate`.
///
/// Commas are treated as hyphens. For `"Title - Subtitle - Remix"` the query
/// is scored against `"Title "`, `"Title - Subtitle "` and the full string.
///
/// # Examples
///
/// ```
/// use lexalign::core::types::Verdict;
/// use lexalign::matching::candidates::best_prefix_similarity;
///
/// assert_eq!(
///     best_prefix_similarity("halo", "Halo - Beyonce, Remix"),
///     Verdict::Scored(1.0)
/// );
/// ```
#[must_use]
pub fn best_prefix_similarity(query: &str, candidate: &str) -> Verdict<f64> {
    let hyphenated = candidate.replace(',', "-");
    let mut segments = hyphenated.split('-');

    let mut prefix = segments.next().unwrap_or_default().to_string();
    let mut best = similarity(query, &prefix);
    for segment in segments {
        prefix.push('-');
        prefix.push_str(segment);
        best = keep_better(Some(best), similarity(query, &prefix));
    }
    best
}

/// Best similarity between `query` and a `title-artist1,artist2` name.
///
/// For every artist, each of its normalized tokens is glued to the raw title
/// (no separator) and scored, then the artist alone is scored. Names without
/// exactly one hyphen are [`TitleArtistMatch::Malformed`] and nothing is
/// scored.
///
/// # Examples
///
/// ```
/// use lexalign::core::types::Verdict;
/// use lexalign::matching::candidates::{best_title_artist_similarity, TitleArtistMatch};
///
/// assert_eq!(
///     best_title_artist_similarity("jay z", "Halo-Beyonce, Jay Z"),
///     TitleArtistMatch::Best(Verdict::Scored(1.0))
/// );
/// assert_eq!(best_title_artist_similarity("q", "a-b-c"), TitleArtistMatch::Malformed);
/// ```
#[must_use]
pub fn best_title_artist_similarity(query: &str, name: &str) -> TitleArtistMatch {
    let Some((title, artists)) = name.split_once('-') else {
        return TitleArtistMatch::Malformed;
    };
    if artists.contains('-') {
        return TitleArtistMatch::Malformed;
    }

    let mut best = None;
    for artist in artists.split(',') {
        let tokens = normalize(artist);
        for token in tokens.words() {
            let joined = format!("{title}{token}");
            best = Some(keep_better(best, similarity(query, &joined)));
        }
        best = Some(keep_better(best, similarity(query, artist)));
    }

    best.map_or(TitleArtistMatch::Malformed, TitleArtistMatch::Best)
}
