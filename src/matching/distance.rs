//! Damerau-Levenshtein distance between words.
//!
//! Unit cost for insertion, deletion, substitution and transposition of two
//! adjacent characters. This is the unrestricted variant: characters may be
//! inserted between a transposed pair, so `ca` -> `abc` costs 2 (the
//! restricted "optimal string alignment" variant would say 3).
//!
//! # Complexity
//! O(m × n) time and space, m and n being the word lengths in characters.

/// Edit distance between two words, ignoring case.
///
/// # Examples
///
/// ```
/// use lexalign::matching::distance::word_distance;
///
/// assert_eq!(word_distance("kitten", "sitting"), 3);
/// assert_eq!(word_distance("recieve", "receive"), 1);
/// assert_eq!(word_distance("abc", ""), 3);
/// ```
#[must_use]
pub fn word_distance(a: &str, b: &str) -> usize {
    strsim::damerau_levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(word_distance("", ""), 0);
        assert_eq!(word_distance("abc", ""), 3);
        assert_eq!(word_distance("", "xyzw"), 4);
    }

    #[test]
    fn test_identical_and_case() {
        assert_eq!(word_distance("hello", "hello"), 0);
        assert_eq!(word_distance("Hello", "hELLO"), 0);
    }

    #[test]
    fn test_single_operations() {
        assert_eq!(word_distance("cat", "hat"), 1); // substitution
        assert_eq!(word_distance("cat", "cats"), 1); // insertion
        assert_eq!(word_distance("cats", "cat"), 1); // deletion
        assert_eq!(word_distance("ab", "ba"), 1); // transposition
    }

    #[test]
    fn test_classic_examples() {
        assert_eq!(word_distance("kitten", "sitting"), 3);
        assert_eq!(word_distance("saturday", "sunday"), 3);
        assert_eq!(word_distance("cat", "dog"), 3);
    }

    #[test]
    fn test_unrestricted_transposition() {
        // Edit between a transposed pair is allowed
        assert_eq!(word_distance("ca", "abc"), 2);
        assert_eq!(word_distance("abcdef", "badcfe"), 3);
    }

    #[test]
    fn test_symmetric() {
        let words = ["thriller", "thirller", "believer", "beleiver", "a", ""];
        for a in words {
            for b in words {
                assert_eq!(word_distance(a, b), word_distance(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(word_distance("beyoncé", "beyonce"), 1);
        assert_eq!(word_distance("Ölmez", "ölmez"), 0);
        assert_eq!(word_distance("恋", ""), 1);
    }
}
