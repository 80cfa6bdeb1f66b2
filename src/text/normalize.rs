use std::fmt;

use crate::text::tables::{is_punctuation, is_trimmable, transliterate};

/// Text produced by [`normalize`].
///
/// For clean input this holds only `a-z`, `0-9` and single interior spaces.
/// Characters outside the normalization tables are kept as-is so the charset
/// screen can still see them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedString(String);

impl NormalizedString {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, which is what all score denominators use.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    /// Characters other than the word separator.
    #[must_use]
    pub fn non_space_count(&self) -> usize {
        self.0.chars().filter(|&c| c != ' ').count()
    }

    /// Split on single spaces. An empty string yields one empty word.
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        self.0.split(' ').collect()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize raw text for word-level comparison.
///
/// Lowercases, turns punctuation into spaces, transliterates accented letters,
/// collapses runs of spaces and trims both ends. Total and idempotent.
///
/// # Examples
///
/// ```
/// use lexalign::text::normalize;
///
/// assert_eq!(normalize("Hello, World!").as_str(), "hello world");
/// assert_eq!(normalize("Mötley Crüe").as_str(), "motley crue");
/// assert_eq!(normalize("   ").as_str(), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> NormalizedString {
    let lowered = raw.to_lowercase();
    let mut out = String::with_capacity(lowered.len());

    for c in lowered.chars() {
        let c = if is_punctuation(c) {
            ' '
        } else {
            transliterate(c).unwrap_or(c)
        };

        // Only plain spaces collapse; tabs and other whitespace are kept
        if c == ' ' && out.ends_with(' ') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(is_trimmable);
    if trimmed.len() == out.len() {
        NormalizedString(out)
    } else {
        NormalizedString(trimmed.to_string())
    }
}
