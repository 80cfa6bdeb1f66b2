//! Character-class predicates over normalized text.
//!
//! Policies apply these in a fixed order after their length edge cases:
//! [`is_foreign_script`] first, then [`is_clean`]. A string can fail
//! `is_clean` without being foreign script (a stray `ß` or `№`), and the
//! policies report the two situations differently.

use crate::text::tables::FOREIGN_SCRIPT_BLOCKLIST;

/// True iff every character is a lowercase ASCII letter, digit or space.
///
/// # Examples
///
/// ```
/// use lexalign::text::charset::is_clean;
///
/// assert!(is_clean("abba 1974"));
/// assert!(!is_clean("abba!"));
/// assert!(is_clean(""));
/// ```
#[must_use]
pub fn is_clean(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
}

/// True iff the string contains a character from the foreign-script block-list.
#[must_use]
pub fn is_foreign_script(s: &str) -> bool {
    s.chars().any(|c| FOREIGN_SCRIPT_BLOCKLIST.contains(c))
}
