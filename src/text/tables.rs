//! Fixed character tables used by the normalizer and the charset screen.

/// Typographic symbols treated like ASCII punctuation.
pub const EXTRA_PUNCTUATION: [char; 9] = ['’', '”', '“', '®', '´', '¿', '–', '—', '′'];

/// Characters from scripts the normalizer cannot reduce to Latin text.
///
/// Seeing any of these is enough to skip alignment for the pair.
pub const FOREIGN_SCRIPT_BLOCKLIST: &str =
    "恋きьч叙강œðאםច石タнー花ə츄шþ植空洛æクđ러海砂어你и黄다두윈說йп✞";

/// Whether `c` is replaced by a space during normalization.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Base letter (or digit) for a character in the accent table.
#[must_use]
pub fn transliterate(c: char) -> Option<char> {
    let base = match c {
        'ọ' | 'ô' | 'õ' | 'ö' | 'ő' | 'ó' | 'ø' | 'ò' => 'o',
        'ū' | 'ù' | 'ü' | 'ú' => 'u',
        'ē' | 'é' | 'ë' | 'ê' | 'è' => 'e',
        'ⅰ' | 'ì' | 'í' | 'ï' | 'ı' => 'i',
        'ă' | 'ä' | 'á' | 'à' | 'ą' | 'å' | 'ã' | 'α' | 'ā' | 'â' => 'a',
        '²' => '2',
        'ś' | 'š' | 'ş' => 's',
        'ł' => 'l',
        'ż' | 'ž' => 'z',
        'ń' | 'ñ' | 'ņ' => 'n',
        'ÿ' | 'ý' => 'y',
        'ğ' => 'g',
        'ř' => 'r',
        'ç' | 'ć' | 'č' => 'c',
        _ => return None,
    };
    Some(base)
}

/// Whitespace trimmed from both ends of a normalized string.
///
/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F),
/// which line-oriented inputs occasionally carry.
#[must_use]
pub fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
