/// Characters that separate words, in addition to Unicode whitespace.
///
/// Apostrophes are not delimiters so contractions and possessives such as
/// `brother's` stay a single word. Slashes, digits, `&`, `#`, `@` and every
/// other character outside this set are kept inside words, so a date like
/// `18/05/2016` is one word.
pub const DELIMITERS: &[char] = &[
    '(', ')', '{', '}', '[', ']', '¬', '!', '*', '+', '-', '_', '=', '|', '~', '\\', '^', '<',
    '>', '.', '?', ';', ':', '"',
];

/// Returns true if `ch` splits words.
#[inline]
pub fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || DELIMITERS.contains(&ch)
}
