//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize one whitespace-delimited piece into a token candidate.
///
/// Lowercases and keeps only alphanumeric characters, so punctuation glued to a
/// word disappears: `"queue?"` → `"queue"`, `"non-repeating"` → `"nonrepeating"`.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Drop everything that is not alphanumeric
///
/// This makes accented input line up with ASCII catalog text:
/// - "café" → "cafe"
/// - "Dijkstra's" → "dijkstras"
#[cfg(feature = "unicode-normalization")]
pub fn normalize_piece(piece: &str) -> String {
    piece
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Check if a character is a combining mark (diacritic).
///
/// Some scripts classify their marks as alphabetic, so the alphanumeric
/// filter alone would keep them glued to the base letter.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Lowercases and drops non-alphanumerics; accented letters are kept as-is.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_piece(piece: &str) -> String {
    piece
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Length in characters, not bytes.
///
/// Every length threshold in the scorer is stated in characters, and tokens
/// may carry non-ASCII alphanumerics.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Truncate to at most `max` characters, appending `...` when something was cut.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}
