// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Soundex phonetic codes.
//!
//! Words that sound alike ("dequeue" / "dequeu", "travers" / "traverse") get
//! the same 4-character code even when edit distance says they are far apart.

/// Letter → sound class, indexed by `letter - 'A'`.
///
/// `0` marks vowel-like letters (A E I O U H W Y), which are never emitted.
const CLASS_TABLE: &[u8; 26] = b"01230120022455012623010202";

/// Length of every non-empty code.
pub const SOUNDEX_LEN: usize = 4;

/// Shortest word `sounds_like` will compare.
pub const MIN_PHONETIC_LEN: usize = 4;

#[inline]
fn sound_class(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(CLASS_TABLE[(c.to_ascii_uppercase() as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Soundex code of `word`, or the empty string for empty input.
///
/// The first character is kept (uppercased). Following ASCII letters map
/// through the class table; a class equal to the previous letter's class is
/// collapsed, and vowel-like classes are dropped but still break a run, so
/// "B-O-B" emits the second B. Non-letters are skipped without breaking a run.
/// The result is padded with `0` or truncated to 4 characters.
pub fn soundex(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut code = String::with_capacity(SOUNDEX_LEN);
    code.push(first.to_uppercase().next().unwrap_or(first));
    let mut emitted = 1;
    let mut prev = sound_class(first);

    for c in chars {
        if emitted >= SOUNDEX_LEN {
            break;
        }
        let Some(class) = sound_class(c) else {
            continue;
        };
        if class != b'0' && Some(class) != prev {
            code.push(class as char);
            emitted += 1;
        }
        prev = Some(class);
    }

    while emitted < SOUNDEX_LEN {
        code.push('0');
        emitted += 1;
    }
    code
}

/// True when both words are at least 4 characters and share a Soundex code.
pub fn sounds_like(a: &str, b: &str) -> bool {
    if a.chars().count() < MIN_PHONETIC_LEN || b.chars().count() < MIN_PHONETIC_LEN {
        return false;
    }
    soundex(a) == soundex(b)
}
