//! Character-level script classification for Japanese text.
//!
//! All checks work on `char` (Unicode scalar values), never on bytes, so a
//! multi-byte code point is never split mid-match.

use std::ops::RangeInclusive;

/// CJK Unified Ideographs (the range used for kanji detection)
const CJK_UNIFIED: RangeInclusive<char> = '\u{4E00}'..='\u{9FAF}';

/// CJK Unified Ideographs Extension A
const CJK_EXTENSION_A: RangeInclusive<char> = '\u{3400}'..='\u{4DBF}';

const HIRAGANA: RangeInclusive<char> = '\u{3040}'..='\u{309F}';

const KATAKANA: RangeInclusive<char> = '\u{30A0}'..='\u{30FF}';

/// Offset between a katakana letter and its hiragana counterpart.
const KANA_OFFSET: u32 = 0x60;

/// Punctuation allowed inside a romanized gloss.
const LATIN_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', '\'', '-'];

/// Coarse script of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
  /// Kanji (CJK Unified Ideographs + Extension A)
  Logographic,
  /// Hiragana
  Hiragana,
  /// Katakana (including the prolonged sound mark ー)
  Katakana,
  /// ASCII letters
  Latin,
  /// Everything else (digits, punctuation, whitespace, symbols)
  Other,
}

impl Script {
  /// Classifies one character.
  pub fn of(c: char) -> Self {
    if is_logographic(c) {
      Script::Logographic
    } else if is_hiragana(c) {
      Script::Hiragana
    } else if is_katakana(c) {
      Script::Katakana
    } else if c.is_ascii_alphabetic() {
      Script::Latin
    } else {
      Script::Other
    }
  }
}

/// Returns true if `c` is a kanji in U+4E00–U+9FAF or U+3400–U+4DBF.
pub fn is_logographic(c: char) -> bool {
  CJK_UNIFIED.contains(&c) || CJK_EXTENSION_A.contains(&c)
}

/// Hiragana block (U+3040–U+309F).
pub fn is_hiragana(c: char) -> bool {
  HIRAGANA.contains(&c)
}

/// Katakana block (U+30A0–U+30FF).
pub fn is_katakana(c: char) -> bool {
  KATAKANA.contains(&c)
}

/// Hiragana or katakana.
pub fn is_kana(c: char) -> bool {
  is_hiragana(c) || is_katakana(c)
}

/// Unicode whitespace or the byte order mark U+FEFF.
///
/// Imported decks sometimes carry a BOM in front of a field.
pub fn is_blank(c: char) -> bool {
  c.is_whitespace() || c == '\u{FEFF}'
}

/// Trims [`is_blank`] characters from both ends.
pub fn trim_blank(s: &str) -> &str {
  s.trim_matches(is_blank)
}

/// ASCII letter, blank, or one of `. , ! ? ' -`.
pub fn is_latin_only_char(c: char) -> bool {
  c.is_ascii_alphabetic() || is_blank(c) || LATIN_PUNCTUATION.contains(&c)
}

/// Returns true if `s` contains at least one logographic character.
///
/// The empty string contains none and returns false.
pub fn has_logographic(s: &str) -> bool {
  s.chars().any(is_logographic)
}

/// Returns true if `s`, once trimmed, is a non-empty romanized string.
///
/// Only ASCII letters, blanks and `. , ! ? ' -` are accepted. Used to
/// reject romaji glosses such as `"konnichiwa"` as phonetic readings.
pub fn is_latin_only(s: &str) -> bool {
  let trimmed = trim_blank(s);
  !trimmed.is_empty() && trimmed.chars().all(is_latin_only_char)
}

/// Folds a katakana letter onto its hiragana counterpart.
///
/// Characters without a hiragana counterpart (ー, ヷ..ヺ, ・, non-kana) are
/// returned unchanged.
pub fn katakana_to_hiragana(c: char) -> char {
  if ('\u{30A1}'..='\u{30F6}').contains(&c) {
    char::from_u32(c as u32 - KANA_OFFSET).unwrap_or(c)
  } else {
    c
  }
}
