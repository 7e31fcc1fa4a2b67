//! Praat-notation ↔ Unicode transcription conversions
//!
//! Praat stores phonetic labels in an ASCII escape notation; analysis code
//! usually wants real IPA. [`Transcript`] wraps a label string and offers
//! [`Transcript::transcode`] in both directions.
//!
//! Transcoding is deliberately non-validating: tokens that are not in the
//! symbol tables pass through unchanged, so feeding it text that is not in
//! the assumed notation mostly leaves that text alone. That is a
//! best-effort contract, not a guarantee — a stray backslash sequence that
//! happens to spell a known escape will still be substituted.
//!
//! Index (combining) diacritics attach to the symbol they follow in both
//! notations, so substitution is positional only in the sense that the
//! combining mark must stay adjacent to its base. With
//! `retain_diacritics = false` (the usual choice for graph-level text
//! analysis) index diacritics are stripped instead of converted; that is
//! lossy and cannot be undone.

pub mod symbols;

use serde::Serialize;
use std::fmt;
use std::ops::Deref;

pub use symbols::{
    index_diacritics, inline_diacritics, symbols, CONSONANT_SYMBOLS, INDEX_DIACRITICS,
    INLINE_DIACRITICS, PLAIN_VOWELS, VOWEL_SYMBOLS,
};

/// Transcoding direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Praat escape notation → Unicode/IPA
    #[default]
    ToUnicode,
    /// Unicode/IPA → Praat escape notation
    ToPraat,
}

/// Convert a label between Praat notation and Unicode.
///
/// When `retain_diacritics` is false, index diacritics are removed instead
/// of converted. Unmatched input passes through unchanged.
pub fn transcode(text: &str, direction: Direction, retain_diacritics: bool) -> String {
    match direction {
        Direction::ToUnicode => praat_to_unicode(text, retain_diacritics),
        Direction::ToPraat => unicode_to_praat(text, retain_diacritics),
    }
}

fn praat_to_unicode(text: &str, retain_diacritics: bool) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '\\' && i + 2 < chars.len() {
            let token: String = chars[i..i + 3].iter().collect();
            if let Some(&mark) = symbols::index_diacritics().get(token.as_str()) {
                // The escape already follows its base symbol, which is
                // exactly where the combining mark belongs.
                if retain_diacritics {
                    out.push(mark);
                }
                i += 3;
                continue;
            }
            // Inline diacritics first: \er is both a vowel symbol and the
            // rhotic hook, and the hook reading wins.
            if let Some(&uni) = symbols::inline_diacritics()
                .get(token.as_str())
                .or_else(|| symbols::symbols().get(token.as_str()))
            {
                out.push(uni);
                i += 3;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn unicode_to_praat(text: &str, retain_diacritics: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if let Some(&token) = symbols::reverse_index().get(&c) {
            if retain_diacritics {
                out.push_str(token);
            }
            continue;
        }
        if let Some(&token) = symbols::reverse_inline().get(&c) {
            out.push_str(token);
            continue;
        }
        out.push(c);
    }
    out
}

/// The set of symbols counted as vowels by the vowel-detection helpers.
///
/// The default inventory holds the plain-letter vowels plus every vowel
/// symbol in both notations. Callers needing project-specific symbols
/// extend a set explicitly rather than mutating shared state.
#[derive(Debug, Clone)]
pub struct VowelSet {
    entries: Vec<String>,
}

impl VowelSet {
    /// The default inventory extended with additional symbols.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        set.entries.extend(extra.into_iter().map(Into::into));
        set
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for VowelSet {
    fn default() -> Self {
        let mut entries: Vec<String> = PLAIN_VOWELS.iter().map(|c| c.to_string()).collect();
        for &(praat, uni) in VOWEL_SYMBOLS {
            entries.push(praat.to_string());
            entries.push(uni.to_string());
        }
        VowelSet { entries }
    }
}

/// A label string with a dual reading: Praat notation or Unicode.
///
/// Which reading currently holds is not stored anywhere — the caller must
/// know (or assume) it, and `transcode` produces a new `Transcript` in the
/// other reading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Transcript(String);

impl Transcript {
    pub fn new(text: impl Into<String>) -> Self {
        Transcript(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert between notations; see the module docs for the contract.
    pub fn transcode(&self, direction: Direction, retain_diacritics: bool) -> Transcript {
        Transcript(transcode(&self.0, direction, retain_diacritics))
    }

    /// Does the label contain a vowel in either notation?
    pub fn contains_vowel(&self, vowels: &VowelSet) -> bool {
        vowels.iter().any(|v| self.0.contains(v))
    }

    /// Does the label start with a vowel?
    pub fn starts_with_vowel(&self, vowels: &VowelSet) -> bool {
        vowels.iter().any(|v| self.0.starts_with(v))
    }

    /// Does the label end with a vowel?
    ///
    /// Index diacritics are discarded before testing, so a nasalized
    /// `a\~^` still ends with a vowel even though the raw string ends
    /// with an escape.
    pub fn ends_with_vowel(&self, vowels: &VowelSet) -> bool {
        let stripped = transcode(&self.0, Direction::ToUnicode, false);
        vowels.iter().any(|v| stripped.ends_with(v))
    }
}

impl Deref for Transcript {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Transcript {
    fn from(s: &str) -> Self {
        Transcript(s.to_string())
    }
}

impl From<String> for Transcript {
    fn from(s: String) -> Self {
        Transcript(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(transcode("a", Direction::ToUnicode, false), "a");
        assert_eq!(transcode("hello", Direction::ToUnicode, true), "hello");
        assert_eq!(transcode("hello", Direction::ToPraat, true), "hello");
    }

    #[test]
    fn symbols_convert_both_ways() {
        assert_eq!(transcode(r"\sw", Direction::ToUnicode, false), "ə");
        assert_eq!(transcode("ə", Direction::ToPraat, false), r"\sw");
        assert_eq!(transcode(r"p\sw.t\ae", Direction::ToUnicode, false), "pə.tæ");
    }

    #[test]
    fn unknown_escapes_pass_through() {
        assert_eq!(transcode(r"\xx", Direction::ToUnicode, true), r"\xx");
        // A trailing backslash with nothing after it is left alone too
        assert_eq!(transcode(r"a\", Direction::ToUnicode, true), r"a\");
        assert_eq!(transcode(r"a\s", Direction::ToUnicode, true), r"a\s");
    }

    #[test]
    fn inline_diacritics_are_substituted() {
        assert_eq!(transcode(r"a\:f", Direction::ToUnicode, false), "aː");
        assert_eq!(transcode("aː", Direction::ToPraat, false), r"a\:f");
    }

    #[test]
    fn index_diacritics_stripped_by_default() {
        assert_eq!(transcode(r"a\~^", Direction::ToUnicode, false), "a");
        assert_eq!(transcode("a\u{0303}", Direction::ToPraat, false), "a");
    }

    #[test]
    fn index_diacritics_compose_after_base() {
        assert_eq!(transcode(r"a\~^", Direction::ToUnicode, true), "a\u{0303}");
        assert_eq!(transcode("a\u{0303}", Direction::ToPraat, true), r"a\~^");
    }

    #[test]
    fn round_trip_with_retained_diacritics() {
        let praat = r"\'1m\ae\~^.t\sw\:f";
        let uni = transcode(praat, Direction::ToUnicode, true);
        assert_eq!(uni, "\u{02c8}mæ\u{0303}.tə\u{02d0}");
        assert_eq!(transcode(&uni, Direction::ToPraat, true), praat);
    }

    #[test]
    fn rhotic_reading_wins_for_er() {
        assert_eq!(transcode(r"\er", Direction::ToUnicode, false), "\u{02de}");
        // Both Unicode counterparts decompose to the same escape
        assert_eq!(transcode("\u{02de}", Direction::ToPraat, false), r"\er");
        assert_eq!(transcode("\u{025c}", Direction::ToPraat, false), r"\er");
    }

    #[test]
    fn transcript_wraps_and_transcodes() {
        let t = Transcript::new(r"\sw");
        assert_eq!(t.as_str(), r"\sw");
        assert_eq!(t.transcode(Direction::ToUnicode, false).as_str(), "ə");
        assert_eq!(t.to_string(), r"\sw");
    }

    #[test]
    fn vowel_detection() {
        let vowels = VowelSet::default();
        assert!(Transcript::new("pa").contains_vowel(&vowels));
        assert!(!Transcript::new("pst").contains_vowel(&vowels));
        assert!(Transcript::new(r"\swpt").starts_with_vowel(&vowels));
        assert!(!Transcript::new("tip").starts_with_vowel(&vowels));
        // The trailing nasalization mark is stripped before the suffix test
        assert!(Transcript::new(r"pa\~^").ends_with_vowel(&vowels));
        assert!(!Transcript::new("pat").ends_with_vowel(&vowels));
    }

    #[test]
    fn vowel_set_extension() {
        let vowels = VowelSet::with_extra(["ɚ"]);
        assert!(Transcript::new("ɚ").contains_vowel(&vowels));
        assert!(!Transcript::new("ɚ").contains_vowel(&VowelSet::default()));
    }
}
