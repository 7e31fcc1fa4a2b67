//! Static symbol tables for Praat notation ↔ Unicode transcoding
//!
//! Praat spells phonetic symbols as three-character backslash escapes
//! (`\sw` is schwa, `\as` is the unrounded open back vowel, ...). The
//! tables below pair every known escape with its Unicode counterpart.
//! Vowels and consonants are kept in separate constant tables so the
//! vowel inventory can be derived without re-listing it.
//!
//! All lookup maps are built once and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Vowel symbols, Praat escape → Unicode.
pub const VOWEL_SYMBOLS: &[(&str, char)] = &[
    (r"\i-", '\u{0268}'), // unrounded close central
    (r"\u-", '\u{0289}'), // rounded close central
    (r"\mt", '\u{026f}'), // unrounded close back
    (r"\ic", '\u{026a}'), // unrounded close lax front
    (r"\yc", '\u{028f}'), // rounded close lax front
    (r"\hs", '\u{028a}'), // rounded close lax back
    (r"\o/", 'ø'),        // rounded close-mid front
    (r"\e-", '\u{0258}'), // unrounded close-mid central
    (r"\o-", '\u{0275}'), // rounded close-mid central
    (r"\rh", '\u{0264}'), // unrounded close-mid back
    (r"\sw", '\u{0259}'), // neutral vowel, schwa
    (r"\ef", 'ɛ'),        // unrounded open-mid front
    (r"\oe", 'œ'),        // rounded open-mid front
    (r"\er", '\u{025c}'), // unrounded open-mid central
    (r"\kb", '\u{025e}'), // rounded open-mid central
    (r"\vt", '\u{028c}'), // unrounded open-mid back
    (r"\ct", '\u{0254}'), // rounded open-mid back
    (r"\ae", 'æ'),        // unrounded nearly open back
    (r"\at", '\u{0250}'), // unrounded open central
    (r"\Oe", '\u{0276}'), // rounded open front
    (r"\as", '\u{0251}'), // unrounded open back
    (r"\ab", '\u{0252}'), // rounded open back
];

/// Consonant symbols, Praat escape → Unicode.
pub const CONSONANT_SYMBOLS: &[(&str, char)] = &[
    (r"\t.", '\u{0288}'), // voiceless retroflex plosive
    (r"\?-", '\u{02a1}'), // voiceless epiglottal plosive
    (r"\?g", '\u{0294}'), // voiceless glottal plosive
    (r"\d.", '\u{0256}'), // voiced retroflex plosive
    (r"\j-", '\u{025f}'), // voiced palatal plosive
    (r"\gs", '\u{0261}'), // voiced velar plosive
    (r"\gc", '\u{0262}'), // voiced uvular plosive
    (r"\mj", '\u{0271}'), // voiced labiodental nasal
    (r"\n.", '\u{0273}'), // voiced retroflex nasal
    (r"\ng", 'ŋ'),        // voiced velar nasal
    (r"\nc", '\u{0274}'), // voiced uvular nasal
    (r"\ff", '\u{0278}'), // voiced bilabial fricative
    (r"\tf", '\u{019f}'), // voiceless dental fricative
    (r"\l-", '\u{026c}'), // voiceless alveolodental fricative
    (r"\sh", '\u{0283}'), // voiceless postalveolar fricative
    (r"\s.", '\u{0282}'), // voiceless retroflex fricative
    (r"\cc", '\u{0255}'), // voiceless alveolopalatal fricative
    (r"\c,", 'ç'),        // voiceless palatal fricative
    (r"\wt", '\u{028d}'), // voiceless labiovelar fricative
    (r"\cf", '\u{03c7}'), // voiceless uvular fricative
    (r"\h-", '\u{0127}'), // voiceless pharyngeal fricative
    (r"\hc", '\u{029c}'), // voiceless epiglottal fricative
    (r"\bf", '\u{03b2}'), // voiced bilabial fricative
    (r"\dh", '\u{00f0}'), // voiced dental fricative
    (r"\lz", '\u{026e}'), // voiced lateral fricative
    (r"\zh", '\u{0292}'), // voiced postalveolar fricative
    (r"\z.", '\u{0290}'), // voiced retroflex fricative
    (r"\zc", '\u{0291}'), // voiced alveolopalatal fricative
    (r"\jc", '\u{029d}'), // voiced palatal fricative
    (r"\gf", '\u{0263}'), // voiced velar fricative
    (r"\ri", '\u{0281}'), // voiced uvular fricative
    (r"\9e", '\u{0295}'), // voiced pharyngeal fricative
    (r"\9-", '\u{02a2}'), // voiced epiglottal fricative
    (r"\h^", '\u{0266}'), // voiced glottal fricative
    (r"\vs", '\u{028b}'), // voiced labiodental approximant
    (r"\rt", '\u{0279}'), // voiced alveolar approximant
    (r"\r.", '\u{027b}'), // voiced retroflex approximant
    (r"\ht", '\u{0265}'), // voiced labial-palatal approximant
    (r"\ml", '\u{0270}'), // voiced velar approximant
    (r"\bc", '\u{0299}'), // voiced bilabial trill
    (r"\rc", '\u{0280}'), // voiced uvular trill
    (r"\fh", '\u{027e}'), // voiced alveolar tap
    (r"\rl", '\u{027a}'), // voiced lateral flap
    (r"\f.", '\u{027d}'), // voiced retroflex flap
    (r"\l.", '\u{026d}'), // voiced retroflex lateral
    (r"\yt", '\u{028e}'), // voiced lateral approximant
    (r"\lc", '\u{029f}'), // voiced velar lateral approximant
    (r"\b^", '\u{0253}'), // bilabial implosive stop
    (r"\d^", '\u{0257}'), // alveolar implosive stop
    (r"\j^", '\u{0284}'), // palatal implosive stop
    (r"\g^", '\u{0260}'), // velar implosive stop
    (r"\G^", '\u{029b}'), // uvular implosive stop
    (r"\O.", '\u{0298}'), // bilabial click
    (r"\|1", '\u{01c0}'), // dental click
    (r"\|2", '\u{01c1}'), // lateral click
    (r"\|-", '\u{01c2}'), // palatoalveolar click
    (r"\l~", '\u{026b}'), // velarized voiced alveolar lateral appr.
    (r"\hj", '\u{0267}'), // rounded postalveolar-velar fricative
];

/// Inline diacritics: plain substitutions with no positional behavior.
pub const INLINE_DIACRITICS: &[(&str, char)] = &[
    (r"\:f", '\u{02d0}'), // length mark
    (r"\.f", '\u{02d1}'), // half-length mark
    (r"\'1", '\u{02c8}'), // primary stress
    (r"\'2", '\u{02cc}'), // secondary stress
    (r"\|f", '|'),        // "phonetic stroke"
    (r"\cn", '\u{031a}'), // unreleased
    (r"\er", '\u{02de}'), // rhotic
];

/// Index diacritics: combining over/understrike marks that attach to the
/// symbol they follow.
pub const INDEX_DIACRITICS: &[(&str, char)] = &[
    (r"\|v", '\u{0329}'), // syllabic (under)
    (r"\0v", '\u{0325}'), // voiceless (under)
    (r"\Tv", '\u{031e}'), // lowered (under)
    (r"\T^", '\u{031d}'), // raised (under)
    (r"\T(", '\u{0318}'), // ATR (under)
    (r"\T)", '\u{0319}'), // RTR (under)
    (r"\-v", '\u{0320}'), // backed (under)
    (r"\+v", '\u{031f}'), // fronted (under)
    (r"\:v", '\u{0324}'), // breathy voiced (under)
    (r"\~v", '\u{0330}'), // creaky voiced (under)
    (r"\Nv", '\u{032a}'), // dental (under)
    (r"\Uv", '\u{033a}'), // apical (under)
    (r"\Dv", '\u{033b}'), // laminal (under)
    (r"\nv", '\u{032f}'), // nonsyllabic (under)
    (r"\3v", '\u{0339}'), // slightly rounded (under)
    (r"\cv", '\u{031c}'), // slightly unrounded (under)
    (r"\0^", '\u{030a}'), // voiceless (over)
    (r"\'^", '\u{0301}'), // high tone (over)
    (r"\`^", '\u{0300}'), // low tone (over)
    (r"\-^", '\u{0304}'), // mid tone (over)
    (r"\~^", '\u{0303}'), // nasalized (over)
    (r"\v^", '\u{030c}'), // rising tone (over)
    (r"\^^", '\u{0302}'), // falling tone (over)
    (r"\:^", '\u{0308}'), // centralized (over)
    (r"\N^", '\u{0306}'), // short (over)
    (r"\li", '\u{0361}'), // simultaneous articulation (over)
];

/// Vowels spelled as ordinary letters in either notation.
pub const PLAIN_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'æ', 'ø'];

/// All symbol escapes (vowels and consonants), Praat → Unicode.
pub fn symbols() -> &'static HashMap<&'static str, char> {
    static MAP: Lazy<HashMap<&'static str, char>> = Lazy::new(|| {
        VOWEL_SYMBOLS
            .iter()
            .chain(CONSONANT_SYMBOLS.iter())
            .copied()
            .collect()
    });
    &MAP
}

/// Inline diacritics, Praat → Unicode.
pub fn inline_diacritics() -> &'static HashMap<&'static str, char> {
    static MAP: Lazy<HashMap<&'static str, char>> =
        Lazy::new(|| INLINE_DIACRITICS.iter().copied().collect());
    &MAP
}

/// Index (combining) diacritics, Praat → Unicode.
pub fn index_diacritics() -> &'static HashMap<&'static str, char> {
    static MAP: Lazy<HashMap<&'static str, char>> =
        Lazy::new(|| INDEX_DIACRITICS.iter().copied().collect());
    &MAP
}

/// Reverse map for symbols and inline diacritics, Unicode → Praat.
///
/// Inline diacritics are inserted last so that on a collision the
/// diacritic escape wins, matching the forward direction where `\er`
/// reads as the rhotic hook rather than the open-mid central vowel.
pub(crate) fn reverse_inline() -> &'static HashMap<char, &'static str> {
    static MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
        VOWEL_SYMBOLS
            .iter()
            .chain(CONSONANT_SYMBOLS.iter())
            .chain(INLINE_DIACRITICS.iter())
            .map(|&(praat, uni)| (uni, praat))
            .collect()
    });
    &MAP
}

/// Reverse map for index diacritics, Unicode → Praat.
pub(crate) fn reverse_index() -> &'static HashMap<char, &'static str> {
    static MAP: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
        INDEX_DIACRITICS
            .iter()
            .map(|&(praat, uni)| (uni, praat))
            .collect()
    });
    &MAP
}
