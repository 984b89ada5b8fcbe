//! Script-class predicates for phonetic ("reading") fields.

/// Code point ranges of the Unicode `Katakana` script property.
///
/// The prolonged sound mark U+30FC and the middle dot U+30FB belong to the
/// `Common` script and are deliberately absent.
const KATAKANA_RANGES: &[(char, char)] = &[
    ('\u{30A1}', '\u{30FA}'),
    ('\u{30FD}', '\u{30FF}'),
    ('\u{31F0}', '\u{31FF}'),
    ('\u{32D0}', '\u{32FE}'),
    ('\u{3300}', '\u{3357}'),
    ('\u{FF66}', '\u{FF6F}'),
    ('\u{FF71}', '\u{FF9D}'),
    ('\u{1AFF0}', '\u{1AFF3}'),
    ('\u{1AFF5}', '\u{1AFFB}'),
    ('\u{1AFFD}', '\u{1AFFE}'),
    ('\u{1B000}', '\u{1B000}'),
    ('\u{1B120}', '\u{1B122}'),
    ('\u{1B155}', '\u{1B155}'),
    ('\u{1B164}', '\u{1B167}'),
];

/// Whether `c` belongs to the Katakana script.
pub fn is_katakana_char(c: char) -> bool {
    KATAKANA_RANGES
        .iter()
        .any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Whether every code point of `s` is katakana.
///
/// An empty string is vacuously katakana; emptiness is a separate length rule.
pub fn is_katakana(s: &str) -> bool {
    s.chars().all(is_katakana_char)
}

/// Length in Unicode scalar values (not bytes).
pub fn char_count(s: &str) -> usize {
    s.chars().count()
}
