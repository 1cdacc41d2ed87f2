pub mod ports;

pub use ports::*;

use html_escape::decode_html_entities;
use once_cell::sync::Lazy;
use regex::Regex;

/// Double-encoding repairs applied to every extracted cell value. The list
/// is ordered longest pattern first so overlapping sequences are fixed
/// exactly once; replacement outputs never contain another pattern, which
/// keeps `normalize` idempotent.
const ENCODING_FIXES: &[(&str, &str)] = &[
    // cp1252-misdecoded three-byte sequences
    ("â‰¤", "≤"),
    ("â‰¥", "≥"),
    ("â€“", "–"),
    ("â€”", "—"),
    ("â€œ", "“"),
    ("â€\u{9d}", "”"),
    ("â€™", "’"),
    // latin1 variants where the middle C1 byte was dropped
    ("â¤", "≤"),
    ("â¥", "≥"),
    // two-byte sequences
    ("Ã—", "×"),
    ("Ã\u{97}", "×"),
    ("Âµ", "µ"),
    ("Â°", "°"),
    ("Â±", "±"),
    ("Â\u{a0}", " "),
];

/// Footnote and decoration markers: bracketed indices, superscript digit
/// runs, trailing asterisk/dagger runs.
static FOOTNOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\d+\]|[¹²³⁴⁵⁶⁷⁸⁹⁰]+|[*†‡]+$").expect("Invalid footnote regex")
});

/// Repair mojibake, strip footnote markers, collapse whitespace runs and
/// trim. Idempotent for all inputs; unmatched sequences pass through.
///
/// HTML entities are decoded earlier, by `clean_text` at cell-collection
/// time; decoding here would break idempotence for double-escaped text.
pub fn normalize(text: &str) -> String {
    let mut fixed = text.to_string();
    for (pattern, replacement) in ENCODING_FIXES {
        if fixed.contains(pattern) {
            fixed = fixed.replace(pattern, replacement);
        }
    }
    let stripped = FOOTNOTE_RE.replace_all(&fixed, "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean raw markup text: decode HTML entities (vendor pages double-escape
/// some cells) and collapse whitespace.
pub fn clean_text(text: &str) -> String {
    let decoded = decode_html_entities(text);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
