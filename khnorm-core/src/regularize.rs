//! Replacement of obsolete, deprecated, invisible, and variant code points
//!
//! These rewrites run once, before segmentation. Every match is a single
//! code point and no replacement contains a match, so a single pass
//! reaches the fixed point.

/// Substitution table: legacy code point to its modern spelling.
const REPLACEMENTS: &[(char, &str)] = &[
    ('\u{17A8}', "\u{17A7}\u{1780}"), // obsolete ligature quk: qu + ka
    ('\u{17A3}', "\u{17A2}"),         // deprecated independent qaq
    ('\u{17A4}', "\u{17A2}\u{17B6}"), // deprecated digraph qaa
    ('\u{17B2}', "\u{17B1}"),         // variant spelling of qoo
    ('\u{17B4}', ""),                 // invisible inherent aq
    ('\u{17B5}', ""),                 // invisible inherent aa
    ('\u{17DD}', "\u{17D1}"),         // obsolete atthacan: viriam
    ('\u{17D3}', "\u{17C6}"),         // deprecated bathamasat: nikahit
    ('\u{17D8}', "\u{17D4}\u{179B}\u{17D4}"), // deprecated beyyal: khan + lo + khan
];

/// Replace legacy code points with their modern spellings.
///
/// The output never contains a replaceable code point, so applying this
/// twice gives the same result as applying it once.
pub fn regularize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out
}
