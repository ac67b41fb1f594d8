//! Character classification for the Khmer script block
//!
//! Every code point is assigned the role it plays inside an orthographic
//! syllable. Classification is total: code points outside the table are
//! [`CharClass::Other`] and pass through the pipeline untouched.

/// The subscript consonant marker (coeng), U+17D2.
pub const COENG: char = '\u{17D2}';

/// The consonant ro, U+179A. Its subscript form renders before the base
/// and is ordered after every other subscript cluster.
pub const RO: char = '\u{179A}';

/// Role of a code point inside a Khmer orthographic syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharClass {
    /// Base consonant (U+1780..=U+17A2)
    Consonant,
    /// Independent vowel, can head a syllable (U+17A3..=U+17B3)
    IndependentVowel,
    /// Dependent vowel sign (U+17B6..=U+17C5)
    DependentVowel,
    /// Subscript consonant marker (U+17D2)
    Coeng,
    /// Register shifter (U+17C9, U+17CA)
    RegisterShifter,
    /// Robat (U+17CC)
    Robat,
    /// Diacritic rendered above or below its base
    NonSpacingDiacritic,
    /// Diacritic that takes horizontal space (U+17C7, U+17C8)
    SpacingDiacritic,
    /// Zero-width or invisible formatting character
    ZeroWidth,
    /// Anything else; never rewritten
    Other,
}

impl CharClass {
    /// True for classes that can head a syllable.
    pub fn is_base(self) -> bool {
        matches!(self, CharClass::Consonant | CharClass::IndependentVowel)
    }

    /// True for classes that extend a syllable without starting a new
    /// cluster: vowel signs, diacritics, and invisible characters.
    pub fn extends_syllable(self) -> bool {
        matches!(
            self,
            CharClass::DependentVowel
                | CharClass::RegisterShifter
                | CharClass::Robat
                | CharClass::NonSpacingDiacritic
                | CharClass::SpacingDiacritic
                | CharClass::ZeroWidth
        )
    }
}

/// Classification ranges, sorted by code point for binary search.
const CLASS_RANGES: &[(u32, u32, CharClass)] = &[
    (0x00AD, 0x00AD, CharClass::ZeroWidth), // soft hyphen
    (0x1780, 0x17A2, CharClass::Consonant),
    (0x17A3, 0x17B3, CharClass::IndependentVowel),
    (0x17B6, 0x17C5, CharClass::DependentVowel),
    (0x17C6, 0x17C6, CharClass::NonSpacingDiacritic), // nikahit
    (0x17C7, 0x17C8, CharClass::SpacingDiacritic),    // reahmuk, yuukaleapintu
    (0x17C9, 0x17CA, CharClass::RegisterShifter),
    (0x17CB, 0x17CB, CharClass::NonSpacingDiacritic), // bantoc
    (0x17CC, 0x17CC, CharClass::Robat),
    (0x17CD, 0x17D1, CharClass::NonSpacingDiacritic),
    (0x17D2, 0x17D2, CharClass::Coeng),
    (0x17DD, 0x17DD, CharClass::NonSpacingDiacritic), // atthacan
    (0x200B, 0x200D, CharClass::ZeroWidth),
    (0x2063, 0x2063, CharClass::ZeroWidth), // invisible separator
];

/// Classify a code point by its syllabic role.
pub fn classify(ch: char) -> CharClass {
    let cp = ch as u32;
    let found = CLASS_RANGES.binary_search_by(|&(start, end, _)| {
        if cp < start {
            std::cmp::Ordering::Greater
        } else if cp > end {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Equal
        }
    });
    match found {
        Ok(idx) => CLASS_RANGES[idx].2,
        Err(_) => CharClass::Other,
    }
}
