//! Canonical reordering of a single orthographic syllable
//!
//! A syllable is rebuilt as base + register shifters + robat + subscript
//! clusters + dependent vowels + non-spacing diacritics + spacing
//! diacritics. Within each group the original order is kept, except that
//! subscript ro always moves behind the other subscripts. Repeated signs
//! and mergeable vowel pairs collapse on the way out.

use crate::chars::{classify, CharClass, COENG, RO};
use smallvec::SmallVec;

/// Vowel pairs written as a single code point in canonical order.
const VOWEL_MERGES: &[(&str, &str)] = &[
    ("\u{17C1}\u{17B8}", "\u{17BE}"), // e + ii
    ("\u{17B8}\u{17C1}", "\u{17BE}"), // ii + e
    ("\u{17C1}\u{17B6}", "\u{17C4}"), // e + aa
];

/// A reordering unit: a subscript cluster or a single sign.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Chunk {
    chars: SmallVec<[char; 3]>,
}

impl Chunk {
    fn single(ch: char) -> Self {
        let mut chars = SmallVec::new();
        chars.push(ch);
        Chunk { chars }
    }

    fn cluster(base: char, shifter: Option<char>) -> Self {
        let mut chars = SmallVec::new();
        chars.push(COENG);
        chars.push(base);
        if let Some(shifter) = shifter {
            chars.push(shifter);
        }
        Chunk { chars }
    }

    fn class(&self) -> CharClass {
        classify(self.chars[0])
    }

    /// True for a subscript cluster whose consonant is ro.
    fn is_ro_cluster(&self) -> bool {
        self.chars.first() == Some(&COENG) && self.chars.get(1) == Some(&RO)
    }
}

/// Rewrite one orthographic syllable into canonical sign order.
///
/// The first character is kept as the base; the signs after it are
/// grouped by class and reassembled in canonical order. Inputs that are
/// not syllables (empty, a single character, or not starting with a
/// consonant or independent vowel) come back unchanged, so the function
/// is total. The output never has more characters than the input.
pub fn reorder_syllable(syllable: &str) -> String {
    let chars: Vec<char> = syllable.chars().collect();
    if chars.len() <= 1 || !classify(chars[0]).is_base() {
        return syllable.to_string();
    }

    let mut shifters = Vec::new();
    let mut robats = Vec::new();
    let mut clusters = Vec::new();
    let mut vowels = Vec::new();
    let mut nonspacing = Vec::new();
    let mut spacing = Vec::new();

    for chunk in chunk_signs(&chars[1..]) {
        match chunk.class() {
            CharClass::RegisterShifter => shifters.push(chunk),
            CharClass::Robat => robats.push(chunk),
            CharClass::Coeng => clusters.push(chunk),
            CharClass::DependentVowel => vowels.push(chunk),
            CharClass::NonSpacingDiacritic => nonspacing.push(chunk),
            CharClass::SpacingDiacritic => spacing.push(chunk),
            // zero-width characters and anything unclassified disappear
            _ => {}
        }
    }

    // subscript ro renders before the base; it sorts behind every other
    // subscript cluster
    stable_move_to_end(&mut clusters, Chunk::is_ro_cluster);

    let mut ordered = Vec::with_capacity(
        1 + shifters.len()
            + robats.len()
            + clusters.len()
            + vowels.len()
            + nonspacing.len()
            + spacing.len(),
    );
    ordered.push(Chunk::single(chars[0]));
    ordered.extend(shifters);
    ordered.extend(robats);
    ordered.extend(clusters);
    ordered.extend(vowels);
    ordered.extend(nonspacing);
    ordered.extend(spacing);

    ordered.dedup();

    let joined: String = ordered
        .iter()
        .flat_map(|chunk| chunk.chars.iter().copied())
        .collect();

    collapse_adjacent(&merge_vowels(joined))
}

/// Split the signs after the base into reordering units.
///
/// A unit is a coeng run with its following base (the run collapsed to a
/// single coeng) plus an optional register shifter, or a single sign.
/// Zero-width characters produce no unit; coengs with no base after them
/// become one unit each.
fn chunk_signs(signs: &[char]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut pos = 0;
    while pos < signs.len() {
        match classify(signs[pos]) {
            CharClass::ZeroWidth => pos += 1,
            CharClass::Coeng => {
                let mut probe = pos;
                while probe < signs.len() && classify(signs[probe]) == CharClass::Coeng {
                    probe += 1;
                }
                if probe < signs.len() && classify(signs[probe]).is_base() {
                    let base = signs[probe];
                    probe += 1;
                    let shifter = signs
                        .get(probe)
                        .copied()
                        .filter(|&ch| classify(ch) == CharClass::RegisterShifter);
                    if shifter.is_some() {
                        probe += 1;
                    }
                    chunks.push(Chunk::cluster(base, shifter));
                } else {
                    for _ in pos..probe {
                        chunks.push(Chunk::single(COENG));
                    }
                }
                pos = probe;
            }
            _ => {
                chunks.push(Chunk::single(signs[pos]));
                pos += 1;
            }
        }
    }
    chunks
}

/// Stable partition moving every element matching `pred` to the end.
///
/// Both groups keep their relative order.
fn stable_move_to_end<T>(items: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) {
    let (mut kept, moved): (Vec<T>, Vec<T>) = items.drain(..).partition(|item| !pred(item));
    kept.extend(moved);
    *items = kept;
}

/// Apply the vowel merge table, in order, over the whole syllable.
fn merge_vowels(mut syllable: String) -> String {
    for (pair, merged) in VOWEL_MERGES {
        if syllable.contains(pair) {
            syllable = syllable.replace(pair, merged);
        }
    }
    syllable
}

/// Drop the repeated characters a vowel merge can leave behind.
fn collapse_adjacent(syllable: &str) -> String {
    let mut out = String::with_capacity(syllable.len());
    let mut prev = None;
    for ch in syllable.chars() {
        if prev != Some(ch) {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out
}
