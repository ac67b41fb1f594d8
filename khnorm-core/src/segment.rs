//! Syllable segmentation
//!
//! Splits text into alternating spans: orthographic syllables and the
//! stretches between them. Spans borrow from the input and concatenate
//! back to it byte for byte.

use crate::chars::{classify, CharClass};

/// Kind of a segmented span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SegmentKind {
    /// An orthographic syllable, eligible for reordering
    Syllable,
    /// Text outside any syllable, passed through untouched
    Other,
}

/// A contiguous span of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Role of the span in the pipeline
    pub kind: SegmentKind,
    /// The span text, borrowed from the input
    pub text: &'a str,
}

/// Split text into syllable and passthrough spans.
///
/// A syllable begins at a consonant or independent vowel and greedily
/// extends with subscript clusters (a coeng run followed by another base)
/// and runs of dependent vowels, diacritics, and zero-width characters.
/// A coeng run with no base after it ends the syllable and falls into
/// the following passthrough span.
///
/// Segmentation is purely structural: a vowel run whose base consonant
/// is missing gets absorbed into the preceding syllable rather than
/// rejected.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut segments = Vec::new();
    let mut pos = 0;
    let mut other_start = 0;

    while pos < chars.len() {
        let (byte_start, ch) = chars[pos];
        if !classify(ch).is_base() {
            pos += 1;
            continue;
        }

        let end = syllable_end(&chars, pos);
        let byte_end = match chars.get(end) {
            Some(&(offset, _)) => offset,
            None => text.len(),
        };

        if other_start < byte_start {
            segments.push(Segment {
                kind: SegmentKind::Other,
                text: &text[other_start..byte_start],
            });
        }
        segments.push(Segment {
            kind: SegmentKind::Syllable,
            text: &text[byte_start..byte_end],
        });

        pos = end;
        other_start = byte_end;
    }

    if other_start < text.len() {
        segments.push(Segment {
            kind: SegmentKind::Other,
            text: &text[other_start..],
        });
    }

    segments
}

/// Index one past the last character of the syllable starting at `start`.
///
/// `chars[start]` must be a base character.
fn syllable_end(chars: &[(usize, char)], start: usize) -> usize {
    let mut pos = start + 1;
    loop {
        match chars.get(pos).map(|&(_, ch)| classify(ch)) {
            Some(CharClass::Coeng) => {
                // a coeng run only joins the syllable with its base
                let mut probe = pos;
                while matches!(
                    chars.get(probe).map(|&(_, ch)| classify(ch)),
                    Some(CharClass::Coeng)
                ) {
                    probe += 1;
                }
                match chars.get(probe) {
                    Some(&(_, ch)) if classify(ch).is_base() => pos = probe + 1,
                    _ => return pos,
                }
            }
            Some(class) if class.extends_syllable() => pos += 1,
            _ => return pos,
        }
    }
}
