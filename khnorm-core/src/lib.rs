//! Canonical reordering of Khmer orthographic syllables
//!
//! Khmer text that renders identically can be encoded with the vowels,
//! diacritics, and subscript consonants of a syllable in many different
//! orders. This crate rewrites every orthographic syllable into one
//! deterministic code point order so that equal-looking strings compare
//! equal, which makes exact-match search and indexing possible.
//!
//! The pipeline has three stages: legacy code points are regularized,
//! the text is segmented into syllable and passthrough spans, and each
//! syllable is rebuilt in canonical sign order. Text outside Khmer
//! syllables is never touched.
//!
//! # Example
//!
//! ```rust
//! use khnorm_core::Normalizer;
//!
//! let normalizer = Normalizer::new();
//!
//! // subscript ro typed before another subscript moves behind it
//! assert_eq!(normalizer.normalize("ស្រ្តី"), "ស្ត្រី");
//!
//! // non-Khmer text passes through untouched
//! assert_eq!(normalizer.normalize("hello"), "hello");
//! ```
//!
//! Canonicalization is lossy by design: zero-width characters inside a
//! syllable are dropped and repeated signs collapse, so the output is a
//! search key, not a rendering-faithful copy.

#![warn(missing_docs)]

pub mod chars;
pub mod config;
pub mod error;
pub mod input;
pub mod normalizer;
pub mod output;
pub mod regularize;
pub mod reorder;
pub mod segment;

pub use chars::{classify, CharClass};
pub use config::{Config, ExecutionMode};
pub use error::{Error, Result};
pub use input::Input;
pub use normalizer::Normalizer;
pub use output::{NormalizeStats, Output};
pub use regularize::regularize;
pub use reorder::reorder_syllable;
pub use segment::{segment, Segment, SegmentKind};
