//! The normalization pipeline
//!
//! Regularizes legacy code points, segments the text into syllable and
//! passthrough spans, reorders every syllable, and splices the spans back
//! together. Spans are independent, so the reordering stage can run
//! across threads.

use crate::config::{Config, ExecutionMode};
use crate::error::Result;
use crate::input::Input;
use crate::output::{NormalizeStats, Output};
use crate::regularize::regularize;
use crate::reorder::reorder_syllable;
use crate::segment::{segment, Segment, SegmentKind};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Khmer text canonicalizer
///
/// Rewrites every orthographic syllable into a single canonical code
/// point order so that equal-looking strings compare equal.
///
/// ```
/// use khnorm_core::Normalizer;
///
/// let normalizer = Normalizer::new();
/// // a vowel typed before its subscript consonant moves behind it
/// assert_eq!(normalizer.normalize("កេ\u{17D2}ម"), "ក\u{17D2}មេ");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: Config,
}

impl Normalizer {
    /// Create a normalizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Canonicalize a string.
    ///
    /// Deterministic and total: two runs give the same output, and the
    /// output canonicalizes to itself.
    pub fn normalize(&self, text: &str) -> String {
        let regular = regularize(text);
        let segments = segment(&regular);
        reorder_spans(&segments, self.resolve_mode(regular.len())).concat()
    }

    /// Canonicalize an [`Input`] and report statistics.
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.into_text()?;
        let chars_in = text.chars().count();

        let regular = regularize(&text);
        let segments = segment(&regular);
        let syllables = segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Syllable)
            .count();
        let mode = self.resolve_mode(regular.len());
        let canonical = reorder_spans(&segments, mode).concat();

        let stats = NormalizeStats {
            chars_in,
            chars_out: canonical.chars().count(),
            syllables,
            passthrough_spans: segments.len() - syllables,
            mode_used: mode,
            duration: start.elapsed(),
        };
        Ok(Output {
            text: canonical,
            stats,
        })
    }

    /// Resolve the configured mode for an input of `input_len` bytes.
    fn resolve_mode(&self, input_len: usize) -> ExecutionMode {
        match self.config.mode {
            ExecutionMode::Adaptive => auto_select(input_len, self.config.parallel_threshold),
            #[cfg(not(feature = "parallel"))]
            ExecutionMode::Parallel => ExecutionMode::Sequential,
            mode => mode,
        }
    }
}

/// Automatically select an execution mode based on input size
fn auto_select(input_len: usize, threshold: usize) -> ExecutionMode {
    if input_len < threshold {
        ExecutionMode::Sequential
    } else {
        #[cfg(feature = "parallel")]
        return ExecutionMode::Parallel;

        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Sequential
    }
}

fn reorder_spans(segments: &[Segment<'_>], mode: ExecutionMode) -> Vec<String> {
    match mode {
        ExecutionMode::Parallel => reorder_parallel(segments),
        _ => reorder_sequential(segments),
    }
}

fn render_span(span: &Segment<'_>) -> String {
    match span.kind {
        SegmentKind::Syllable => reorder_syllable(span.text),
        SegmentKind::Other => span.text.to_string(),
    }
}

fn reorder_sequential(segments: &[Segment<'_>]) -> Vec<String> {
    segments.iter().map(render_span).collect()
}

/// Reorder spans across threads. The indexed collect keeps span order.
#[cfg(feature = "parallel")]
fn reorder_parallel(segments: &[Segment<'_>]) -> Vec<String> {
    segments.par_iter().map(render_span).collect()
}

#[cfg(not(feature = "parallel"))]
fn reorder_parallel(segments: &[Segment<'_>]) -> Vec<String> {
    reorder_sequential(segments)
}
