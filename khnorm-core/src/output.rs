//! Output types for normalization

use crate::config::ExecutionMode;
use std::time::Duration;

/// Canonicalized text with processing statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The canonicalized text
    pub text: String,
    /// Statistics collected while processing
    pub stats: NormalizeStats,
}

/// Statistics for one processed input
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizeStats {
    /// Characters in the input text
    pub chars_in: usize,
    /// Characters in the canonical text
    pub chars_out: usize,
    /// Syllable spans that went through reordering
    pub syllables: usize,
    /// Spans passed through untouched
    pub passthrough_spans: usize,
    /// Execution mode that was actually used
    pub mode_used: ExecutionMode,
    /// Wall-clock processing time
    pub duration: Duration,
}
