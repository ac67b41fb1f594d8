//! Configuration for the normalization pipeline

/// Default configuration constants
pub mod defaults {
    /// Parallel processing threshold in bytes (64KB)
    pub const PARALLEL_THRESHOLD: usize = 64 * 1024;
}

/// Execution mode for the reordering stage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionMode {
    /// Single-threaded processing
    Sequential,
    /// Multi-threaded processing
    Parallel,
    /// Choose by input size
    #[default]
    Adaptive,
}

/// Normalizer configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) mode: ExecutionMode,
    pub(crate) parallel_threshold: usize, // in bytes
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ExecutionMode::default(),
            parallel_threshold: defaults::PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the input size, in bytes, at which adaptive execution switches
    /// to parallel processing
    pub fn with_parallel_threshold(mut self, bytes: usize) -> Self {
        self.parallel_threshold = bytes;
        self
    }

    /// The configured execution mode
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// The adaptive parallelism threshold in bytes
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}
