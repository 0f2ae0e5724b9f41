//! Evaluator configuration.

/// Sequences up to this length are processed on the calling thread.
pub const DEFAULT_CHUNK_SIZE: usize = 10_000;

/// Tuning knobs for the parallel engine.
///
/// Results never depend on these values for associative reducers; only
/// scheduling does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    chunk_size: usize,
    threads: Option<usize>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            chunk_size: DEFAULT_CHUNK_SIZE,
            threads: None,
        }
    }
}

impl EvalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements per parallel chunk. Clamped to at least 1.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Run parallel work on a dedicated pool of `threads` workers instead
    /// of the global rayon pool. Clamped to at least 1.
    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads.max(1));
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn threads(&self) -> Option<usize> {
        self.threads
    }
}
