//! Pipeline configuration.

use crate::normalize::NormalizeOptions;
use crate::reconstruct::JoinMode;

/// Default cap on input lines per document.
pub const DEFAULT_MAX_LINES: usize = 200_000;

/// Options for the classify → reconstruct → extract pipeline.
///
/// A single immutable configuration passed to the pipeline entry point;
/// there is no ambient global state.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// How eagerly continuation lines are merged
    pub join_mode: JoinMode,

    /// Skip paragraph reconstruction: every non-empty line becomes its own
    /// block (useful for debugging extraction output)
    pub keep_lines: bool,

    /// Line normalization applied before classification
    pub normalize: NormalizeOptions,

    /// Maximum input lines per document (0 = unlimited)
    pub max_lines: usize,

    /// Worker threads for batch processing (0 = rayon default)
    pub threads: usize,
}

impl PipelineOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the join mode.
    pub fn with_join_mode(mut self, mode: JoinMode) -> Self {
        self.join_mode = mode;
        self
    }

    /// Use the conservative join mode.
    pub fn conservative(mut self) -> Self {
        self.join_mode = JoinMode::Conservative;
        self
    }

    /// Keep original lines, one block per line.
    pub fn keep_lines(mut self) -> Self {
        self.keep_lines = true;
        self
    }

    /// Set normalization options.
    pub fn with_normalize(mut self, normalize: NormalizeOptions) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the per-document line cap (0 = unlimited).
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Cap the batch worker pool size (0 = rayon default).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            join_mode: JoinMode::Aggressive,
            keep_lines: false,
            normalize: NormalizeOptions::default(),
            max_lines: DEFAULT_MAX_LINES,
            threads: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = PipelineOptions::new()
            .conservative()
            .keep_lines()
            .with_max_lines(1000)
            .with_threads(4);

        assert_eq!(options.join_mode, JoinMode::Conservative);
        assert!(options.keep_lines);
        assert_eq!(options.max_lines, 1000);
        assert_eq!(options.threads, 4);
    }

    #[test]
    fn test_default_options() {
        let options = PipelineOptions::default();
        assert_eq!(options.join_mode, JoinMode::Aggressive);
        assert!(!options.keep_lines);
        assert_eq!(options.max_lines, DEFAULT_MAX_LINES);
        assert_eq!(options.threads, 0);
    }
}
