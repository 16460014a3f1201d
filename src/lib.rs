//! # juristext
//!
//! Structure inference for legal judgment text.
//!
//! This library takes the ordered sequence of raw text lines produced by a
//! PDF text-extraction stage and reconstructs the document's logical
//! structure: it classifies each line (case number, parties, date,
//! numbering, signature block, ...), merges broken lines back into coherent
//! paragraphs while preserving numbering hierarchy, and extracts
//! document-level metadata from the header and footer.
//!
//! ## Quick Start
//!
//! ```
//! use juristext::{process_pages, Juristext};
//!
//! fn main() -> juristext::Result<()> {
//!     let pages = vec![vec![
//!         "OMP (I) Comm. No. 800/20".to_string(),
//!         "HDB FINANCIAL SERVICES LTD VS THE DEOBAND PUBLIC SCHOOL".to_string(),
//!         "13.02.2020".to_string(),
//!     ]];
//!
//!     let result = process_pages(&pages)?;
//!     println!("case number: {}", result.metadata.case_number);
//!     for block in &result.blocks {
//!         println!("{:?}: {}", block.tag, block.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Table-driven classification**: priority-ordered regex rules, first
//!   match wins, deterministic on ambiguous lines
//! - **Paragraph reconstruction**: hyphenation repair, continuation joins,
//!   numbering isolation
//! - **Metadata extraction**: case number, parties, date, judge, court,
//!   appearance line
//! - **Batch processing**: rayon-parallel over documents with a bounded
//!   worker pool
//!
//! The crate has no I/O of its own: PDF parsing, OCR, and HTML rendering
//! are the collaborators' concern.

pub mod classify;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod reconstruct;

// Re-export commonly used types
pub use classify::{ClassifyContext, LineClassifier};
pub use error::{Error, Result};
pub use extract::MetadataExtractor;
pub use model::{Block, DocumentMetadata, Line, LineTag, PAGE_BREAK_MARKER};
pub use normalize::NormalizeOptions;
pub use pipeline::{Pipeline, PipelineOptions, ProcessedDocument};
pub use reconstruct::{JoinMode, ParagraphReconstructor};

/// Process one document from its ordered line sequence with default options.
///
/// # Example
///
/// ```
/// use juristext::{process_lines, Line};
///
/// let lines = vec![Line::new("1. The suit is decreed.", 0, 0)];
/// let result = process_lines(lines).unwrap();
/// assert_eq!(result.blocks.len(), 1);
/// ```
pub fn process_lines(lines: Vec<Line>) -> Result<ProcessedDocument> {
    Pipeline::new().process(lines)
}

/// Process one document from per-page line text with default options.
///
/// Page-break sentinels are inserted at each page boundary.
pub fn process_pages(pages: &[Vec<String>]) -> Result<ProcessedDocument> {
    Pipeline::new().process_pages(pages)
}

/// Builder for configuring and running the pipeline.
///
/// # Example
///
/// ```
/// use juristext::{Juristext, Line};
///
/// let result = Juristext::new()
///     .conservative()
///     .keep_nbsp()
///     .with_threads(4)
///     .process(vec![Line::new("Ordered accordingly.", 0, 0)])?;
/// # Ok::<(), juristext::Error>(())
/// ```
pub struct Juristext {
    options: PipelineOptions,
    normalize: NormalizeOptions,
}

impl Juristext {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: PipelineOptions::default(),
            normalize: NormalizeOptions::default(),
        }
    }

    /// Use the conservative join mode.
    pub fn conservative(mut self) -> Self {
        self.options = self.options.conservative();
        self
    }

    /// Set an explicit join mode.
    pub fn with_join_mode(mut self, mode: JoinMode) -> Self {
        self.options = self.options.with_join_mode(mode);
        self
    }

    /// Keep original lines: one block per extracted line, no joining.
    pub fn keep_lines(mut self) -> Self {
        self.options = self.options.keep_lines();
        self
    }

    /// Keep soft-hyphen characters during normalization.
    pub fn keep_soft_hyphens(mut self) -> Self {
        self.normalize = self.normalize.keep_soft_hyphens();
        self
    }

    /// Preserve non-breaking spaces during normalization.
    pub fn keep_nbsp(mut self) -> Self {
        self.normalize = self.normalize.keep_nbsp();
        self
    }

    /// Apply Unicode NFC normalization to every line.
    pub fn with_nfc(mut self) -> Self {
        self.normalize = self.normalize.with_nfc();
        self
    }

    /// Set the per-document line cap (0 = unlimited).
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.options = self.options.with_max_lines(max_lines);
        self
    }

    /// Cap the batch worker pool size (0 = rayon default).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.options = self.options.with_threads(threads);
        self
    }

    /// Build the configured pipeline.
    pub fn build(self) -> Pipeline {
        let options = self.options.with_normalize(self.normalize);
        Pipeline::with_options(options)
    }

    /// Process one document from its ordered line sequence.
    pub fn process(self, lines: Vec<Line>) -> Result<ProcessedDocument> {
        self.build().process(lines)
    }

    /// Process one document from per-page line text.
    pub fn process_pages(self, pages: &[Vec<String>]) -> Result<ProcessedDocument> {
        self.build().process_pages(pages)
    }

    /// Process a batch of documents in parallel.
    pub fn process_batch(self, docs: Vec<Vec<Line>>) -> Result<Vec<Result<ProcessedDocument>>> {
        self.build().process_batch(docs)
    }
}

impl Default for Juristext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chained() {
        let builder = Juristext::new()
            .conservative()
            .keep_lines()
            .keep_nbsp()
            .with_max_lines(500)
            .with_threads(2);

        assert_eq!(builder.options.join_mode, JoinMode::Conservative);
        assert!(builder.options.keep_lines);
        assert!(builder.normalize.preserve_nbsp);
        assert_eq!(builder.options.max_lines, 500);
        assert_eq!(builder.options.threads, 2);
    }

    #[test]
    fn test_builder_default() {
        let builder = Juristext::default();
        assert_eq!(builder.options.join_mode, JoinMode::Aggressive);
        assert!(!builder.options.keep_lines);
    }

    #[test]
    fn test_process_lines_convenience() {
        let result = process_lines(vec![Line::new("Ordered accordingly.", 0, 0)]).unwrap();
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].tag, LineTag::Paragraph);
    }

    #[test]
    fn test_process_pages_convenience() {
        let pages = vec![vec!["13.02.2020".to_string()]];
        let result = process_pages(&pages).unwrap();
        assert_eq!(result.metadata.date, "13.02.2020");
    }
}
