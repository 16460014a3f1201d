//! Pipeline orchestration: classify → reconstruct → extract.
//!
//! The pipeline is pure and single-threaded per document; batches run
//! embarrassingly parallel over a rayon worker pool, one document per task,
//! with no coordination between tasks.

mod options;

pub use options::{PipelineOptions, DEFAULT_MAX_LINES};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::classify::{ClassifyContext, LineClassifier};
use crate::error::{Error, Result};
use crate::extract::MetadataExtractor;
use crate::model::{Block, DocumentMetadata, Line, LineTag};
use crate::reconstruct::ParagraphReconstructor;

/// Output of one document run: reconstructed blocks plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Reconstructed blocks in document order
    pub blocks: Vec<Block>,

    /// Document-level metadata (empty fields when not found)
    pub metadata: DocumentMetadata,
}

impl ProcessedDocument {
    /// Plain-text rendering of the block contents, one block per line,
    /// with a blank line at each page break.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The full structure-inference pipeline for judgment text.
pub struct Pipeline {
    classifier: LineClassifier,
    reconstructor: ParagraphReconstructor,
    extractor: MetadataExtractor,
    options: PipelineOptions,
}

impl Pipeline {
    /// Create a pipeline with default options.
    pub fn new() -> Self {
        Self::with_options(PipelineOptions::default())
    }

    /// Create a pipeline from explicit options.
    pub fn with_options(options: PipelineOptions) -> Self {
        Self {
            classifier: LineClassifier::new(),
            reconstructor: ParagraphReconstructor::with_join_mode(options.join_mode),
            extractor: MetadataExtractor::new(),
            options,
        }
    }

    /// Process one document given its ordered line sequence.
    ///
    /// Errors only on input-contract violations (line cap, ordering). An
    /// empty input produces an empty block sequence and default metadata.
    pub fn process(&self, lines: Vec<Line>) -> Result<ProcessedDocument> {
        if self.options.max_lines > 0 && lines.len() > self.options.max_lines {
            return Err(Error::TooManyLines(lines.len(), self.options.max_lines));
        }
        self.check_ordering(&lines)?;

        // Normalized lines are the canonical sequence from here on; blocks
        // trace back to these, not to the pre-normalization text.
        let lines: Vec<Line> = lines
            .into_iter()
            .map(|mut line| {
                line.text = self.options.normalize.apply(&line.text);
                line
            })
            .collect();

        let total = lines.len();
        let tagged: Vec<(Line, LineTag)> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let ctx = ClassifyContext::near_end(total - 1 - i);
                let tag = self.classifier.classify(&line.text, &ctx);
                (line.clone(), tag)
            })
            .collect();

        let blocks: Vec<Block> = if self.options.keep_lines {
            self.reconstructor.passthrough(tagged)
        } else {
            self.reconstructor.reconstruct(tagged)
        };

        let metadata = self.extractor.extract(&lines);

        log::debug!(
            "processed document: {} lines -> {} blocks",
            total,
            blocks.len()
        );

        Ok(ProcessedDocument { blocks, metadata })
    }

    /// Process a document delivered as per-page line text, inserting the
    /// page-break sentinel at each page boundary.
    pub fn process_pages(&self, pages: &[Vec<String>]) -> Result<ProcessedDocument> {
        let mut lines = Vec::new();
        for (page_index, page) in pages.iter().enumerate() {
            for (position, text) in page.iter().enumerate() {
                lines.push(Line::new(text.clone(), page_index, position));
            }
            if page_index + 1 < pages.len() {
                lines.push(Line::page_break(page_index, page.len()));
            }
        }
        self.process(lines)
    }

    /// Process a batch of documents in parallel.
    ///
    /// Results are returned in input order; each document fails or succeeds
    /// independently. The worker pool is bounded by
    /// [`PipelineOptions::threads`] when non-zero.
    pub fn process_batch(&self, docs: Vec<Vec<Line>>) -> Result<Vec<Result<ProcessedDocument>>> {
        if self.options.threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.options.threads)
                .build()
                .map_err(|e| Error::ThreadPool(e.to_string()))?;
            Ok(pool.install(|| {
                docs.into_par_iter()
                    .map(|doc| self.process(doc))
                    .collect()
            }))
        } else {
            Ok(docs
                .into_par_iter()
                .map(|doc| self.process(doc))
                .collect())
        }
    }

    /// Lines must arrive in extraction order: page indices non-decreasing,
    /// intra-page positions strictly increasing.
    fn check_ordering(&self, lines: &[Line]) -> Result<()> {
        for (index, pair) in lines.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            let in_order = next.page_index > prev.page_index
                || (next.page_index == prev.page_index
                    && next.position_in_page > prev.position_in_page);
            if !in_order {
                return Err(Error::OutOfOrder {
                    index: index + 1,
                    page: next.page_index,
                    position: next.position_in_page,
                });
            }
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
