//! Data model for judgment structure inference.
//!
//! This module defines the intermediate representation that bridges the
//! extraction collaborator (ordered raw lines) and the rendering collaborator
//! (reconstructed blocks plus document metadata). Lines are produced once per
//! extraction pass and are immutable; blocks and metadata are derived,
//! recomputed in full on every run.

mod block;
mod line;
mod metadata;

pub use block::Block;
pub use line::{Line, LineTag, PAGE_BREAK_MARKER};
pub use metadata::DocumentMetadata;
