//! Reconstructed output blocks.

use serde::{Deserialize, Serialize};

use super::{Line, LineTag};

/// A reconstructed unit of output: one or more source lines merged into a
/// single logical paragraph or structural marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Tag of the defining (first) line
    pub tag: LineTag,

    /// Source lines joined with single spaces, hyphenation resolved
    pub content: String,

    /// The lines this block was built from, in original order
    pub source_lines: Vec<Line>,
}

impl Block {
    /// Create a single-line block.
    pub fn from_line(tag: LineTag, line: Line) -> Self {
        Self {
            tag,
            content: line.text.trim().to_string(),
            source_lines: vec![line],
        }
    }

    /// Create a page-break block. Carries the sentinel line for
    /// traceability but renders no content.
    pub fn page_break(line: Line) -> Self {
        Self {
            tag: LineTag::PageBreak,
            content: String::new(),
            source_lines: vec![line],
        }
    }

    /// Check if the block has no renderable content.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_trims() {
        let block = Block::from_line(LineTag::Date, Line::new("  13.02.2020  ", 0, 2));
        assert_eq!(block.content, "13.02.2020");
        assert_eq!(block.source_lines.len(), 1);
    }

    #[test]
    fn test_page_break_block() {
        let block = Block::page_break(Line::page_break(0, 40));
        assert_eq!(block.tag, LineTag::PageBreak);
        assert!(block.is_empty());
        assert_eq!(block.source_lines.len(), 1);
    }
}
