//! Paragraph reconstruction.
//!
//! Consumes the ordered sequence of tagged lines in a single left-to-right
//! pass and merges continuation lines into logical paragraphs and numbered
//! items. Structural lines become single-line blocks; empty lines are pure
//! separators and are never materialized.

use serde::{Deserialize, Serialize};

use crate::model::{Block, Line, LineTag};

/// How eagerly continuation lines are merged into the open paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinMode {
    /// Join on lowercase/digit/bracket openers and on missing sentence
    /// terminators. Suits legal text with many short line breaks.
    #[default]
    Aggressive,
    /// Join only when the next line starts lowercase and the previous line
    /// lacks a sentence terminator.
    Conservative,
}

/// Outcome of the join test for one candidate line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JoinKind {
    /// Start a new block
    Break,
    /// Merge with a single space
    Space,
    /// Word split across the line break: strip the hyphen, no space
    Hyphen,
}

/// Rebuilds blocks from tagged lines.
#[derive(Debug, Clone, Default)]
pub struct ParagraphReconstructor {
    join_mode: JoinMode,
}

/// An open block being accumulated.
struct OpenBlock {
    tag: LineTag,
    content: String,
    source_lines: Vec<Line>,
    last_line: String,
}

impl OpenBlock {
    fn new(tag: LineTag, line: Line) -> Self {
        let text = line.text.trim().to_string();
        Self {
            tag,
            content: text.clone(),
            source_lines: vec![line],
            last_line: text,
        }
    }

    fn append(&mut self, line: Line, kind: JoinKind) {
        let next = line.text.trim();
        match kind {
            JoinKind::Hyphen => {
                let trimmed_len = self
                    .content
                    .trim_end_matches(['-', '\u{00AD}'])
                    .trim_end()
                    .len();
                self.content.truncate(trimmed_len);
                self.content.push_str(next);
            }
            JoinKind::Space => {
                self.content.push(' ');
                self.content.push_str(next);
            }
            JoinKind::Break => unreachable!("append called for a break decision"),
        }
        self.last_line = next.to_string();
        self.source_lines.push(line);
    }

    fn close(self) -> Block {
        Block {
            tag: self.tag,
            content: self.content,
            source_lines: self.source_lines,
        }
    }
}

impl ParagraphReconstructor {
    /// Create a reconstructor with the default aggressive join mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reconstructor with an explicit join mode.
    pub fn with_join_mode(join_mode: JoinMode) -> Self {
        Self { join_mode }
    }

    /// Reconstruct blocks from the ordered tagged line sequence.
    ///
    /// Every non-empty line lands in exactly one block, in order; empty
    /// lines only terminate the open block.
    pub fn reconstruct(&self, tagged: Vec<(Line, LineTag)>) -> Vec<Block> {
        let mut blocks: Vec<Block> = Vec::new();
        let mut current: Option<OpenBlock> = None;

        for (line, tag) in tagged {
            match tag {
                LineTag::Empty => {
                    flush(&mut current, &mut blocks);
                }
                LineTag::PageBreak => {
                    flush(&mut current, &mut blocks);
                    blocks.push(Block::page_break(line));
                }
                tag if tag.is_structural() => {
                    flush(&mut current, &mut blocks);
                    blocks.push(Block::from_line(tag, line));
                }
                tag if tag.is_numbering() => {
                    flush(&mut current, &mut blocks);
                    current = Some(OpenBlock::new(tag, line));
                }
                _ => {
                    let kind = match current.as_ref() {
                        Some(open) => self.join_kind(&open.last_line, line.text.trim()),
                        None => JoinKind::Break,
                    };
                    match kind {
                        JoinKind::Break => {
                            flush(&mut current, &mut blocks);
                            current = Some(OpenBlock::new(LineTag::Paragraph, line));
                        }
                        kind => {
                            if let Some(open) = current.as_mut() {
                                open.append(line, kind);
                            }
                        }
                    }
                }
            }
        }

        flush(&mut current, &mut blocks);

        log::debug!("reconstructed {} blocks", blocks.len());
        blocks
    }

    /// Pass every non-empty line through as its own single-line block,
    /// skipping the join logic entirely (keep-lines mode).
    pub fn passthrough(&self, tagged: Vec<(Line, LineTag)>) -> Vec<Block> {
        tagged
            .into_iter()
            .filter_map(|(line, tag)| match tag {
                LineTag::Empty => None,
                LineTag::PageBreak => Some(Block::page_break(line)),
                tag => Some(Block::from_line(tag, line)),
            })
            .collect()
    }

    /// Decide whether `next` continues the paragraph ending in `prev`.
    fn join_kind(&self, prev: &str, next: &str) -> JoinKind {
        if prev.is_empty() || next.is_empty() {
            return JoinKind::Break;
        }

        // Word split across the line break
        if prev.ends_with('-') || prev.ends_with('\u{00AD}') {
            return JoinKind::Hyphen;
        }

        // Sentence continues after a colon or dash
        if prev.ends_with(':') || prev.ends_with('\u{2014}') {
            return JoinKind::Space;
        }

        let first = next.chars().next().unwrap_or(' ');
        let terminated = prev.ends_with(['.', '!', '?']);

        match self.join_mode {
            JoinMode::Aggressive => {
                if first.is_ascii_lowercase()
                    || first.is_ascii_digit()
                    || first == '('
                    || first == '['
                {
                    return JoinKind::Space;
                }
                if !terminated && matches!(first, '"' | '\'' | '\u{201C}') {
                    return JoinKind::Space;
                }
                // Mid-sentence break: the previous line trails off on a
                // lowercase word ("u/s 9 of Indian Arbitration and"), so
                // the next line continues it even when it starts uppercase
                if !terminated
                    && prev
                        .chars()
                        .last()
                        .is_some_and(|c| c.is_ascii_lowercase())
                {
                    return JoinKind::Space;
                }
            }
            JoinMode::Conservative => {
                if first.is_ascii_lowercase() && !terminated {
                    return JoinKind::Space;
                }
            }
        }

        JoinKind::Break
    }
}

fn flush(current: &mut Option<OpenBlock>, blocks: &mut Vec<Block>) {
    if let Some(open) = current.take() {
        blocks.push(open.close());
    }
}
