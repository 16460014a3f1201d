//! Line-level types: the raw extraction unit and its semantic tag.

use serde::{Deserialize, Serialize};

/// Sentinel text for a page boundary.
///
/// The extraction collaborator inserts a line containing this marker between
/// pages. Form feed is ASCII whitespace, so the classifier tests for the
/// sentinel before the whitespace-only check.
pub const PAGE_BREAK_MARKER: &str = "\u{000C}";

/// One unit of extracted text, positionally ordered by the extraction stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Raw text content; may carry leading/trailing whitespace
    pub text: String,

    /// 0-based page index
    pub page_index: usize,

    /// Order of appearance within the page (top-to-bottom, left-to-right)
    pub position_in_page: usize,
}

impl Line {
    /// Create a new line.
    pub fn new(text: impl Into<String>, page_index: usize, position_in_page: usize) -> Self {
        Self {
            text: text.into(),
            page_index,
            position_in_page,
        }
    }

    /// Create a page-break sentinel line at the given page boundary.
    pub fn page_break(page_index: usize, position_in_page: usize) -> Self {
        Self::new(PAGE_BREAK_MARKER, page_index, position_in_page)
    }

    /// Check if this line is the page-break sentinel. A form feed embedded
    /// in prose does not count; the line must carry nothing else.
    pub fn is_page_break(&self) -> bool {
        self.text.contains(PAGE_BREAK_MARKER) && self.text.trim().is_empty()
    }

    /// Check if this line is empty or whitespace-only (sentinel excluded).
    pub fn is_blank(&self) -> bool {
        !self.is_page_break() && self.text.trim().is_empty()
    }
}

/// Semantic tag assigned to every line.
///
/// Classification is a total function: every line maps to exactly one tag,
/// with [`LineTag::Paragraph`] as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineTag {
    /// Case-number header (e.g. `OMP (I) Comm. No. 800/20`)
    CaseNumber,
    /// Party names joined by a versus separator
    Parties,
    /// A date standing on its own line
    Date,
    /// `Present:` / `Coram:` / `Before:` / `Heard:` appearance line
    Present,
    /// Page-number marker (e.g. `:4:` or `[12]`)
    PageMarker,
    /// Signature block line (judge name or title near the end)
    JudgeSignature,
    /// Court or location details, typically in the footer
    CourtDetails,
    /// Roman numeral numbering at line start (`I.`, `IV)`)
    RomanNumbering,
    /// Arabic numbering with a dot (`7.`)
    NumberedDots,
    /// Arabic numbering in parentheses (`(3)`)
    NumberedParentheses,
    /// Single lowercase letter in parentheses (`(a)`)
    LetteredPoints,
    /// Lowercase roman numeral in parentheses (`(i)`, `(iv)`)
    SubPointsRoman,
    /// Free-flowing prose (the default)
    Paragraph,
    /// Empty or whitespace-only line
    Empty,
    /// Page-break sentinel
    PageBreak,
}

impl LineTag {
    /// Structural tags never span multiple lines and never accumulate.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            LineTag::CaseNumber
                | LineTag::Parties
                | LineTag::Date
                | LineTag::Present
                | LineTag::PageMarker
                | LineTag::JudgeSignature
                | LineTag::CourtDetails
        )
    }

    /// Numbering tags open a new block that may absorb continuation lines.
    pub fn is_numbering(&self) -> bool {
        matches!(
            self,
            LineTag::RomanNumbering
                | LineTag::NumberedDots
                | LineTag::NumberedParentheses
                | LineTag::LetteredPoints
                | LineTag::SubPointsRoman
        )
    }
}
