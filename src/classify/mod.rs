//! Line classification.
//!
//! Assigns every line exactly one [`LineTag`] by scanning an ordered rule
//! table, first match wins. Classification never fails: unmatched input is
//! a plain paragraph line.

mod rules;

pub(crate) use rules::{CASE_NUMBER, COURT_KEYWORDS, DATE, DATE_LINE_MAX, JUDGE_TITLE};

use regex::Regex;

use crate::model::{LineTag, PAGE_BREAK_MARKER};
use rules::{rule_table, Guard, Rule};

/// Optional neighborhood information for context-sensitive rules.
///
/// Only the signature and court-details heuristics consult context; all
/// other rules are line-local.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifyContext {
    /// Distance from the last line of the document (0 = last line).
    /// `None` when the document extent is unknown.
    pub distance_from_end: Option<usize>,
}

impl ClassifyContext {
    /// Context for a line at a known distance from the document end.
    pub fn near_end(distance: usize) -> Self {
        Self {
            distance_from_end: Some(distance),
        }
    }
}

/// Classifies lines against the priority-ordered rule table.
pub struct LineClassifier {
    rules: Vec<Rule>,
    title_pattern: Regex,
}

impl LineClassifier {
    /// Create a classifier with all rule patterns compiled.
    pub fn new() -> Self {
        Self {
            rules: rule_table(),
            title_pattern: Regex::new(JUDGE_TITLE).unwrap(),
        }
    }

    /// Classify a single line with neighborhood context.
    ///
    /// Total function: always returns a tag, never fails.
    pub fn classify(&self, text: &str, ctx: &ClassifyContext) -> LineTag {
        // The sentinel is ASCII whitespace, so it must be recognized before
        // the whitespace-only test. A form feed embedded in prose is just
        // text, not a page break.
        if text.contains(PAGE_BREAK_MARKER) && text.trim().is_empty() {
            return LineTag::PageBreak;
        }

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return LineTag::Empty;
        }

        for rule in &self.rules {
            if rule.pattern.is_match(trimmed) && self.guard_passes(rule.guard, trimmed, ctx) {
                log::trace!("rule {:?} matched: {:?}", rule.tag, trimmed);
                return rule.tag;
            }
        }

        LineTag::Paragraph
    }

    /// Classify a line without context (document extent unknown).
    pub fn classify_line(&self, text: &str) -> LineTag {
        self.classify(text, &ClassifyContext::default())
    }

    fn guard_passes(&self, guard: Option<Guard>, trimmed: &str, ctx: &ClassifyContext) -> bool {
        match guard {
            None => true,
            Some(Guard::MaxWords(limit)) => trimmed.split_whitespace().count() < limit,
            Some(Guard::MaxLen(limit)) => trimmed.chars().count() <= limit,
            Some(Guard::Signature) => self.is_signature(trimmed, ctx),
            Some(Guard::CourtFooter) => {
                trimmed.chars().count() < 60
                    && trimmed.split_whitespace().count() <= 8
                    && ctx.distance_from_end.map_or(true, |d| d <= 10)
            }
        }
    }

    /// Signature heuristic: a short line of at most four words that either
    /// carries a judicial title, or is mostly uppercase and sits within the
    /// last ~20 lines of the document.
    fn is_signature(&self, trimmed: &str, ctx: &ClassifyContext) -> bool {
        if trimmed.chars().count() >= 50 || trimmed.split_whitespace().count() > 4 {
            return false;
        }
        if self.title_pattern.is_match(trimmed) {
            return true;
        }
        is_mostly_uppercase(trimmed) && ctx.distance_from_end.is_some_and(|d| d <= 20)
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// At least 80% of the alphabetic characters are uppercase.
pub(crate) fn is_mostly_uppercase(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return false;
    }
    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    upper * 5 >= letters.len() * 4
}
