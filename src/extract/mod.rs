//! Document-level metadata extraction.
//!
//! Scans bounded windows of the line sequence (header fields from the top,
//! footer fields from the bottom) with the same patterns the classifier
//! uses, and takes the first match in document order. Absence of a field is
//! normal; every field defaults to the empty string.

use regex::Regex;

use crate::classify::{self, CASE_NUMBER, COURT_KEYWORDS, DATE, DATE_LINE_MAX, JUDGE_TITLE};
use crate::model::{DocumentMetadata, Line};

/// Header window for the case number, counted in non-empty lines.
const CASE_NUMBER_WINDOW: usize = 20;
/// Header window for parties and date.
const HEADER_WINDOW: usize = 30;
/// Footer window for the judge signature.
const JUDGE_WINDOW: usize = 20;
/// Footer window for court details.
const COURT_WINDOW: usize = 10;

/// Extracts document metadata with a first-match-in-document-order policy.
pub struct MetadataExtractor {
    case_number: Regex,
    parties: Regex,
    date: Regex,
    present: Regex,
    title: Regex,
    court: Regex,
}

impl MetadataExtractor {
    /// Create an extractor with all patterns compiled.
    pub fn new() -> Self {
        Self {
            case_number: Regex::new(CASE_NUMBER).unwrap(),
            parties: Regex::new(
                r"(?i)^(.{2,140}?)\s(?:vs\.?|v/s\.?|versus|v\.)\s+(.{2,160})$",
            )
            .unwrap(),
            date: Regex::new(DATE).unwrap(),
            present: Regex::new(r"(?i)^present\b").unwrap(),
            title: Regex::new(JUDGE_TITLE).unwrap(),
            court: Regex::new(COURT_KEYWORDS).unwrap(),
        }
    }

    /// Extract metadata from the full line sequence.
    ///
    /// Deterministic for a fixed input; never fails.
    pub fn extract(&self, lines: &[Line]) -> DocumentMetadata {
        let mut meta = DocumentMetadata::default();

        self.extract_case_number(lines, &mut meta);
        self.extract_parties(lines, &mut meta);
        self.extract_date(lines, &mut meta);
        self.extract_present(lines, &mut meta);
        self.extract_judge(lines, &mut meta);
        self.extract_court(lines, &mut meta);

        log::debug!(
            "metadata: case_number={:?} date={:?} judge={:?}",
            meta.case_number,
            meta.date,
            meta.judge_name
        );
        meta
    }

    fn extract_case_number(&self, lines: &[Line], meta: &mut DocumentMetadata) {
        for line in lines
            .iter()
            .filter(|l| !l.text.trim().is_empty())
            .take(CASE_NUMBER_WINDOW)
        {
            if let Some(m) = self.case_number.find(line.text.trim()) {
                meta.case_number = m.as_str().trim().to_string();
                return;
            }
        }
    }

    fn extract_parties(&self, lines: &[Line], meta: &mut DocumentMetadata) {
        for line in lines.iter().take(HEADER_WINDOW) {
            let trimmed = line.text.trim();
            // Short fragments are usually stray header debris
            if trimmed.chars().count() <= 10 {
                continue;
            }
            if let Some(caps) = self.parties.captures(trimmed) {
                meta.petitioner = caps[1].trim().to_string();
                meta.respondent = caps[2].trim().to_string();
                return;
            }
        }
    }

    fn extract_date(&self, lines: &[Line], meta: &mut DocumentMetadata) {
        for line in lines.iter().take(HEADER_WINDOW) {
            let trimmed = line.text.trim();
            // A date buried in a long sentence is not the document date
            if trimmed.chars().count() > DATE_LINE_MAX {
                continue;
            }
            if let Some(m) = self.date.find(trimmed) {
                meta.date = m.as_str().to_string();
                return;
            }
        }
    }

    fn extract_present(&self, lines: &[Line], meta: &mut DocumentMetadata) {
        for line in lines {
            let trimmed = line.text.trim();
            if self.present.is_match(trimmed) {
                meta.present_counsel = trimmed.to_string();
                return;
            }
        }
    }

    /// Find the first title line in the footer window. A bare title line
    /// (nothing but the title itself) names the judge on the line above it.
    fn extract_judge(&self, lines: &[Line], meta: &mut DocumentMetadata) {
        let start = lines.len().saturating_sub(JUDGE_WINDOW);
        let window = &lines[start..];

        for (i, line) in window.iter().enumerate() {
            let trimmed = line.text.trim();
            let Some(m) = self.title.find(trimmed) else {
                continue;
            };

            let bare_title = trimmed[..m.start()]
                .chars()
                .chain(trimmed[m.end()..].chars())
                .all(|c| !c.is_alphanumeric());

            if bare_title {
                if let Some(name) = window[..i]
                    .iter()
                    .rev()
                    .map(|l| l.text.trim())
                    .find(|t| !t.is_empty())
                {
                    if self.looks_like_name(name) {
                        meta.judge_name = name.to_string();
                        return;
                    }
                }
            }
            meta.judge_name = trimmed.to_string();
            return;
        }
    }

    fn looks_like_name(&self, text: &str) -> bool {
        text.chars().count() < 50
            && text.split_whitespace().count() <= 5
            && !self.title.is_match(text)
            && classify::is_mostly_uppercase(text.trim_start_matches(['(', '[']))
    }

    fn extract_court(&self, lines: &[Line], meta: &mut DocumentMetadata) {
        let start = lines.len().saturating_sub(COURT_WINDOW);
        for line in &lines[start..] {
            let trimmed = line.text.trim();
            // Judicial titles carry "District" etc. but name the judge,
            // not the court
            if self.title.is_match(trimmed) {
                continue;
            }
            if trimmed.chars().count() < 60
                && trimmed.split_whitespace().count() <= 8
                && self.court.is_match(trimmed)
            {
                meta.court_name = trimmed.to_string();
                return;
            }
        }
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<Line> {
        lines
            .iter()
            .enumerate()
            .map(|(i, text)| Line::new(*text, 0, i))
            .collect()
    }

    #[test]
    fn test_header_fields() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&[
            "OMP (I) Comm. No. 800/20",
            "HDB FINANCIAL SERVICES LTD VS THE DEOBAND PUBLIC SCHOOL",
            "13.02.2020",
            "Present : Sh. Ashok Kumar Ld. Counsel for petitioner.",
        ]));

        assert_eq!(meta.case_number, "OMP (I) Comm. No. 800/20");
        assert_eq!(meta.petitioner, "HDB FINANCIAL SERVICES LTD");
        assert_eq!(meta.respondent, "THE DEOBAND PUBLIC SCHOOL");
        assert_eq!(meta.date, "13.02.2020");
        assert_eq!(
            meta.present_counsel,
            "Present : Sh. Ashok Kumar Ld. Counsel for petitioner."
        );
    }

    #[test]
    fn test_judge_name_prefers_line_above_bare_title() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&[
            "The application stands disposed of.",
            "VINAY KUMAR KHANNA",
            "District Judge",
        ]));
        assert_eq!(meta.judge_name, "VINAY KUMAR KHANNA");
    }

    #[test]
    fn test_judge_name_falls_back_to_title_line() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&[
            "The application stands disposed of.",
            "(Rakesh Verma) Additional District Judge",
        ]));
        assert_eq!(meta.judge_name, "(Rakesh Verma) Additional District Judge");
    }

    #[test]
    fn test_court_name_from_footer() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&[
            "Ordered accordingly.",
            "VINAY KUMAR KHANNA",
            "District Judge",
            "Saket Courts, New Delhi",
        ]));
        assert_eq!(meta.court_name, "Saket Courts, New Delhi");
    }

    #[test]
    fn test_date_ignored_in_long_sentence() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&[
            "The loan agreement dated 05.06.2018 was executed between the parties hereto",
        ]));
        assert_eq!(meta.date, "");
    }

    #[test]
    fn test_mid_length_date_line_extracted() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&["Order reserved on 13.02.2020 in open court"]));
        assert_eq!(meta.date, "13.02.2020");
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&["11.01.2020", "12.02.2021"]));
        assert_eq!(meta.date, "11.01.2020");
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&[]);
        assert!(meta.is_empty());
    }

    #[test]
    fn test_short_fragment_not_parties() {
        let extractor = MetadataExtractor::new();
        let meta = extractor.extract(&doc(&["A vs B"]));
        assert_eq!(meta.petitioner, "");
        assert_eq!(meta.respondent, "");
    }
}
