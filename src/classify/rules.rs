//! The ordered classification rule table.
//!
//! Each rule is a data entry (pattern + tag + optional guard) and the
//! classifier is a linear first-match-wins scan over this table. The order
//! below is the fixed priority order; reordering entries changes semantics.

use regex::Regex;

use crate::model::LineTag;

/// Case-number header: a jurisdiction prefix, an optional parenthesized
/// qualifier, up to a few abbreviation words, then a `No.` or `/` separator
/// and digits with an optional year.
pub(crate) const CASE_NUMBER: &str = r"(?i)^(?:OMP|CRL|CRP|CS|CC|CA|SA|FAO|MAC|RFA|WP|SLP|ARB|EX|MC)\b\.?\s*(?:\([^)]{1,12}\)\s*)?(?:[A-Za-z]+\.?\s+){0,3}(?:No\.?\s*|/\s*)\d+(?:\s*/\s*\d{2,4})?";

/// Versus separator between party names.
pub(crate) const PARTIES: &str = r"(?i)\s(?:vs\.?|v/s\.?|versus|v\.)\s";

/// Numeric or written-month dates.
pub(crate) const DATE: &str = r"(?i)\b\d{1,2}[./-]\d{1,2}[./-]\d{2,4}\b|\b\d{1,2}(?:st|nd|rd|th)?\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)[,.\s]\s*\d{4}\b|\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}\s*,?\s*\d{4}\b";

/// Dates buried in lines longer than this are prose, not a date line. The
/// classifier guard and the metadata extractor share this cap.
pub(crate) const DATE_LINE_MAX: usize = 50;

/// Appearance line openers.
pub(crate) const PRESENT: &str = r"(?i)^(?:present|coram|before|heard)\s*:";

/// Page-number marker alone on a line: `:4:`, `[12]`, `-7-`, `Page 3 of 9`.
pub(crate) const PAGE_MARKER: &str =
    r"(?i)^(?::\s*\d{1,4}\s*:|\[\s*\d{1,4}\s*\]|-\s*\d{1,4}\s*-|page\s+\d{1,4}(?:\s+of\s+\d{1,4})?)$";

/// Roman numeral with dot or closing paren at line start.
pub(crate) const ROMAN_NUMBERING: &str = r"(?i)^[ivxlcdm]+[.)](?:\s|$)";

/// Lowercase roman numeral in parentheses. Restricted to `[ivx]` so `(c)`,
/// `(d)`, `(l)`, `(m)` fall through to lettered points.
pub(crate) const SUB_POINTS_ROMAN: &str = r"^\([ivx]+\)";

/// Arabic numbering with a dot.
pub(crate) const NUMBERED_DOTS: &str = r"^\d{1,3}\.(?:\s|$)";

/// Arabic numbering in parentheses, or a bare digit with closing paren.
pub(crate) const NUMBERED_PARENS: &str = r"^(?:\(\d{1,3}\)|\d{1,3}\))(?:\s|$)";

/// Single lowercase letter in parentheses.
pub(crate) const LETTERED_POINTS: &str = r"^\([a-z]\)(?:\s|$)";

/// Judicial titles recognized in signature blocks and metadata extraction.
pub(crate) const JUDGE_TITLE: &str = r"(?i)\b(?:additional\s+district\s+judge|district\s+judge|sessions\s+judge|civil\s+judge|chief\s+judicial\s+magistrate|metropolitan\s+magistrate|judicial\s+magistrate|magistrate|justice)\b";

/// Court and location keywords for footer details.
pub(crate) const COURT_KEYWORDS: &str = r"(?i)\b(?:courts?|tribunal|commission|district|new\s+delhi|delhi|mumbai|chennai|kolkata|bengaluru|hyderabad|saket|dwarka|rohini|karkardooma|tis\s+hazari|patiala\s+house)\b";

/// Permissive opener for signature candidates; the guard does the real work.
pub(crate) const SIGNATURE_OPENER: &str = r"^[(\[]?[A-Za-z]";

/// Non-regex precondition attached to a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Guard {
    /// Word count strictly below the limit
    MaxWords(usize),
    /// Character count at or below the limit
    MaxLen(usize),
    /// Judge/signature heuristic (title, or uppercase near document end)
    Signature,
    /// Court-details heuristic (short line, near the footer when known)
    CourtFooter,
}

/// One entry in the classification table.
pub(crate) struct Rule {
    pub(crate) tag: LineTag,
    pub(crate) pattern: Regex,
    pub(crate) guard: Option<Guard>,
}

impl Rule {
    fn new(tag: LineTag, pattern: &str, guard: Option<Guard>) -> Self {
        Self {
            tag,
            // Patterns are compile-time constants; a failure here is a bug
            // in the table, not a runtime condition.
            pattern: Regex::new(pattern).unwrap(),
            guard,
        }
    }
}

/// Build the rule table in priority order. Empty and page-break lines are
/// resolved before the table is consulted.
pub(crate) fn rule_table() -> Vec<Rule> {
    vec![
        Rule::new(LineTag::CaseNumber, CASE_NUMBER, None),
        Rule::new(LineTag::Parties, PARTIES, Some(Guard::MaxWords(20))),
        Rule::new(LineTag::Date, DATE, Some(Guard::MaxLen(DATE_LINE_MAX))),
        Rule::new(LineTag::Present, PRESENT, None),
        Rule::new(LineTag::PageMarker, PAGE_MARKER, None),
        Rule::new(LineTag::RomanNumbering, ROMAN_NUMBERING, None),
        Rule::new(LineTag::SubPointsRoman, SUB_POINTS_ROMAN, None),
        Rule::new(LineTag::NumberedDots, NUMBERED_DOTS, None),
        Rule::new(LineTag::NumberedParentheses, NUMBERED_PARENS, None),
        Rule::new(LineTag::LetteredPoints, LETTERED_POINTS, None),
        Rule::new(
            LineTag::JudgeSignature,
            SIGNATURE_OPENER,
            Some(Guard::Signature),
        ),
        Rule::new(
            LineTag::CourtDetails,
            COURT_KEYWORDS,
            Some(Guard::CourtFooter),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_is_fixed() {
        let table = rule_table();
        let tags: Vec<LineTag> = table.iter().map(|r| r.tag).collect();
        assert_eq!(
            tags,
            vec![
                LineTag::CaseNumber,
                LineTag::Parties,
                LineTag::Date,
                LineTag::Present,
                LineTag::PageMarker,
                LineTag::RomanNumbering,
                LineTag::SubPointsRoman,
                LineTag::NumberedDots,
                LineTag::NumberedParentheses,
                LineTag::LetteredPoints,
                LineTag::JudgeSignature,
                LineTag::CourtDetails,
            ]
        );
    }

    #[test]
    fn test_case_number_pattern() {
        let re = Regex::new(CASE_NUMBER).unwrap();
        assert!(re.is_match("OMP (I) Comm. No. 800/20"));
        assert!(re.is_match("CS/123/2019"));
        assert!(re.is_match("WP (C) No. 4677/2021"));
        assert!(re.is_match("Crl. No. 55/19"));
        assert!(!re.is_match("The petition was filed in 2019"));
        // Prefix must be a whole token, not the start of a word
        assert!(!re.is_match("Sale deed No. 345/2019 was produced"));
    }

    #[test]
    fn test_date_pattern() {
        let re = Regex::new(DATE).unwrap();
        assert!(re.is_match("13.02.2020"));
        assert!(re.is_match("13/02/2020"));
        assert!(re.is_match("13-02-20"));
        assert!(re.is_match("13th February, 2020"));
        assert!(re.is_match("February 13, 2020"));
        assert!(!re.is_match("order dated in due course"));
    }

    #[test]
    fn test_numbering_patterns() {
        assert!(Regex::new(ROMAN_NUMBERING).unwrap().is_match("IV) Heading"));
        assert!(Regex::new(ROMAN_NUMBERING).unwrap().is_match("I."));
        assert!(Regex::new(SUB_POINTS_ROMAN).unwrap().is_match("(iv) point"));
        assert!(!Regex::new(SUB_POINTS_ROMAN).unwrap().is_match("(c) point"));
        assert!(Regex::new(NUMBERED_DOTS).unwrap().is_match("7. That the"));
        assert!(!Regex::new(NUMBERED_DOTS).unwrap().is_match("13.02.2020"));
        assert!(Regex::new(NUMBERED_PARENS).unwrap().is_match("(3) point"));
        assert!(Regex::new(NUMBERED_PARENS).unwrap().is_match("3) point"));
        assert!(Regex::new(LETTERED_POINTS).unwrap().is_match("(a) point"));
    }

    #[test]
    fn test_judge_title_pattern() {
        let re = Regex::new(JUDGE_TITLE).unwrap();
        assert!(re.is_match("District Judge"));
        assert!(re.is_match("ADDITIONAL DISTRICT JUDGE"));
        assert!(re.is_match("Chief Judicial Magistrate"));
        assert!(!re.is_match("VINAY KUMAR KHANNA"));
    }
}
