//! Document-level metadata extracted from header and footer windows.

use serde::{Deserialize, Serialize};

/// Flat record of document-level fields.
///
/// Every field defaults to an empty string; absence is normal, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Case number from the document header
    pub case_number: String,

    /// Petitioner / appellant / plaintiff side of the cause title
    pub petitioner: String,

    /// Respondent / defendant side of the cause title
    pub respondent: String,

    /// Hearing or pronouncement date
    pub date: String,

    /// Presiding judge's name
    pub judge_name: String,

    /// Court or tribunal name, typically from the footer
    pub court_name: String,

    /// Counsel appearance line (`Present: ...`)
    pub present_counsel: String,
}

impl DocumentMetadata {
    /// Check if no field was populated.
    pub fn is_empty(&self) -> bool {
        self.case_number.is_empty()
            && self.petitioner.is_empty()
            && self.respondent.is_empty()
            && self.date.is_empty()
            && self.judge_name.is_empty()
            && self.court_name.is_empty()
            && self.present_counsel.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let meta = DocumentMetadata::default();
        assert!(meta.is_empty());
        assert_eq!(meta.case_number, "");
    }

    #[test]
    fn test_populated_not_empty() {
        let meta = DocumentMetadata {
            date: "13.02.2020".to_string(),
            ..Default::default()
        };
        assert!(!meta.is_empty());
    }
}
