//! Line normalization applied before classification.
//!
//! The extraction collaborator is expected to deliver Unicode-normalized
//! text, but extractors differ on soft hyphens, NBSP, and stray control
//! characters, so a light normalization pass runs on every line.

use unicode_normalization::UnicodeNormalization;

/// Options for the normalization pass.
#[derive(Debug, Clone)]
pub struct NormalizeOptions {
    /// Remove soft-hyphen characters (U+00AD)
    pub strip_soft_hyphens: bool,

    /// Keep non-breaking spaces as-is instead of replacing with plain spaces
    pub preserve_nbsp: bool,

    /// Remove vertical-tab and carriage-return control characters
    pub scrub_control_chars: bool,

    /// Apply Unicode NFC normalization. Off by default: the extraction
    /// stage usually normalizes already.
    pub normalize_unicode: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            strip_soft_hyphens: true,
            preserve_nbsp: false,
            scrub_control_chars: true,
            normalize_unicode: false,
        }
    }
}

impl NormalizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep soft hyphens in the text.
    pub fn keep_soft_hyphens(mut self) -> Self {
        self.strip_soft_hyphens = false;
        self
    }

    /// Preserve NBSP characters.
    pub fn keep_nbsp(mut self) -> Self {
        self.preserve_nbsp = true;
        self
    }

    /// Enable Unicode NFC normalization.
    pub fn with_nfc(mut self) -> Self {
        self.normalize_unicode = true;
        self
    }

    /// Normalize a single line of text.
    pub fn apply(&self, text: &str) -> String {
        let mut result = if self.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.strip_soft_hyphens {
            result = result.replace('\u{00AD}', "");
        }
        if !self.preserve_nbsp {
            result = result.replace('\u{00A0}', " ");
        }
        if self.scrub_control_chars {
            result = result.replace('\u{000B}', " ").replace('\r', "");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soft_hyphen_removed_by_default() {
        let options = NormalizeOptions::default();
        assert_eq!(options.apply("inter\u{00AD}national"), "international");
    }

    #[test]
    fn test_soft_hyphen_kept_when_requested() {
        let options = NormalizeOptions::new().keep_soft_hyphens();
        assert_eq!(
            options.apply("inter\u{00AD}national"),
            "inter\u{00AD}national"
        );
    }

    #[test]
    fn test_nbsp_replaced() {
        let options = NormalizeOptions::default();
        assert_eq!(options.apply("No.\u{00A0}800"), "No. 800");

        let keep = NormalizeOptions::new().keep_nbsp();
        assert_eq!(keep.apply("No.\u{00A0}800"), "No.\u{00A0}800");
    }

    #[test]
    fn test_control_chars_scrubbed() {
        let options = NormalizeOptions::default();
        assert_eq!(options.apply("a\u{000B}b\r"), "a b");
    }

    #[test]
    fn test_nfc_normalization() {
        let options = NormalizeOptions::new().with_nfc();
        // e + combining acute accent composes to é
        assert_eq!(options.apply("de\u{0301}cret"), "décret");
    }
}
