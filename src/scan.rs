use log::debug;
use serde::{Deserialize, Serialize};

use crate::aamva::{parse_aamva, PartialLicenseRecord};

/// Returns whether raw symbol text looks like an AAMVA DL/ID payload.
///
/// The scanning collaborator runs this pre-check before handing decoded text
/// to [`parse_aamva`]; the parser itself accepts anything.
pub fn looks_like_aamva(raw: &str) -> bool {
    raw.starts_with('@') || raw.contains("ANSI")
}

/// Outcome of one decoded barcode symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Symbology name as reported by the scanner.
    pub format: String,

    /// Raw decoded symbol text.
    pub raw: String,

    /// Structured fields, present when the raw text looked like AAMVA data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<PartialLicenseRecord>,
}

impl ScanResult {
    /// Wraps one decoded symbol, parsing its text when it passes the AAMVA
    /// sniff.
    pub fn from_symbol(format: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = if looks_like_aamva(&raw) {
            Some(parse_aamva(&raw))
        } else {
            debug!("symbol text does not look like AAMVA data, leaving it raw");
            None
        };

        Self {
            format: format.into(),
            raw,
            parsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniff_accepts_at_prefix_and_ansi_marker() {
        assert!(looks_like_aamva("@\nANSI 636015090002DL00410268"));
        assert!(looks_like_aamva("garbled ANSI 636015 prefix"));
        assert!(!looks_like_aamva("5901234123457"));
        assert!(!looks_like_aamva(""));
    }

    #[test]
    fn aamva_symbols_are_parsed() {
        let result = ScanResult::from_symbol("PDF_417", "@\nDACHenry");

        assert_eq!(result.format, "PDF_417");
        let parsed = result.parsed.unwrap();
        assert_eq!(parsed.first_name.as_deref(), Some("Henry"));
    }

    #[test]
    fn non_aamva_symbols_stay_raw() {
        let result = ScanResult::from_symbol("EAN_13", "5901234123457");

        assert_eq!(result.raw, "5901234123457");
        assert!(result.parsed.is_none());
    }
}
