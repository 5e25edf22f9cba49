use log::trace;

use super::{DataElement, PartialLicenseRecord};

/// Parses raw AAMVA barcode text into a partial license record.
///
/// This is a best-effort, line-oriented scan, not a strict grammar parse:
/// carriage returns are stripped, and every line is tested against every
/// known three-letter element identifier. A match takes the rest of the line
/// after the first occurrence of the identifier as the value, trimmed, and
/// assigns it only when non-empty. A later line carrying the same identifier
/// overwrites the earlier value. Segment headers, subfile counts and element
/// ordering are not validated; unmatched input is silently dropped.
pub fn parse_aamva(raw: &str) -> PartialLicenseRecord {
    let mut record = PartialLicenseRecord::new();
    let normalized = raw.replace('\r', "");

    for line in normalized.split('\n') {
        for element in DataElement::LIST {
            if let Some(start) = line.find(element.string_id()) {
                let value = line[start + 3..].trim();
                if !value.is_empty() {
                    trace!("element {} = {value:?}", element.string_id());
                    record.set(element, value.to_owned());
                }
            }
        }
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_element_line() {
        let record = parse_aamva("DACHenry");
        assert_eq!(record.first_name.as_deref(), Some("Henry"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn identifier_without_value_sets_nothing() {
        assert!(parse_aamva("DAC").is_empty());
        assert!(parse_aamva("DAC   ").is_empty());
    }

    #[test]
    fn subfile_tag_prefix_is_skipped_over() {
        let record = parse_aamva("DLDCAC");
        assert_eq!(record.vehicle_class.as_deref(), Some("C"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn later_line_overwrites_earlier_value() {
        let record = parse_aamva("DACHenry\nDACJane");
        assert_eq!(record.first_name.as_deref(), Some("Jane"));
    }

    #[test]
    fn identifiers_within_one_line_match_independently() {
        let record = parse_aamva("DADROY DDGN");
        assert_eq!(record.middle_name.as_deref(), Some("ROY DDGN"));
        assert_eq!(record.middle_name_truncation.as_deref(), Some("N"));
    }

    #[test]
    fn carriage_returns_are_stripped() {
        let record = parse_aamva("DACHenry\r\nDAIAUSTIN\r");
        assert_eq!(record.first_name.as_deref(), Some("Henry"));
        assert_eq!(record.city.as_deref(), Some("AUSTIN"));
    }

    #[test]
    fn garbage_input_yields_an_empty_record() {
        assert!(parse_aamva("").is_empty());
        assert!(parse_aamva("not a barcode payload").is_empty());
    }

    #[test]
    fn values_are_whitespace_trimmed() {
        let record = parse_aamva("DAI  ROUND ROCK  ");
        assert_eq!(record.city.as_deref(), Some("ROUND ROCK"));
    }
}
