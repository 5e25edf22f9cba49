use std::borrow::Cow;

use super::{DataElement, LicenseRecord};

/// Fixed ANSI/IIN/subfile-length preamble for the PDF417 profile targeted by
/// the generator.
const ANSI_PREAMBLE: &str = "ANSI 636015090002DL00410268ZT03090007";

/// Tag of the driver's-license subfile; prefixes the first element line.
const DL_SUBFILE_TAG: &str = "DL";

/// Builds the raw AAMVA text payload for a full license record.
///
/// Emits the `@` line, the fixed ANSI preamble line, then one
/// `identifier + value` line per element in canonical order, the first
/// carrying the `DL` subfile tag. Values are emitted as stored, without
/// escaping, padding or validation; wire-format conformance (field widths,
/// eight-digit dates) is on the caller. The returned string is the exact
/// payload handed to the symbol renderer.
pub fn build_aamva_string(record: &LicenseRecord) -> String {
    let mut out = String::new();
    out.push('@');
    out.push('\n');
    out.push_str(ANSI_PREAMBLE);

    for (i, element) in DataElement::LIST.into_iter().enumerate() {
        out.push('\n');
        if i == 0 {
            out.push_str(DL_SUBFILE_TAG);
        }
        out.push_str(element.string_id());
        out.push_str(&element_value(record, element));
    }

    out
}

/// Wire representation of one element's stored value.
///
/// Two elements are special-cased: `sex` maps the `male`/`female` keywords
/// to the `1`/`2` wire codes (anything else passes through, so raw codes
/// survive round-trips), and the jurisdiction code is cut to its first two
/// characters, upper-cased, so a stored full jurisdiction name emits the
/// required two-letter code.
fn element_value(record: &LicenseRecord, element: DataElement) -> Cow<'_, str> {
    match element {
        DataElement::Sex => match record.sex.as_str() {
            "male" => Cow::Borrowed("1"),
            "female" => Cow::Borrowed("2"),
            other => Cow::Borrowed(other),
        },
        DataElement::JurisdictionCode => {
            let code: String = record.jurisdiction_code.chars().take(2).collect();
            Cow::Owned(code.to_uppercase())
        }
        _ => Cow::Borrowed(record.get(element)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_payload() {
        let payload = build_aamva_string(&LicenseRecord::default());
        let lines: Vec<&str> = payload.split('\n').collect();

        assert_eq!(lines[0], "@");
        assert_eq!(lines[1], "ANSI 636015090002DL00410268ZT03090007");
        assert_eq!(lines[2], "DLDCAC");
        assert_eq!(lines.len(), 2 + DataElement::COUNT);
        assert_eq!(*lines.last().unwrap(), "DSHY");

        assert!(lines.contains(&"DBC1"));
        assert!(lines.contains(&"DAJTX"));
        assert!(lines.contains(&"DCSPOWERS"));
        assert!(lines.contains(&"DACMICHAEL"));
    }

    #[test]
    fn sex_keywords_map_to_wire_codes() {
        let mut record = LicenseRecord::default();

        record.sex = "female".to_owned();
        assert!(build_aamva_string(&record).contains("\nDBC2\n"));

        record.sex = "M".to_owned();
        assert!(build_aamva_string(&record).contains("\nDBCM\n"));
    }

    #[test]
    fn jurisdiction_is_cut_and_upper_cased() {
        let mut record = LicenseRecord::default();
        record.jurisdiction_code = "california".to_owned();

        assert!(build_aamva_string(&record).contains("\nDAJCA\n"));
    }

    #[test]
    fn short_jurisdiction_passes_through() {
        let mut record = LicenseRecord::default();
        record.jurisdiction_code = "ut".to_owned();

        assert!(build_aamva_string(&record).contains("\nDAJUT\n"));
    }

    #[test]
    fn empty_values_emit_bare_identifiers() {
        let record = LicenseRecord::new_with(|_| String::new());
        let payload = build_aamva_string(&record);

        assert!(payload.contains("\nDAQ\n"));
        assert!(payload.ends_with("\nDSH"));
    }
}
