use super::license_data_elements;

license_data_elements! {
    pub enum DataElement, struct LicenseRecord (PartialLicenseRecord) {
        /// Jurisdiction-specific vehicle class (DCA).
        vehicle_class => VehicleClass: b"DCA",

        /// Jurisdiction-specific restriction codes (DCB).
        restriction_code => RestrictionCode: b"DCB",

        /// Jurisdiction-specific endorsement codes (DCD).
        endorsements_code => EndorsementsCode: b"DCD",

        /// Document Expiration Date, MMDDYYYY (DBA).
        expiration_date => ExpirationDate: b"DBA",

        /// Customer Family Name (DCS).
        last_name => LastName: b"DCS",

        /// Family name truncation (DDE).
        family_name_truncation => FamilyNameTruncation: b"DDE",

        /// Customer First Name (DAC).
        first_name => FirstName: b"DAC",

        /// First name truncation (DDF).
        first_name_truncation => FirstNameTruncation: b"DDF",

        /// Customer Middle Name(s) (DAD).
        middle_name => MiddleName: b"DAD",

        /// Middle name truncation (DDG).
        middle_name_truncation => MiddleNameTruncation: b"DDG",

        /// Document Issue Date, MMDDYYYY (DBD).
        issued_date => IssuedDate: b"DBD",

        /// Date of Birth, MMDDYYYY (DBB).
        birth_date => BirthDate: b"DBB",

        /// Physical Description – Sex (DBC). `1` = male, `2` = female on the
        /// wire; see the encoder for the keyword mapping.
        sex => Sex: b"DBC",

        /// Physical Description – Eye Color (DAY).
        eye_color => EyeColor: b"DAY",

        /// Physical Description – Height (DAU).
        height => Height: b"DAU",

        /// Address – Street 1 (DAG).
        street_1 as "street_1" => Street1: b"DAG",

        /// Address – City (DAI).
        city => City: b"DAI",

        /// Address – Jurisdiction Code (DAJ).
        jurisdiction_code => JurisdictionCode: b"DAJ",

        /// Address – Postal Code (DAK).
        postal_code => PostalCode: b"DAK",

        /// Customer ID Number (DAQ).
        license_number => LicenseNumber: b"DAQ",

        /// Document Discriminator (DCF).
        document_discriminator => DocumentDiscriminator: b"DCF",

        /// Country Identification (DCG).
        issuing_country => IssuingCountry: b"DCG",

        /// Hair color (DAZ).
        hair_color => HairColor: b"DAZ",

        /// Inventory control number affixed to the card stock (DCK).
        inventory_control_number => InventoryControlNumber: b"DCK",

        /// Race or ethnicity of the cardholder, per AAMVA D20 (DCL).
        race => Race: b"DCL",

        /// DHS required field that indicates compliance (DDA).
        compliance_type => ComplianceType: b"DDA",

        /// Date of the most recent version change to the visible format of
        /// the DL/ID, MMDDYYYY (DDB).
        card_revision_date => CardRevisionDate: b"DDB",

        /// Cardholder weight in pounds (DAW).
        weight_in_pounds => WeightInPounds: b"DAW",

        /// Organ donor indicator, `Y` or `N` (DSH).
        organ_donor => OrganDonor: b"DSH"
    }
}

impl LicenseRecord {
    /// Overlays every populated candidate field onto this record.
    ///
    /// This is how decoded barcode content or an extracted candidate field
    /// map lands on existing form state before re-encoding.
    pub fn merge(&mut self, candidate: &PartialLicenseRecord) {
        for (element, value) in candidate.iter() {
            self.set(element, value.to_owned());
        }
    }
}

/// The canonical sample record used to seed generator forms.
impl Default for LicenseRecord {
    fn default() -> Self {
        Self {
            vehicle_class: "C".to_owned(),
            restriction_code: "NONE".to_owned(),
            endorsements_code: "NONE".to_owned(),
            expiration_date: "03152029".to_owned(),
            last_name: "POWERS".to_owned(),
            family_name_truncation: "N".to_owned(),
            first_name: "MICHAEL".to_owned(),
            first_name_truncation: "N".to_owned(),
            middle_name: "ROY".to_owned(),
            middle_name_truncation: "N".to_owned(),
            issued_date: "10302023".to_owned(),
            birth_date: "03151983".to_owned(),
            sex: "male".to_owned(),
            eye_color: "BRO".to_owned(),
            height: "082 in".to_owned(),
            street_1: "2259 ADA LN".to_owned(),
            city: "ROUND ROCK".to_owned(),
            jurisdiction_code: "Texas".to_owned(),
            postal_code: "786640000".to_owned(),
            license_number: "03625157".to_owned(),
            document_discriminator: "46105746063515018056".to_owned(),
            issuing_country: "USA".to_owned(),
            hair_color: "BRO".to_owned(),
            inventory_control_number: "10007098064".to_owned(),
            race: "W".to_owned(),
            compliance_type: "F".to_owned(),
            card_revision_date: "07162021".to_owned(),
            weight_in_pounds: "167".to_owned(),
            organ_donor: "Y".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_every_element() {
        let mut partial = PartialLicenseRecord::new();
        partial.set(DataElement::FirstName, "HENRY".to_owned());

        let err = partial.build().unwrap_err();
        assert_eq!(err.0, DataElement::VehicleClass);
        assert_eq!(err.to_string(), "missing data element `DCA`");
    }

    #[test]
    fn complete_partial_builds() {
        let reference = LicenseRecord::default();
        let mut partial = PartialLicenseRecord::new();
        for (element, value) in reference.iter() {
            partial.set(element, value.to_owned());
        }

        assert_eq!(partial.len(), DataElement::COUNT);
        assert_eq!(partial.build().unwrap(), reference);
    }

    #[test]
    fn merge_overlays_candidate_fields() {
        let mut record = LicenseRecord::default();
        let mut candidate = PartialLicenseRecord::new();
        candidate.set(DataElement::FirstName, "HENRY".to_owned());
        candidate.set(DataElement::City, "AUSTIN".to_owned());

        record.merge(&candidate);

        assert_eq!(record.first_name, "HENRY");
        assert_eq!(record.city, "AUSTIN");
        assert_eq!(record.last_name, "POWERS");
    }
}
