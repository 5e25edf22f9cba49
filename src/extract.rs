use crate::aamva::PartialLicenseRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The extraction service call failed outright.
    #[error("extraction service failure: {0}")]
    Service(String),

    /// The service answered with something that is not a field map.
    #[error("unusable candidate field map: {0}")]
    InvalidFieldMap(String),
}

/// Capability interface of the free-text extraction collaborator: arbitrary
/// text in, candidate field map out.
///
/// Implementations typically wrap a cloud text-extraction call. The
/// application merges the returned candidates into its current record with
/// [`LicenseRecord::merge`](crate::LicenseRecord::merge) before encoding;
/// the core never invokes this trait itself.
pub trait FieldExtractor {
    fn extract(&self, text: &str) -> Result<PartialLicenseRecord, ExtractError>;
}
