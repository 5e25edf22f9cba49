//! Bidirectional transcoding between structured driver's-license records and
//! the AAMVA DL/ID linear text encoding carried inside PDF417 barcodes.
//!
//! The core is two pure functions over one data model: [`parse_aamva`] turns
//! raw decoded symbol text into a [`PartialLicenseRecord`], and
//! [`build_aamva_string`] turns a full [`LicenseRecord`] into the exact
//! payload handed to a symbol renderer. Scanning, rasterization and
//! free-text extraction are external collaborators; their contracts live in
//! [`scan`], [`render`] and [`extract`].
pub mod aamva;
pub mod extract;
pub mod render;
pub mod scan;
pub mod symbology;

pub use aamva::{
    build_aamva_string, parse_aamva, DataElement, LicenseRecord, MissingDataElement,
    PartialLicenseRecord,
};
pub use extract::FieldExtractor;
pub use render::{RasterImage, SymbolRenderer};
pub use scan::{looks_like_aamva, ScanResult};
pub use symbology::Symbology;
