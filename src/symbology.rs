use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Barcode symbologies understood by the scanning and rendering
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbology {
    #[serde(rename = "PDF417")]
    Pdf417,

    #[serde(rename = "CODE128")]
    Code128,

    #[serde(rename = "CODE39")]
    Code39,

    #[serde(rename = "EAN13")]
    Ean13,
}

impl Symbology {
    pub const LIST: [Self; 4] = [Self::Pdf417, Self::Code128, Self::Code39, Self::Ean13];

    /// Whether this symbology carries a full DL/ID payload.
    ///
    /// Only PDF417 does; the 1-D symbologies hold short free-form content
    /// and never receive [`build_aamva_string`](crate::build_aamva_string)
    /// output.
    pub fn carries_dlid_payload(&self) -> bool {
        matches!(self, Self::Pdf417)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf417 => "PDF417",
            Self::Code128 => "CODE128",
            Self::Code39 => "CODE39",
            Self::Ean13 => "EAN13",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown symbology `{0}`")]
pub struct UnknownSymbology(pub String);

impl FromStr for Symbology {
    type Err = UnknownSymbology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDF417" => Ok(Self::Pdf417),
            "CODE128" => Ok(Self::Code128),
            "CODE39" => Ok(Self::Code39),
            "EAN13" => Ok(Self::Ean13),
            other => Err(UnknownSymbology(other.to_owned())),
        }
    }
}
