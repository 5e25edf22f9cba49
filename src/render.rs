use crate::symbology::Symbology;

/// 8-bit grayscale raster, row-major; `data.len() == width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The payload cannot be expressed in the requested symbology, for
    /// example multi-line AAMVA text in a 1-D code.
    #[error("{symbology} cannot encode the given payload")]
    UnsupportedPayload { symbology: Symbology },

    /// The underlying rasterizer failed.
    #[error("renderer failure: {0}")]
    Backend(String),
}

/// Capability interface of the barcode-rendering collaborator: text plus
/// symbology in, raster symbol out.
///
/// The core never rasterizes. Generators implement this around a real symbol
/// library and feed it [`build_aamva_string`](crate::build_aamva_string)
/// output verbatim, so the payload reaches the symbol byte-for-byte.
pub trait SymbolRenderer {
    fn render(&self, payload: &str, symbology: Symbology) -> Result<RasterImage, RenderError>;
}
