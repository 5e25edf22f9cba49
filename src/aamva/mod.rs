//! AAMVA DL/ID linear text payloads.
//!
//! See: <https://www.aamva.org/assets/best-practices,-guides,-standards,-manuals,-whitepapers/aamva-dl-id-card-design-standard-(2020)>
mod macros;
use std::collections::HashMap;

pub(crate) use macros::*;

use lazy_static::lazy_static;

mod dl;
pub use dl::*;

mod decode;
pub use decode::parse_aamva;

mod encode;
pub use encode::build_aamva_string;

#[derive(Debug, thiserror::Error)]
#[error("missing data element `{0}`")]
pub struct MissingDataElement<T>(pub T);

lazy_static! {
    /// Lookup from three-letter element identifier to data element, derived
    /// from the canonical element list so it cannot drift from
    /// [`DataElement::id`].
    pub static ref ELEMENT_BY_ID: HashMap<&'static str, DataElement> = {
        let mut map = HashMap::new();

        for element in DataElement::LIST {
            map.insert(element.string_id(), element);
        }

        map
    };
}
