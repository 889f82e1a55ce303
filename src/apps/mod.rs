//! Binary Application Payloads for Types 6 and 8
//!
//! This module dispatches the sub-addressed application payloads selected
//! by the Designated Area Code and Function Identifier. Known combinations
//! get a dedicated decoder; everything else is carried verbatim in the
//! `Unhandled` fallback so no payload is ever dropped silently.

pub mod inland;
pub mod meteo;

pub use inland::InlandStatic;
pub use meteo::MeteoHydro;

use crate::error::AisError;
use crate::util::BitVec;
use serde::Serialize;

/// A decoded binary application payload, keyed by (DAC, FID).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Application {
    /// DAC 1 FID 11: IMO236 meteorological/hydrological data.
    MeteoHydro(MeteoHydro),
    /// DAC 200 FID 10: inland vessel static and voyage data.
    InlandStatic(InlandStatic),
    /// Any other combination: the payload bits after the DAC/FID header,
    /// untouched.
    Unhandled { data: BitVec },
}

/// Decodes an application payload for a known (DAC, FID) pair.
///
/// Fails with [`AisError::UnsupportedSubMessage`] carrying the raw pair
/// when no decoder exists, so callers can track coverage gaps.
pub fn decode(dac: u16, fid: u8, data: &BitVec) -> Result<Application, AisError> {
    match (dac, fid) {
        (1, 11) => Ok(Application::MeteoHydro(MeteoHydro::decode(data)?)),
        (200, 10) => Ok(Application::InlandStatic(InlandStatic::decode(data)?)),
        _ => Err(AisError::UnsupportedSubMessage { dac, fid }),
    }
}

/// Decodes an application payload, falling back to the opaque form instead
/// of failing the containing message.
///
/// An unknown pair or a payload that does not fit its advertised layout
/// both land in `Unhandled`; the carrier message still decodes.
pub fn decode_or_opaque(dac: u16, fid: u8, data: BitVec) -> Application {
    match decode(dac, fid, &data) {
        Ok(app) => app,
        Err(AisError::UnsupportedSubMessage { .. }) => Application::Unhandled { data },
        Err(err) => {
            log::debug!("application DAC={dac} FID={fid} does not fit its layout ({err}), keeping raw payload");
            Application::Unhandled { data }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::BitVecBuilder;

    fn bits_of_len(len_sixbits: usize) -> BitVec {
        let mut builder = BitVecBuilder::new();
        for _ in 0..len_sixbits {
            builder.push_sixbit(0b10_1010);
        }
        builder.finish()
    }

    #[test]
    fn test_unknown_pair_reports_raw_values() {
        let data = bits_of_len(4);
        let err = decode(5, 3, &data).unwrap_err();
        assert_eq!(err, AisError::UnsupportedSubMessage { dac: 5, fid: 3 });
    }

    #[test]
    fn test_unknown_pair_falls_back_to_opaque() {
        let data = bits_of_len(4);
        let app = decode_or_opaque(5, 3, data.clone());
        assert_eq!(app, Application::Unhandled { data });
    }

    #[test]
    fn test_short_known_payload_falls_back_to_opaque() {
        // DAC 200 FID 10 needs 104 bits; give it 24.
        let data = bits_of_len(4);
        let app = decode_or_opaque(200, 10, data.clone());
        assert_eq!(app, Application::Unhandled { data });
    }
}
