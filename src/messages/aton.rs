//! Aid-to-navigation report: type 21.

use crate::error::AisError;
use crate::messages::enums::EpfdFixType;
use crate::messages::{lat_degrees, lon_degrees};
use crate::util::BitVec;
use serde::Serialize;

/// Aid-to-navigation report, message type 21 (272 to 360 bits).
///
/// Names longer than 20 characters continue in the variable-length name
/// extension; [`AidToNavigation::full_name`] joins the two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AidToNavigation {
    pub repeat: u8,
    pub mmsi: u32,
    /// Aid type code; see [`crate::messages::enums::navaid_type_label`].
    pub aid_type: u8,
    /// Name, first 20 six-bit characters.
    pub name: String,
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units; 181 deg not available.
    pub lon: i32,
    /// Latitude in 1/10000 minute units; 91 deg not available.
    pub lat: i32,
    /// Distance from reference point to bow, metres; 511 clamp.
    pub to_bow: u16,
    /// Distance to stern, metres; 511 clamp.
    pub to_stern: u16,
    /// Distance to port side, metres.
    pub to_port: u8,
    /// Distance to starboard side, metres.
    pub to_starboard: u8,
    pub epfd: EpfdFixType,
    /// UTC second; 60 not available.
    pub second: u8,
    /// True when the aid is off its charted position; optional, false when
    /// absent.
    pub off_position: bool,
    /// Regional reserved bits; optional, 0 when absent.
    pub regional: u8,
    /// RAIM flag; optional, false when absent.
    pub raim: bool,
    /// True for a virtual aid (no physical structure); optional.
    pub virtual_aid: bool,
    /// Assigned-mode flag; optional.
    pub assigned: bool,
    /// Name continuation, up to 14 further characters; empty when not
    /// transmitted.
    pub name_extension: String,
}

impl AidToNavigation {
    /// Decodes a type 21 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let extension_bits = bits.len().saturating_sub(272);
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            aid_type: bits.uint(38, 5)? as u8,
            name: bits.string(43, 120)?,
            accuracy: bits.flag(163)?,
            lon: bits.int(164, 28)? as i32,
            lat: bits.int(192, 27)? as i32,
            to_bow: bits.uint(219, 9)? as u16,
            to_stern: bits.uint(228, 9)? as u16,
            to_port: bits.uint(237, 6)? as u8,
            to_starboard: bits.uint(243, 6)? as u8,
            epfd: EpfdFixType::from_raw(bits.uint(249, 4)? as u8),
            second: bits.uint(253, 6)? as u8,
            off_position: bits.flag_or(259, false),
            regional: bits.uint_or(260, 8, 0) as u8,
            raim: bits.flag_or(268, false),
            virtual_aid: bits.flag_or(269, false),
            assigned: bits.flag_or(270, false),
            name_extension: bits.string(272, extension_bits - extension_bits % 6)?,
        })
    }

    /// The full aid name: base field plus extension.
    pub fn full_name(&self) -> String {
        let mut name = self.name.clone();
        name.push_str(&self.name_extension);
        name
    }

    pub fn longitude(&self) -> Option<f64> {
        lon_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat_degrees(self.lat)
    }
}
