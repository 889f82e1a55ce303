//! Static and voyage related data: types 5 and 24.
//!
//! Type 24 arrives as two independently broadcast parts. Each part decodes
//! to its own record carrying the part tag; matching Part A names with
//! Part B details for one vessel is the job of a downstream aggregator,
//! not this crate.

use crate::constants::*;
use crate::error::AisError;
use crate::messages::enums::{EpfdFixType, PartNumber};
use crate::util::BitVec;
use serde::Serialize;

/// Static and voyage related data, message type 5 (424 bits nominal).
///
/// Receivers also emit 420- and 422-bit variants that cut the message off
/// inside the trailing spare; `dte` defaults when missing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticVoyageData {
    pub repeat: u8,
    pub mmsi: u32,
    /// AIS protocol version the transponder conforms to (0 = ITU1371).
    pub ais_version: u8,
    /// IMO ship identification number; 0 not available.
    pub imo: u32,
    /// Call sign, up to 7 six-bit characters.
    pub callsign: String,
    /// Ship name, up to 20 six-bit characters.
    pub shipname: String,
    /// Ship/cargo type code; see [`crate::messages::enums::ship_type_label`].
    pub shiptype: u8,
    /// Distance from reference point to bow, metres; 511 clamp.
    pub to_bow: u16,
    /// Distance to stern, metres; 511 clamp.
    pub to_stern: u16,
    /// Distance to port side, metres.
    pub to_port: u8,
    /// Distance to starboard side, metres.
    pub to_starboard: u8,
    pub epfd: EpfdFixType,
    /// ETA month 1-12; 0 not available.
    pub month: u8,
    /// ETA day 1-31; 0 not available.
    pub day: u8,
    /// ETA hour 0-23; 24 not available.
    pub hour: u8,
    /// ETA minute 0-59; 60 not available.
    pub minute: u8,
    /// Draught in 0.1 metre units; 0 not available.
    pub draught: u8,
    /// Destination, up to 20 six-bit characters.
    pub destination: String,
    /// Data terminal ready flag (0 = ready); optional, true (not ready)
    /// when the short variants cut it off.
    pub dte: bool,
}

impl StaticVoyageData {
    /// Decodes a type 5 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            ais_version: bits.uint(38, 2)? as u8,
            imo: bits.uint(40, 30)? as u32,
            callsign: bits.string(70, 42)?,
            shipname: bits.string(112, 120)?,
            shiptype: bits.uint(232, 8)? as u8,
            to_bow: bits.uint(240, 9)? as u16,
            to_stern: bits.uint(249, 9)? as u16,
            to_port: bits.uint(258, 6)? as u8,
            to_starboard: bits.uint(264, 6)? as u8,
            epfd: EpfdFixType::from_raw(bits.uint(270, 4)? as u8),
            month: bits.uint(274, 4)? as u8,
            day: bits.uint(278, 5)? as u8,
            hour: bits.uint(283, 5)? as u8,
            minute: bits.uint(288, 6)? as u8,
            draught: bits.uint(294, 8)? as u8,
            destination: bits.string(302, 120)?,
            dte: bits.flag_or(422, true),
        })
    }

    /// Draught in metres; `None` when not available.
    pub fn draught_metres(&self) -> Option<f64> {
        if self.draught == AIS_DRAUGHT_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.draught) / 10.0)
        }
    }
}

/// Hull dimensions or, for an auxiliary craft, the mothership identity
/// (type 24 Part B tail, selected by the 98xxxxxxx MMSI prefix).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PartBReference {
    Dimensions {
        /// Distance from reference point to bow, metres; 511 clamp.
        to_bow: u16,
        /// Distance to stern, metres; 511 clamp.
        to_stern: u16,
        /// Distance to port side, metres.
        to_port: u8,
        /// Distance to starboard side, metres.
        to_starboard: u8,
    },
    Mothership {
        /// MMSI of the vessel this craft belongs to.
        mmsi: u32,
    },
}

/// Type 24 Part B payload: equipment and hull details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticDataPartB {
    /// Ship/cargo type code; see [`crate::messages::enums::ship_type_label`].
    pub shiptype: u8,
    /// Manufacturer mnemonic, 3 six-bit characters.
    pub vendor_id: String,
    /// Unit model code within the vendor's range.
    pub model: u8,
    /// Unit serial number within the vendor's range.
    pub serial: u32,
    /// Call sign, up to 7 six-bit characters.
    pub callsign: String,
    pub reference: PartBReference,
}

/// The two broadcast parts of a type 24 report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StaticDataPart {
    /// Part A: ship name only.
    A { shipname: String },
    /// Part B: equipment and hull details.
    B(StaticDataPartB),
}

/// Class B static data report, message type 24 (160 or 168 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticDataReport {
    pub repeat: u8,
    pub mmsi: u32,
    pub part: StaticDataPart,
}

impl StaticDataReport {
    /// Decodes a type 24 payload. The reserved part numbers 2 and 3 are
    /// reported as an unsupported form rather than guessed at.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let part = match bits.uint(38, 2)? {
            0 => StaticDataPart::A {
                shipname: bits.string(40, 120)?,
            },
            1 => {
                let reference = if mmsi / 10_000_000 == AIS_AUXILIARY_MMSI_PREFIX {
                    PartBReference::Mothership {
                        mmsi: bits.uint_or(132, 30, 0) as u32,
                    }
                } else {
                    PartBReference::Dimensions {
                        to_bow: bits.uint_or(132, 9, 0) as u16,
                        to_stern: bits.uint_or(141, 9, 0) as u16,
                        to_port: bits.uint_or(150, 6, 0) as u8,
                        to_starboard: bits.uint_or(156, 6, 0) as u8,
                    }
                };
                StaticDataPart::B(StaticDataPartB {
                    shiptype: bits.uint(40, 8)? as u8,
                    vendor_id: bits.string(48, 18)?,
                    model: bits.uint(66, 4)? as u8,
                    serial: bits.uint(70, 20)? as u32,
                    callsign: bits.string(90, 42)?,
                    reference,
                })
            }
            _ => {
                return Err(AisError::UnsupportedType {
                    message_type: 24,
                    payload_bits: bits.len(),
                })
            }
        };
        Ok(Self { repeat, mmsi, part })
    }

    /// Which part this record carries.
    pub fn part_number(&self) -> PartNumber {
        match self.part {
            StaticDataPart::A { .. } => PartNumber::A,
            StaticDataPart::B(_) => PartNumber::B,
        }
    }
}
