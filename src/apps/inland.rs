//! Inland vessel static and voyage data, DAC 200 FID 10 (European
//! inland waterways extension to type 8).
//!
//! Offsets are relative to the application payload, which begins after the
//! 56-bit type 8 header. The payload is 104 bits plus spare.

use crate::error::AisError;
use crate::util::BitVec;
use serde::Serialize;

/// Inland static and voyage related data (104 payload bits plus spare).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlandStatic {
    /// European Number of Identification (ENI), 8 six-bit characters.
    pub vin: String,
    /// Length of ship in 0.1 metre units; 0 not available.
    pub length: u16,
    /// Beam of ship in 0.1 metre units; 0 not available.
    pub beam: u16,
    /// ERI ship/combination type code.
    pub shiptype: u16,
    /// Number of blue cones (hazardous cargo): 0-3, 4 is B-flag,
    /// 5 unknown.
    pub hazard: u8,
    /// Draught in 0.01 metre units; 0 not available.
    pub draught: u16,
    /// Loaded/unloaded state: 1 loaded, 2 unloaded, 0 or 3 not available.
    pub loaded: u8,
    /// Quality flag for speed data.
    pub speed_quality: bool,
    /// Quality flag for course data.
    pub course_quality: bool,
    /// Quality flag for heading data.
    pub heading_quality: bool,
}

impl InlandStatic {
    /// Decodes a DAC 200 FID 10 application payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            vin: bits.string(0, 48)?,
            length: bits.uint(48, 13)? as u16,
            beam: bits.uint(61, 10)? as u16,
            shiptype: bits.uint(71, 14)? as u16,
            hazard: bits.uint(85, 3)? as u8,
            draught: bits.uint(88, 11)? as u16,
            loaded: bits.uint(99, 2)? as u8,
            speed_quality: bits.flag(101)?,
            course_quality: bits.flag(102)?,
            heading_quality: bits.flag(103)?,
        })
    }

    /// Ship length in metres; `None` when not available.
    pub fn length_metres(&self) -> Option<f64> {
        if self.length == 0 {
            None
        } else {
            Some(f64::from(self.length) / 10.0)
        }
    }

    /// Ship beam in metres; `None` when not available.
    pub fn beam_metres(&self) -> Option<f64> {
        if self.beam == 0 {
            None
        } else {
            Some(f64::from(self.beam) / 10.0)
        }
    }

    /// Draught in metres; `None` when not available.
    pub fn draught_metres(&self) -> Option<f64> {
        if self.draught == 0 {
            None
        } else {
            Some(f64::from(self.draught) / 100.0)
        }
    }
}
