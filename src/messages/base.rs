//! Base station and timing messages: types 4/11 and 10.

use crate::error::AisError;
use crate::messages::enums::EpfdFixType;
use crate::messages::{lat_degrees, lon_degrees};
use crate::util::BitVec;
use serde::Serialize;

/// Base station report, message type 4, and its twin type 11 (UTC/date
/// response), which shares the exact layout (168 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStationReport {
    /// Message type actually received: 4 or 11.
    pub message_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
    /// UTC year 1-9999; 0 not available.
    pub year: u16,
    /// UTC month 1-12; 0 not available.
    pub month: u8,
    /// UTC day 1-31; 0 not available.
    pub day: u8,
    /// UTC hour 0-23; 24 not available.
    pub hour: u8,
    /// UTC minute 0-59; 60 not available.
    pub minute: u8,
    /// UTC second 0-59; 60 not available.
    pub second: u8,
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units; 181 deg not available.
    pub lon: i32,
    /// Latitude in 1/10000 minute units; 91 deg not available.
    pub lat: i32,
    pub epfd: EpfdFixType,
    /// RAIM flag; optional, false when absent.
    pub raim: bool,
    /// SOTDMA state, carried raw; optional.
    pub radio: u32,
}

impl BaseStationReport {
    /// Decodes a type 4 or 11 payload.
    pub fn decode(bits: &BitVec, message_type: u8) -> Result<Self, AisError> {
        Ok(Self {
            message_type,
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            year: bits.uint(38, 14)? as u16,
            month: bits.uint(52, 4)? as u8,
            day: bits.uint(56, 5)? as u8,
            hour: bits.uint(61, 5)? as u8,
            minute: bits.uint(66, 6)? as u8,
            second: bits.uint(72, 6)? as u8,
            accuracy: bits.flag(78)?,
            lon: bits.int(79, 28)? as i32,
            lat: bits.int(107, 27)? as i32,
            epfd: EpfdFixType::from_raw(bits.uint(134, 4)? as u8),
            raim: bits.flag_or(148, false),
            radio: bits.uint_or(149, 19, 0) as u32,
        })
    }

    pub fn longitude(&self) -> Option<f64> {
        lon_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat_degrees(self.lat)
    }
}

/// UTC/date inquiry, message type 10 (72 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtcInquiry {
    pub repeat: u8,
    pub mmsi: u32,
    /// MMSI of the station being asked for a type 11 response.
    pub dest_mmsi: u32,
}

impl UtcInquiry {
    /// Decodes a type 10 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            dest_mmsi: bits.uint(40, 30)? as u32,
        })
    }
}
