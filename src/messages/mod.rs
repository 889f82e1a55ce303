//! # Message Dispatch and Type Decoders
//!
//! This module turns a complete bit vector into one decoded record. The
//! first six bits select the message type; each type's decoder reads its
//! fixed field layout through the bit extractor, and the result is one
//! variant of the closed [`AisMessage`] enum.
//!
//! Decoders are pure functions of the bit vector; all reassembly state
//! lives in the NMEA layer. Messages sharing a layout (1/2/3, 4/11, 7/13)
//! share a decoder and record the type actually received.

pub mod aton;
pub mod base;
pub mod binary;
pub mod enums;
pub mod position;
pub mod safety;
pub mod system;
pub mod voyage;

pub use aton::AidToNavigation;
pub use base::{BaseStationReport, UtcInquiry};
pub use binary::{AddressedBinary, BroadcastBinary, MultiSlotBinary, SingleSlotBinary};
pub use position::{
    ClassBPosition, ExtendedClassBPosition, LongRangePosition, PositionReport, RateOfTurn,
    SarAircraftPosition,
};
pub use safety::{Acknowledge, Acknowledgement, AddressedSafety, SafetyBroadcast};
pub use system::{
    Assignment, AssignmentCommand, ChannelManagement, ChannelTarget, DataLinkManagement,
    DgnssBroadcast, GroupAssignment, Interrogation, InterrogationRequest, ReservationBlock,
};
pub use voyage::{StaticDataPart, StaticDataReport, StaticVoyageData};

use crate::constants::*;
use crate::error::AisError;
use crate::util::BitVec;
use serde::Serialize;
use serde_json::Value;

/// A decoded AIS message: one variant per ITU-R M.1371 message type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AisMessage {
    /// Types 1-3: Class A position report.
    PositionReport(PositionReport),
    /// Types 4 and 11: base station report / UTC response.
    BaseStationReport(BaseStationReport),
    /// Type 5: static and voyage related data.
    StaticVoyageData(StaticVoyageData),
    /// Type 6: addressed binary message.
    AddressedBinary(AddressedBinary),
    /// Types 7 and 13: binary / safety acknowledgement.
    Acknowledge(Acknowledge),
    /// Type 8: broadcast binary message.
    BroadcastBinary(BroadcastBinary),
    /// Type 9: SAR aircraft position report.
    SarAircraftPosition(SarAircraftPosition),
    /// Type 10: UTC/date inquiry.
    UtcInquiry(UtcInquiry),
    /// Type 12: addressed safety related message.
    AddressedSafety(AddressedSafety),
    /// Type 14: safety related broadcast.
    SafetyBroadcast(SafetyBroadcast),
    /// Type 15: interrogation.
    Interrogation(Interrogation),
    /// Type 16: assignment mode command.
    AssignmentCommand(AssignmentCommand),
    /// Type 17: DGNSS broadcast binary message.
    DgnssBroadcast(DgnssBroadcast),
    /// Type 18: standard Class B position report.
    ClassBPosition(ClassBPosition),
    /// Type 19: extended Class B position report.
    ExtendedClassBPosition(ExtendedClassBPosition),
    /// Type 20: data link management.
    DataLinkManagement(DataLinkManagement),
    /// Type 21: aid-to-navigation report.
    AidToNavigation(AidToNavigation),
    /// Type 22: channel management.
    ChannelManagement(ChannelManagement),
    /// Type 23: group assignment command.
    GroupAssignment(GroupAssignment),
    /// Type 24: Class B static data report (Part A or B).
    StaticDataReport(StaticDataReport),
    /// Type 25: single slot binary message.
    SingleSlotBinary(SingleSlotBinary),
    /// Type 26: multiple slot binary message.
    MultiSlotBinary(MultiSlotBinary),
    /// Type 27: long-range broadcast position report.
    LongRangePosition(LongRangePosition),
}

/// Reads the type tag of a complete bit vector and applies the matching
/// field layout.
///
/// Type values outside 1-27 fail with [`AisError::UnsupportedType`]
/// carrying the raw tag; this is a per-message condition and other
/// messages decode unaffected.
pub fn dispatch(bits: &BitVec) -> Result<AisMessage, AisError> {
    let message_type = bits.uint(0, 6)? as u8;
    match message_type {
        1..=3 => PositionReport::decode(bits, message_type).map(AisMessage::PositionReport),
        4 | 11 => {
            BaseStationReport::decode(bits, message_type).map(AisMessage::BaseStationReport)
        }
        5 => StaticVoyageData::decode(bits).map(AisMessage::StaticVoyageData),
        6 => AddressedBinary::decode(bits).map(AisMessage::AddressedBinary),
        7 | 13 => Acknowledge::decode(bits, message_type).map(AisMessage::Acknowledge),
        8 => BroadcastBinary::decode(bits).map(AisMessage::BroadcastBinary),
        9 => SarAircraftPosition::decode(bits).map(AisMessage::SarAircraftPosition),
        10 => UtcInquiry::decode(bits).map(AisMessage::UtcInquiry),
        12 => AddressedSafety::decode(bits).map(AisMessage::AddressedSafety),
        14 => SafetyBroadcast::decode(bits).map(AisMessage::SafetyBroadcast),
        15 => Interrogation::decode(bits).map(AisMessage::Interrogation),
        16 => AssignmentCommand::decode(bits).map(AisMessage::AssignmentCommand),
        17 => DgnssBroadcast::decode(bits).map(AisMessage::DgnssBroadcast),
        18 => ClassBPosition::decode(bits).map(AisMessage::ClassBPosition),
        19 => ExtendedClassBPosition::decode(bits).map(AisMessage::ExtendedClassBPosition),
        20 => DataLinkManagement::decode(bits).map(AisMessage::DataLinkManagement),
        21 => AidToNavigation::decode(bits).map(AisMessage::AidToNavigation),
        22 => ChannelManagement::decode(bits).map(AisMessage::ChannelManagement),
        23 => GroupAssignment::decode(bits).map(AisMessage::GroupAssignment),
        24 => StaticDataReport::decode(bits).map(AisMessage::StaticDataReport),
        25 => SingleSlotBinary::decode(bits).map(AisMessage::SingleSlotBinary),
        26 => MultiSlotBinary::decode(bits).map(AisMessage::MultiSlotBinary),
        27 => LongRangePosition::decode(bits).map(AisMessage::LongRangePosition),
        _ => {
            log::debug!(
                "unsupported message type {message_type}, payload {}",
                bits.to_hex()
            );
            Err(AisError::UnsupportedType {
                message_type,
                payload_bits: bits.len(),
            })
        }
    }
}

impl AisMessage {
    /// The message type tag, 1-27.
    pub fn message_type(&self) -> u8 {
        match self {
            AisMessage::PositionReport(m) => m.message_type,
            AisMessage::BaseStationReport(m) => m.message_type,
            AisMessage::StaticVoyageData(_) => 5,
            AisMessage::AddressedBinary(_) => 6,
            AisMessage::Acknowledge(m) => m.message_type,
            AisMessage::BroadcastBinary(_) => 8,
            AisMessage::SarAircraftPosition(_) => 9,
            AisMessage::UtcInquiry(_) => 10,
            AisMessage::AddressedSafety(_) => 12,
            AisMessage::SafetyBroadcast(_) => 14,
            AisMessage::Interrogation(_) => 15,
            AisMessage::AssignmentCommand(_) => 16,
            AisMessage::DgnssBroadcast(_) => 17,
            AisMessage::ClassBPosition(_) => 18,
            AisMessage::ExtendedClassBPosition(_) => 19,
            AisMessage::DataLinkManagement(_) => 20,
            AisMessage::AidToNavigation(_) => 21,
            AisMessage::ChannelManagement(_) => 22,
            AisMessage::GroupAssignment(_) => 23,
            AisMessage::StaticDataReport(_) => 24,
            AisMessage::SingleSlotBinary(_) => 25,
            AisMessage::MultiSlotBinary(_) => 26,
            AisMessage::LongRangePosition(_) => 27,
        }
    }

    /// Repeat indicator from the common header, 0-3.
    pub fn repeat(&self) -> u8 {
        match self {
            AisMessage::PositionReport(m) => m.repeat,
            AisMessage::BaseStationReport(m) => m.repeat,
            AisMessage::StaticVoyageData(m) => m.repeat,
            AisMessage::AddressedBinary(m) => m.repeat,
            AisMessage::Acknowledge(m) => m.repeat,
            AisMessage::BroadcastBinary(m) => m.repeat,
            AisMessage::SarAircraftPosition(m) => m.repeat,
            AisMessage::UtcInquiry(m) => m.repeat,
            AisMessage::AddressedSafety(m) => m.repeat,
            AisMessage::SafetyBroadcast(m) => m.repeat,
            AisMessage::Interrogation(m) => m.repeat,
            AisMessage::AssignmentCommand(m) => m.repeat,
            AisMessage::DgnssBroadcast(m) => m.repeat,
            AisMessage::ClassBPosition(m) => m.repeat,
            AisMessage::ExtendedClassBPosition(m) => m.repeat,
            AisMessage::DataLinkManagement(m) => m.repeat,
            AisMessage::AidToNavigation(m) => m.repeat,
            AisMessage::ChannelManagement(m) => m.repeat,
            AisMessage::GroupAssignment(m) => m.repeat,
            AisMessage::StaticDataReport(m) => m.repeat,
            AisMessage::SingleSlotBinary(m) => m.repeat,
            AisMessage::MultiSlotBinary(m) => m.repeat,
            AisMessage::LongRangePosition(m) => m.repeat,
        }
    }

    /// Source MMSI from the common header.
    pub fn mmsi(&self) -> u32 {
        match self {
            AisMessage::PositionReport(m) => m.mmsi,
            AisMessage::BaseStationReport(m) => m.mmsi,
            AisMessage::StaticVoyageData(m) => m.mmsi,
            AisMessage::AddressedBinary(m) => m.mmsi,
            AisMessage::Acknowledge(m) => m.mmsi,
            AisMessage::BroadcastBinary(m) => m.mmsi,
            AisMessage::SarAircraftPosition(m) => m.mmsi,
            AisMessage::UtcInquiry(m) => m.mmsi,
            AisMessage::AddressedSafety(m) => m.mmsi,
            AisMessage::SafetyBroadcast(m) => m.mmsi,
            AisMessage::Interrogation(m) => m.mmsi,
            AisMessage::AssignmentCommand(m) => m.mmsi,
            AisMessage::DgnssBroadcast(m) => m.mmsi,
            AisMessage::ClassBPosition(m) => m.mmsi,
            AisMessage::ExtendedClassBPosition(m) => m.mmsi,
            AisMessage::DataLinkManagement(m) => m.mmsi,
            AisMessage::AidToNavigation(m) => m.mmsi,
            AisMessage::ChannelManagement(m) => m.mmsi,
            AisMessage::GroupAssignment(m) => m.mmsi,
            AisMessage::StaticDataReport(m) => m.mmsi,
            AisMessage::SingleSlotBinary(m) => m.mmsi,
            AisMessage::MultiSlotBinary(m) => m.mmsi,
            AisMessage::LongRangePosition(m) => m.mmsi,
        }
    }

    /// The record's fields as (name, value, unit) triples for the
    /// serialization adapter. Optional fields carry their sentinel when
    /// unavailable, so the set is stable per message type. Nested payloads
    /// (applications, type 24 parts) appear as one structured value.
    pub fn fields(&self) -> Vec<Field> {
        let Value::Object(map) = self.record_value() else {
            return Vec::new();
        };
        let message_type = self.message_type();
        map.into_iter()
            .map(|(name, value)| Field {
                unit: field_unit(message_type, &name),
                name,
                value,
            })
            .collect()
    }

    fn record_value(&self) -> Value {
        let result = match self {
            AisMessage::PositionReport(m) => serde_json::to_value(m),
            AisMessage::BaseStationReport(m) => serde_json::to_value(m),
            AisMessage::StaticVoyageData(m) => serde_json::to_value(m),
            AisMessage::AddressedBinary(m) => serde_json::to_value(m),
            AisMessage::Acknowledge(m) => serde_json::to_value(m),
            AisMessage::BroadcastBinary(m) => serde_json::to_value(m),
            AisMessage::SarAircraftPosition(m) => serde_json::to_value(m),
            AisMessage::UtcInquiry(m) => serde_json::to_value(m),
            AisMessage::AddressedSafety(m) => serde_json::to_value(m),
            AisMessage::SafetyBroadcast(m) => serde_json::to_value(m),
            AisMessage::Interrogation(m) => serde_json::to_value(m),
            AisMessage::AssignmentCommand(m) => serde_json::to_value(m),
            AisMessage::DgnssBroadcast(m) => serde_json::to_value(m),
            AisMessage::ClassBPosition(m) => serde_json::to_value(m),
            AisMessage::ExtendedClassBPosition(m) => serde_json::to_value(m),
            AisMessage::DataLinkManagement(m) => serde_json::to_value(m),
            AisMessage::AidToNavigation(m) => serde_json::to_value(m),
            AisMessage::ChannelManagement(m) => serde_json::to_value(m),
            AisMessage::GroupAssignment(m) => serde_json::to_value(m),
            AisMessage::StaticDataReport(m) => serde_json::to_value(m),
            AisMessage::SingleSlotBinary(m) => serde_json::to_value(m),
            AisMessage::MultiSlotBinary(m) => serde_json::to_value(m),
            AisMessage::LongRangePosition(m) => serde_json::to_value(m),
        };
        result.unwrap_or(Value::Null)
    }
}

/// One (name, value, unit) triple of a decoded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: Value,
    /// Unit of the raw value, when the field has one.
    pub unit: Option<&'static str>,
}

// Units of the raw field values. A leading 0 matches any message type;
// specific entries override it (type 9 and 27 speeds are whole knots).
static FIELD_UNITS: &[(u8, &str, &str)] = &[
    (9, "speed", "kt"),
    (27, "speed", "kt"),
    (27, "course", "deg"),
    (27, "lon", "1/10 min"),
    (27, "lat", "1/10 min"),
    (17, "lon", "1/10 min"),
    (17, "lat", "1/10 min"),
    (0, "speed", "0.1 kt"),
    (0, "course", "0.1 deg"),
    (0, "heading", "deg"),
    (0, "turn", "ROT-AIS"),
    (0, "lon", "1/10000 min"),
    (0, "lat", "1/10000 min"),
    (0, "ne_lon", "1/10 min"),
    (0, "ne_lat", "1/10 min"),
    (0, "sw_lon", "1/10 min"),
    (0, "sw_lat", "1/10 min"),
    (0, "second", "s"),
    (0, "altitude", "m"),
    (0, "draught", "0.1 m"),
    (0, "to_bow", "m"),
    (0, "to_stern", "m"),
    (0, "to_port", "m"),
    (0, "to_starboard", "m"),
    (0, "zonesize", "nmi"),
    (0, "quiet", "min"),
];

/// Unit of a raw field value, when it has one.
pub fn field_unit(message_type: u8, field_name: &str) -> Option<&'static str> {
    FIELD_UNITS
        .iter()
        .find(|(selector, name, _)| *selector == message_type && *name == field_name)
        .or_else(|| {
            FIELD_UNITS
                .iter()
                .find(|(selector, name, _)| *selector == 0 && *name == field_name)
        })
        .map(|(_, _, unit)| *unit)
}

/// Longitude in degrees from a 1/10000 minute field; `None` at the
/// 181 degree sentinel.
pub(crate) fn lon_degrees(raw: i32) -> Option<f64> {
    if raw == AIS_LON_NOT_AVAILABLE {
        None
    } else {
        Some(f64::from(raw) / 600_000.0)
    }
}

/// Latitude in degrees from a 1/10000 minute field; `None` at the
/// 91 degree sentinel.
pub(crate) fn lat_degrees(raw: i32) -> Option<f64> {
    if raw == AIS_LAT_NOT_AVAILABLE {
        None
    } else {
        Some(f64::from(raw) / 600_000.0)
    }
}

/// Longitude in degrees from a 1/10 minute field; `None` at the sentinel.
pub(crate) fn lon3_degrees(raw: i32) -> Option<f64> {
    if raw == AIS_LON3_NOT_AVAILABLE {
        None
    } else {
        Some(f64::from(raw) / 600.0)
    }
}

/// Latitude in degrees from a 1/10 minute field; `None` at the sentinel.
pub(crate) fn lat3_degrees(raw: i32) -> Option<f64> {
    if raw == AIS_LAT3_NOT_AVAILABLE {
        None
    } else {
        Some(f64::from(raw) / 600.0)
    }
}
