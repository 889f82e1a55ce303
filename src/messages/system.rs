//! Link management and control messages: types 15, 16, 17, 20, 22 and 23.

use crate::error::AisError;
use crate::messages::{lat3_degrees, lon3_degrees};
use crate::util::BitVec;
use serde::Serialize;

/// One interrogation slot: ask `mmsi` to transmit `message_type` at
/// `slot_offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterrogationRequest {
    pub mmsi: u32,
    pub message_type: u8,
    pub slot_offset: u16,
}

/// Interrogation, type 15 (88 to 160 bits).
///
/// One station may be asked for up to two message types, and a second
/// station for one more; presence follows the message length, with all-zero
/// padding slots dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interrogation {
    pub repeat: u8,
    pub mmsi: u32,
    /// Requested transmissions in slot order; the first entry is mandatory.
    pub requests: Vec<InterrogationRequest>,
}

impl Interrogation {
    /// Decodes a type 15 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let first_mmsi = bits.uint(40, 30)? as u32;
        let mut requests = vec![InterrogationRequest {
            mmsi: first_mmsi,
            message_type: bits.uint(70, 6)? as u8,
            slot_offset: bits.uint(76, 12)? as u16,
        }];

        if bits.len() >= 108 {
            let message_type = bits.uint(90, 6)? as u8;
            let slot_offset = bits.uint(96, 12)? as u16;
            if message_type != 0 || slot_offset != 0 {
                requests.push(InterrogationRequest {
                    mmsi: first_mmsi,
                    message_type,
                    slot_offset,
                });
            }
        }
        if bits.len() >= 158 {
            let second_mmsi = bits.uint(110, 30)? as u32;
            if second_mmsi != 0 {
                requests.push(InterrogationRequest {
                    mmsi: second_mmsi,
                    message_type: bits.uint(140, 6)? as u8,
                    slot_offset: bits.uint(146, 12)? as u16,
                });
            }
        }
        Ok(Self {
            repeat,
            mmsi,
            requests,
        })
    }
}

/// One assignment slot of a type 16 command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub mmsi: u32,
    /// First transmission slot offset.
    pub offset: u16,
    /// Slot increment between transmissions.
    pub increment: u16,
}

/// Assignment mode command, type 16 (96 or 144 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentCommand {
    pub repeat: u8,
    pub mmsi: u32,
    /// One station for the short form, two for the long form.
    pub assignments: Vec<Assignment>,
}

impl AssignmentCommand {
    /// Decodes a type 16 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let mut assignments = vec![Assignment {
            mmsi: bits.uint(40, 30)? as u32,
            offset: bits.uint(70, 12)? as u16,
            increment: bits.uint(82, 10)? as u16,
        }];
        if bits.len() >= 144 {
            assignments.push(Assignment {
                mmsi: bits.uint(92, 30)? as u32,
                offset: bits.uint(122, 12)? as u16,
                increment: bits.uint(134, 10)? as u16,
            });
        }
        Ok(Self {
            repeat,
            mmsi,
            assignments,
        })
    }
}

/// DGNSS broadcast binary message, type 17 (80 to 816 bits).
///
/// The differential correction words stay raw; interpreting RTCM2 is a
/// different protocol's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DgnssBroadcast {
    pub repeat: u8,
    pub mmsi: u32,
    /// Reference station longitude in 1/10 minute units; 181 deg not
    /// available.
    pub lon: i32,
    /// Reference station latitude in 1/10 minute units; 91 deg not
    /// available.
    pub lat: i32,
    /// Raw correction data bits.
    pub data: BitVec,
}

impl DgnssBroadcast {
    /// Decodes a type 17 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            lon: bits.int(40, 18)? as i32,
            lat: bits.int(58, 17)? as i32,
            data: bits.tail(80),
        })
    }

    pub fn longitude(&self) -> Option<f64> {
        lon3_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat3_degrees(self.lat)
    }
}

/// One reserved slot block of a type 20 message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReservationBlock {
    /// Reserved offset number.
    pub offset: u16,
    /// Number of reserved consecutive slots.
    pub number: u8,
    /// Reservation timeout in minutes.
    pub timeout: u8,
    /// Slot increment for repeated reservations.
    pub increment: u16,
}

/// Data link management message, type 20 (72 to 160 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataLinkManagement {
    pub repeat: u8,
    pub mmsi: u32,
    /// Up to four reservation blocks; all-zero padding blocks dropped.
    pub blocks: Vec<ReservationBlock>,
}

impl DataLinkManagement {
    /// Decodes a type 20 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let mut blocks = Vec::new();
        let mut start = 40;
        while blocks.len() < 4 && start + 30 <= bits.len() {
            let block = ReservationBlock {
                offset: bits.uint(start, 12)? as u16,
                number: bits.uint(start + 12, 4)? as u8,
                timeout: bits.uint(start + 16, 3)? as u8,
                increment: bits.uint(start + 19, 11)? as u16,
            };
            if block.offset != 0 || block.number != 0 {
                blocks.push(block);
            }
            start += 30;
        }
        if blocks.is_empty() {
            return Err(AisError::TruncatedMessage {
                start: 40,
                length: 30,
                available: bits.len(),
            });
        }
        Ok(Self {
            repeat,
            mmsi,
            blocks,
        })
    }
}

/// Whom a type 22 channel assignment applies to: a broadcast coverage
/// rectangle, or two explicitly addressed stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ChannelTarget {
    Area {
        /// North-east corner longitude, 1/10 minute units.
        ne_lon: i32,
        /// North-east corner latitude, 1/10 minute units.
        ne_lat: i32,
        /// South-west corner longitude, 1/10 minute units.
        sw_lon: i32,
        /// South-west corner latitude, 1/10 minute units.
        sw_lat: i32,
    },
    Stations { dest1: u32, dest2: u32 },
}

/// Channel management message, type 22 (168 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelManagement {
    pub repeat: u8,
    pub mmsi: u32,
    /// Channel A number per ITU-R M.1084.
    pub channel_a: u16,
    /// Channel B number per ITU-R M.1084.
    pub channel_b: u16,
    /// Transmit/receive mode code.
    pub txrx: u8,
    /// True for high power.
    pub power: bool,
    pub target: ChannelTarget,
    /// Channel A bandwidth flag.
    pub band_a: bool,
    /// Channel B bandwidth flag.
    pub band_b: bool,
    /// Transitional zone size in nautical miles, offset by one.
    pub zonesize: u8,
}

impl ChannelManagement {
    /// Decodes a type 22 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let addressed = bits.flag(139)?;
        let target = if addressed {
            ChannelTarget::Stations {
                dest1: bits.uint(69, 30)? as u32,
                dest2: bits.uint(104, 30)? as u32,
            }
        } else {
            ChannelTarget::Area {
                ne_lon: bits.int(69, 18)? as i32,
                ne_lat: bits.int(87, 17)? as i32,
                sw_lon: bits.int(104, 18)? as i32,
                sw_lat: bits.int(122, 17)? as i32,
            }
        };
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            channel_a: bits.uint(40, 12)? as u16,
            channel_b: bits.uint(52, 12)? as u16,
            txrx: bits.uint(64, 4)? as u8,
            power: bits.flag(68)?,
            target,
            band_a: bits.flag(140)?,
            band_b: bits.flag(141)?,
            zonesize: bits.uint(142, 3)? as u8,
        })
    }
}

/// Group assignment command, type 23 (160 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAssignment {
    pub repeat: u8,
    pub mmsi: u32,
    /// North-east corner longitude, 1/10 minute units.
    pub ne_lon: i32,
    /// North-east corner latitude, 1/10 minute units.
    pub ne_lat: i32,
    /// South-west corner longitude, 1/10 minute units.
    pub sw_lon: i32,
    /// South-west corner latitude, 1/10 minute units.
    pub sw_lat: i32,
    /// Station type selector; see
    /// [`crate::messages::enums::station_type_label`].
    pub station_type: u8,
    /// Ship/cargo type selector.
    pub ship_type: u8,
    /// Transmit/receive mode directive.
    pub txrx: u8,
    /// Reporting interval code.
    pub interval: u8,
    /// Quiet time in minutes; 0 means none commanded.
    pub quiet: u8,
}

impl GroupAssignment {
    /// Decodes a type 23 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            ne_lon: bits.int(40, 18)? as i32,
            ne_lat: bits.int(58, 17)? as i32,
            sw_lon: bits.int(75, 18)? as i32,
            sw_lat: bits.int(93, 17)? as i32,
            station_type: bits.uint(110, 4)? as u8,
            ship_type: bits.uint(114, 8)? as u8,
            txrx: bits.uint(144, 2)? as u8,
            interval: bits.uint(146, 4)? as u8,
            quiet: bits.uint(150, 4)? as u8,
        })
    }
}
