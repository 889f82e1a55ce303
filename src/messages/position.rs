//! Position report decoders: types 1-3 (Class A), 9 (SAR aircraft),
//! 18/19 (Class B), and 27 (long-range broadcast).
//!
//! Records carry the raw on-air field values; scaling to degrees and knots
//! happens in the documented accessor methods so downstream consumers can
//! choose either form. Sentinel values are listed per field and come from
//! [`crate::constants`].

use crate::constants::*;
use crate::error::AisError;
use crate::messages::enums::{EpfdFixType, ManeuverIndicator, NavigationStatus};
use crate::messages::{lat3_degrees, lat_degrees, lon3_degrees, lon_degrees};
use crate::util::BitVec;
use serde::Serialize;

/// Rate of turn, decoded from the signed ROT-AIS field of types 1-3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RateOfTurn {
    /// Raw -128: no turn information available.
    NotAvailable,
    /// Raw -127: turning left faster than 5 deg per 30 s, no sensor.
    FasterLeft,
    /// Raw 127: turning right faster than 5 deg per 30 s, no sensor.
    FasterRight,
    /// Degrees per minute, negative to port.
    DegreesPerMinute(f64),
}

/// Class A position report, message types 1, 2 and 3 (168 bits).
///
/// Fields through `second` are mandatory; `maneuver`, `raim` and `radio`
/// substitute their sentinels when a truncated vector ends early.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    /// Message type actually received: 1, 2 or 3.
    pub message_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
    /// Navigational status; `NotDefined` (raw 15) when unavailable.
    pub status: NavigationStatus,
    /// Raw ROT-AIS value; -128 not available, +/-127 faster than the
    /// sensor range. See [`PositionReport::rate_of_turn`].
    pub turn: i8,
    /// Speed over ground in 0.1 knot units; 1023 not available, 1022 is
    /// 102.2 knots or faster.
    pub speed: u16,
    /// Position accuracy flag: true within 10 m (DGPS-grade fix).
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units, east positive;
    /// 181 deg means not available.
    pub lon: i32,
    /// Latitude in 1/10000 minute units, north positive;
    /// 91 deg means not available.
    pub lat: i32,
    /// Course over ground in 0.1 degree units; 3600 not available.
    pub course: u16,
    /// True heading in degrees; 511 not available.
    pub heading: u16,
    /// UTC second of the position fix; 60 not available, 61-63 are
    /// positioning-system special states.
    pub second: u8,
    /// Maneuver indicator; optional, raw 0 (not available) when absent.
    pub maneuver: ManeuverIndicator,
    /// RAIM flag; optional, false when absent.
    pub raim: bool,
    /// SOTDMA/ITDMA communication state, carried raw; optional.
    pub radio: u32,
}

impl PositionReport {
    /// Decodes a type 1, 2 or 3 payload.
    pub fn decode(bits: &BitVec, message_type: u8) -> Result<Self, AisError> {
        Ok(Self {
            message_type,
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            status: NavigationStatus::from_raw(bits.uint(38, 4)? as u8),
            turn: bits.int(42, 8)? as i8,
            speed: bits.uint(50, 10)? as u16,
            accuracy: bits.flag(60)?,
            lon: bits.int(61, 28)? as i32,
            lat: bits.int(89, 27)? as i32,
            course: bits.uint(116, 12)? as u16,
            heading: bits.uint(128, 9)? as u16,
            second: bits.uint(137, 6)? as u8,
            maneuver: ManeuverIndicator::from_raw(bits.uint_or(143, 2, 0) as u8),
            raim: bits.flag_or(148, false),
            radio: bits.uint_or(149, 19, 0) as u32,
        })
    }

    /// Longitude in degrees, east positive; `None` when not available.
    pub fn longitude(&self) -> Option<f64> {
        lon_degrees(self.lon)
    }

    /// Latitude in degrees, north positive; `None` when not available.
    pub fn latitude(&self) -> Option<f64> {
        lat_degrees(self.lat)
    }

    /// Speed over ground in knots; `None` when not available. 102.2 means
    /// "102.2 knots or faster".
    pub fn speed_knots(&self) -> Option<f64> {
        if self.speed == AIS_SPEED_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.speed) / 10.0)
        }
    }

    /// Course over ground in degrees; `None` when not available.
    pub fn course_degrees(&self) -> Option<f64> {
        if self.course >= AIS_COURSE_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.course) / 10.0)
        }
    }

    /// True heading in degrees; `None` when not available.
    pub fn heading_degrees(&self) -> Option<u16> {
        if self.heading == AIS_HEADING_NOT_AVAILABLE {
            None
        } else {
            Some(self.heading)
        }
    }

    /// Rate of turn. The encoded value is 4.733 times the square root of
    /// the rate in degrees per minute, so the decode squares it back.
    pub fn rate_of_turn(&self) -> RateOfTurn {
        match self.turn {
            AIS_TURN_NOT_AVAILABLE => RateOfTurn::NotAvailable,
            AIS_TURN_HARD_LEFT => RateOfTurn::FasterLeft,
            AIS_TURN_HARD_RIGHT => RateOfTurn::FasterRight,
            raw => {
                let root = f64::from(raw) / 4.733;
                let rate = root * root;
                RateOfTurn::DegreesPerMinute(if raw < 0 { -rate } else { rate })
            }
        }
    }
}

/// SAR aircraft position report, message type 9 (168 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SarAircraftPosition {
    pub repeat: u8,
    pub mmsi: u32,
    /// Altitude in metres; 4095 not available, 4094 is 4094 m or higher.
    pub altitude: u16,
    /// Speed over ground in 1 knot units (not 0.1); 1023 not available.
    pub speed: u16,
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units; 181 deg not available.
    pub lon: i32,
    /// Latitude in 1/10000 minute units; 91 deg not available.
    pub lat: i32,
    /// Course over ground in 0.1 degree units; 3600 not available.
    pub course: u16,
    /// UTC second; 60 not available.
    pub second: u8,
    /// Regional reserved bits; optional, 0 when absent.
    pub regional: u8,
    /// Data terminal ready flag (0 = ready); optional, true (not ready)
    /// when absent.
    pub dte: bool,
    /// Assigned-mode flag; optional, false when absent.
    pub assigned: bool,
    /// RAIM flag; optional, false when absent.
    pub raim: bool,
    /// Radio status word, carried raw; optional.
    pub radio: u32,
}

impl SarAircraftPosition {
    /// Decodes a type 9 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            altitude: bits.uint(38, 12)? as u16,
            speed: bits.uint(50, 10)? as u16,
            accuracy: bits.flag(60)?,
            lon: bits.int(61, 28)? as i32,
            lat: bits.int(89, 27)? as i32,
            course: bits.uint(116, 12)? as u16,
            second: bits.uint(128, 6)? as u8,
            regional: bits.uint_or(134, 8, 0) as u8,
            dte: bits.flag_or(142, true),
            assigned: bits.flag_or(146, false),
            raim: bits.flag_or(147, false),
            radio: bits.uint_or(148, 20, 0) as u32,
        })
    }

    /// Altitude in metres; `None` when not available.
    pub fn altitude_metres(&self) -> Option<u16> {
        if self.altitude == AIS_ALT_NOT_AVAILABLE {
            None
        } else {
            Some(self.altitude)
        }
    }

    /// Speed over ground in knots; `None` when not available.
    pub fn speed_knots(&self) -> Option<f64> {
        if self.speed == AIS_SAR_SPEED_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.speed))
        }
    }

    pub fn longitude(&self) -> Option<f64> {
        lon_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat_degrees(self.lat)
    }
}

/// Standard Class B position report, message type 18 (168 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassBPosition {
    pub repeat: u8,
    pub mmsi: u32,
    /// Regional reserved bits preceding the speed field.
    pub reserved: u8,
    /// Speed over ground in 0.1 knot units; 1023 not available.
    pub speed: u16,
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units; 181 deg not available.
    pub lon: i32,
    /// Latitude in 1/10000 minute units; 91 deg not available.
    pub lat: i32,
    /// Course over ground in 0.1 degree units; 3600 not available.
    pub course: u16,
    /// True heading in degrees; 511 not available.
    pub heading: u16,
    /// UTC second; 60 not available.
    pub second: u8,
    /// Regional reserved bits; optional, 0 when absent.
    pub regional: u8,
    /// Carrier-sense unit flag: true for CS (no transmit schedule).
    pub cs: bool,
    /// Display available flag.
    pub display: bool,
    /// DSC capability flag.
    pub dsc: bool,
    /// Whole-band capability flag.
    pub band: bool,
    /// Message 22 handling capability flag.
    pub msg22: bool,
    /// Assigned-mode flag.
    pub assigned: bool,
    /// RAIM flag; optional, false when absent.
    pub raim: bool,
    /// Radio status word, carried raw; optional.
    pub radio: u32,
}

impl ClassBPosition {
    /// Decodes a type 18 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            reserved: bits.uint(38, 8)? as u8,
            speed: bits.uint(46, 10)? as u16,
            accuracy: bits.flag(56)?,
            lon: bits.int(57, 28)? as i32,
            lat: bits.int(85, 27)? as i32,
            course: bits.uint(112, 12)? as u16,
            heading: bits.uint(124, 9)? as u16,
            second: bits.uint(133, 6)? as u8,
            regional: bits.uint_or(139, 2, 0) as u8,
            cs: bits.flag_or(141, false),
            display: bits.flag_or(142, false),
            dsc: bits.flag_or(143, false),
            band: bits.flag_or(144, false),
            msg22: bits.flag_or(145, false),
            assigned: bits.flag_or(146, false),
            raim: bits.flag_or(147, false),
            radio: bits.uint_or(148, 20, 0) as u32,
        })
    }

    pub fn longitude(&self) -> Option<f64> {
        lon_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat_degrees(self.lat)
    }

    /// Speed over ground in knots; `None` when not available.
    pub fn speed_knots(&self) -> Option<f64> {
        if self.speed == AIS_SPEED_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.speed) / 10.0)
        }
    }

    /// Course over ground in degrees; `None` when not available.
    pub fn course_degrees(&self) -> Option<f64> {
        if self.course >= AIS_COURSE_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.course) / 10.0)
        }
    }

    /// True heading in degrees; `None` when not available.
    pub fn heading_degrees(&self) -> Option<u16> {
        if self.heading == AIS_HEADING_NOT_AVAILABLE {
            None
        } else {
            Some(self.heading)
        }
    }
}

/// Extended Class B position report, message type 19 (312 bits).
///
/// Carries the Class B kinematics plus a static block; each report is
/// self-contained (no Part A/B split).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedClassBPosition {
    pub repeat: u8,
    pub mmsi: u32,
    pub reserved: u8,
    /// Speed over ground in 0.1 knot units; 1023 not available.
    pub speed: u16,
    pub accuracy: bool,
    /// Longitude in 1/10000 minute units; 181 deg not available.
    pub lon: i32,
    /// Latitude in 1/10000 minute units; 91 deg not available.
    pub lat: i32,
    /// Course over ground in 0.1 degree units; 3600 not available.
    pub course: u16,
    /// True heading in degrees; 511 not available.
    pub heading: u16,
    /// UTC second; 60 not available.
    pub second: u8,
    /// Regional reserved bits.
    pub regional: u8,
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
    /// RAIM flag; optional, false when absent.
    pub raim: bool,
    /// DTE flag; optional, true (not ready) when absent.
    pub dte: bool,
    /// Assigned-mode flag; optional, false when absent.
    pub assigned: bool,
}

impl ExtendedClassBPosition {
    /// Decodes a type 19 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            reserved: bits.uint(38, 8)? as u8,
            speed: bits.uint(46, 10)? as u16,
            accuracy: bits.flag(56)?,
            lon: bits.int(57, 28)? as i32,
            lat: bits.int(85, 27)? as i32,
            course: bits.uint(112, 12)? as u16,
            heading: bits.uint(124, 9)? as u16,
            second: bits.uint(133, 6)? as u8,
            regional: bits.uint(139, 4)? as u8,
            shipname: bits.string(143, 120)?,
            shiptype: bits.uint(263, 8)? as u8,
            to_bow: bits.uint(271, 9)? as u16,
            to_stern: bits.uint(280, 9)? as u16,
            to_port: bits.uint(289, 6)? as u8,
            to_starboard: bits.uint(295, 6)? as u8,
            epfd: EpfdFixType::from_raw(bits.uint(301, 4)? as u8),
            raim: bits.flag_or(305, false),
            dte: bits.flag_or(306, true),
            assigned: bits.flag_or(307, false),
        })
    }

    pub fn longitude(&self) -> Option<f64> {
        lon_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat_degrees(self.lat)
    }

    /// Speed over ground in knots; `None` when not available.
    pub fn speed_knots(&self) -> Option<f64> {
        if self.speed == AIS_SPEED_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.speed) / 10.0)
        }
    }
}

/// Long-range AIS broadcast, message type 27 (96 bits).
///
/// Position resolution is 1/10 minute, far coarser than types 1-3; all
/// fields are mandatory in this fixed-size layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRangePosition {
    pub repeat: u8,
    pub mmsi: u32,
    pub accuracy: bool,
    pub raim: bool,
    pub status: NavigationStatus,
    /// Longitude in 1/10 minute units; 181 deg not available.
    pub lon: i32,
    /// Latitude in 1/10 minute units; 91 deg not available.
    pub lat: i32,
    /// Speed over ground in 1 knot units; 63 not available.
    pub speed: u8,
    /// Course over ground in 1 degree units; 511 not available.
    pub course: u16,
    /// True when the position is a current GNSS fix rather than dead
    /// reckoning (the on-air bit is inverted).
    pub gnss: bool,
}

impl LongRangePosition {
    /// Decodes a type 27 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            accuracy: bits.flag(38)?,
            raim: bits.flag(39)?,
            status: NavigationStatus::from_raw(bits.uint(40, 4)? as u8),
            lon: bits.int(44, 18)? as i32,
            lat: bits.int(62, 17)? as i32,
            speed: bits.uint(79, 6)? as u8,
            course: bits.uint(85, 9)? as u16,
            gnss: !bits.flag(94)?,
        })
    }

    pub fn longitude(&self) -> Option<f64> {
        lon3_degrees(self.lon)
    }

    pub fn latitude(&self) -> Option<f64> {
        lat3_degrees(self.lat)
    }

    /// Speed over ground in knots; `None` when not available.
    pub fn speed_knots(&self) -> Option<f64> {
        if self.speed == AIS_LONGRANGE_SPEED_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.speed))
        }
    }

    /// Course over ground in degrees; `None` when not available.
    pub fn course_degrees(&self) -> Option<u16> {
        if self.course == AIS_LONGRANGE_COURSE_NOT_AVAILABLE {
            None
        } else {
            Some(self.course)
        }
    }
}
