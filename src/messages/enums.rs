//! Field enumerations shared by the message decoders.
//!
//! Small enumerated fields become real enums with a `from_raw` conversion
//! that never fails (reserved and out-of-range values map to their defined
//! catch-all member). Wide code spaces (ship type, aid type) stay numeric in
//! the records, with display legends looked up from static tables.

use serde::Serialize;

/// Navigational status (types 1-3, 27), 4-bit field.
///
/// Value 15 is the defined "not defined" default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationStatus {
    UnderWayUsingEngine,
    AtAnchor,
    NotUnderCommand,
    RestrictedManeuverability,
    ConstrainedByDraught,
    Moored,
    Aground,
    EngagedInFishing,
    UnderWaySailing,
    ReservedHsc,
    ReservedWig,
    Reserved(u8),
    AisSartActive,
    NotDefined,
}

impl NavigationStatus {
    /// Maps the raw 4-bit value; reserved codes keep their raw value.
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => NavigationStatus::UnderWayUsingEngine,
            1 => NavigationStatus::AtAnchor,
            2 => NavigationStatus::NotUnderCommand,
            3 => NavigationStatus::RestrictedManeuverability,
            4 => NavigationStatus::ConstrainedByDraught,
            5 => NavigationStatus::Moored,
            6 => NavigationStatus::Aground,
            7 => NavigationStatus::EngagedInFishing,
            8 => NavigationStatus::UnderWaySailing,
            9 => NavigationStatus::ReservedHsc,
            10 => NavigationStatus::ReservedWig,
            14 => NavigationStatus::AisSartActive,
            15 => NavigationStatus::NotDefined,
            other => NavigationStatus::Reserved(other),
        }
    }

    /// Display legend matching the wording receivers print.
    pub fn label(&self) -> &'static str {
        match self {
            NavigationStatus::UnderWayUsingEngine => "Under way using engine",
            NavigationStatus::AtAnchor => "At anchor",
            NavigationStatus::NotUnderCommand => "Not under command",
            NavigationStatus::RestrictedManeuverability => "Restricted manoeuverability",
            NavigationStatus::ConstrainedByDraught => "Constrained by her draught",
            NavigationStatus::Moored => "Moored",
            NavigationStatus::Aground => "Aground",
            NavigationStatus::EngagedInFishing => "Engaged in fishing",
            NavigationStatus::UnderWaySailing => "Under way sailing",
            NavigationStatus::ReservedHsc => "Reserved for HSC",
            NavigationStatus::ReservedWig => "Reserved for WIG",
            NavigationStatus::Reserved(_) => "Reserved",
            NavigationStatus::AisSartActive => "AIS-SART is active",
            NavigationStatus::NotDefined => "Not defined",
        }
    }
}

/// Maneuver indicator (types 1-3), 2-bit field; 0 means "not available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ManeuverIndicator {
    NotAvailable,
    NoSpecialManeuver,
    SpecialManeuver,
    Reserved,
}

impl ManeuverIndicator {
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => ManeuverIndicator::NotAvailable,
            1 => ManeuverIndicator::NoSpecialManeuver,
            2 => ManeuverIndicator::SpecialManeuver,
            _ => ManeuverIndicator::Reserved,
        }
    }
}

/// Electronic position fixing device type, 4-bit field; 0 is "undefined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EpfdFixType {
    Undefined,
    Gps,
    Glonass,
    CombinedGpsGlonass,
    LoranC,
    Chayka,
    IntegratedNavigationSystem,
    Surveyed,
    Galileo,
    Reserved(u8),
}

impl EpfdFixType {
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => EpfdFixType::Undefined,
            1 => EpfdFixType::Gps,
            2 => EpfdFixType::Glonass,
            3 => EpfdFixType::CombinedGpsGlonass,
            4 => EpfdFixType::LoranC,
            5 => EpfdFixType::Chayka,
            6 => EpfdFixType::IntegratedNavigationSystem,
            7 => EpfdFixType::Surveyed,
            8 => EpfdFixType::Galileo,
            other => EpfdFixType::Reserved(other),
        }
    }
}

/// Static data report part selector (type 24).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PartNumber {
    A,
    B,
}

// Ship type legends, codes 0-99. Codes 100+ read as "INVALID SHIP TYPE".
static SHIP_TYPE_LEGENDS: [&str; 100] = [
    "Not available",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Wing in ground (WIG) - all ships of this type",
    "Wing in ground (WIG) - Hazardous category A",
    "Wing in ground (WIG) - Hazardous category B",
    "Wing in ground (WIG) - Hazardous category C",
    "Wing in ground (WIG) - Hazardous category D",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Wing in ground (WIG) - Reserved for future use",
    "Fishing",
    "Towing",
    "Towing: length exceeds 200m or breadth exceeds 25m",
    "Dredging or underwater ops",
    "Diving ops",
    "Military ops",
    "Sailing",
    "Pleasure Craft",
    "Reserved",
    "Reserved",
    "High speed craft (HSC) - all ships of this type",
    "High speed craft (HSC) - Hazardous category A",
    "High speed craft (HSC) - Hazardous category B",
    "High speed craft (HSC) - Hazardous category C",
    "High speed craft (HSC) - Hazardous category D",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - Reserved for future use",
    "High speed craft (HSC) - No additional information",
    "Pilot Vessel",
    "Search and Rescue vessel",
    "Tug",
    "Port Tender",
    "Anti-pollution equipment",
    "Law Enforcement",
    "Spare - Local Vessel",
    "Spare - Local Vessel",
    "Medical Transport",
    "Ship according to RR Resolution No. 18",
    "Passenger - all ships of this type",
    "Passenger - Hazardous category A",
    "Passenger - Hazardous category B",
    "Passenger - Hazardous category C",
    "Passenger - Hazardous category D",
    "Passenger - Reserved for future use",
    "Passenger - Reserved for future use",
    "Passenger - Reserved for future use",
    "Passenger - Reserved for future use",
    "Passenger - No additional information",
    "Cargo - all ships of this type",
    "Cargo - Hazardous category A",
    "Cargo - Hazardous category B",
    "Cargo - Hazardous category C",
    "Cargo - Hazardous category D",
    "Cargo - Reserved for future use",
    "Cargo - Reserved for future use",
    "Cargo - Reserved for future use",
    "Cargo - Reserved for future use",
    "Cargo - No additional information",
    "Tanker - all ships of this type",
    "Tanker - Hazardous category A",
    "Tanker - Hazardous category B",
    "Tanker - Hazardous category C",
    "Tanker - Hazardous category D",
    "Tanker - Reserved for future use",
    "Tanker - Reserved for future use",
    "Tanker - Reserved for future use",
    "Tanker - Reserved for future use",
    "Tanker - No additional information",
    "Other Type - all ships of this type",
    "Other Type - Hazardous category A",
    "Other Type - Hazardous category B",
    "Other Type - Hazardous category C",
    "Other Type - Hazardous category D",
    "Other Type - Reserved for future use",
    "Other Type - Reserved for future use",
    "Other Type - Reserved for future use",
    "Other Type - Reserved for future use",
    "Other Type - no additional information",
];

/// Display legend for an 8-bit ship/cargo type code.
pub fn ship_type_label(code: u8) -> &'static str {
    SHIP_TYPE_LEGENDS
        .get(code as usize)
        .copied()
        .unwrap_or("INVALID SHIP TYPE")
}

// Aid-to-navigation type legends, codes 0-31 (type 21).
static NAVAID_TYPE_LEGENDS: [&str; 32] = [
    "Unspecified",
    "Reference point",
    "RACON",
    "Fixed offshore structure",
    "Spare, Reserved for future use.",
    "Light, without sectors",
    "Light, with sectors",
    "Leading Light Front",
    "Leading Light Rear",
    "Beacon, Cardinal N",
    "Beacon, Cardinal E",
    "Beacon, Cardinal S",
    "Beacon, Cardinal W",
    "Beacon, Port hand",
    "Beacon, Starboard hand",
    "Beacon, Preferred Channel port hand",
    "Beacon, Preferred Channel starboard hand",
    "Beacon, Isolated danger",
    "Beacon, Safe water",
    "Beacon, Special mark",
    "Cardinal Mark N",
    "Cardinal Mark E",
    "Cardinal Mark S",
    "Cardinal Mark W",
    "Port hand Mark",
    "Starboard hand Mark",
    "Preferred Channel Port hand",
    "Preferred Channel Starboard hand",
    "Isolated danger",
    "Safe Water",
    "Special Mark",
    "Light Vessel / LANBY / Rigs",
];

/// Display legend for a 5-bit aid-to-navigation type code.
pub fn navaid_type_label(code: u8) -> &'static str {
    NAVAID_TYPE_LEGENDS
        .get(code as usize)
        .copied()
        .unwrap_or("INVALID NAVAID TYPE")
}

// Station type legends, codes 0-15 (type 23).
static STATION_TYPE_LEGENDS: [&str; 16] = [
    "All types of mobiles",
    "Reserved for future use",
    "All types of Class B mobile stations",
    "SAR airborne mobile station",
    "Aid to Navigation station",
    "Class B shipborne mobile station",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Regional use and inland waterways",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
    "Reserved for future use",
];

/// Display legend for a 4-bit station type code.
pub fn station_type_label(code: u8) -> &'static str {
    STATION_TYPE_LEGENDS
        .get(code as usize)
        .copied()
        .unwrap_or("INVALID STATION TYPE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_status_round_trip() {
        assert_eq!(NavigationStatus::from_raw(0), NavigationStatus::UnderWayUsingEngine);
        assert_eq!(NavigationStatus::from_raw(5), NavigationStatus::Moored);
        assert_eq!(NavigationStatus::from_raw(11), NavigationStatus::Reserved(11));
        assert_eq!(NavigationStatus::from_raw(15), NavigationStatus::NotDefined);
        assert_eq!(NavigationStatus::from_raw(15).label(), "Not defined");
    }

    #[test]
    fn test_ship_type_labels() {
        assert_eq!(ship_type_label(0), "Not available");
        assert_eq!(ship_type_label(30), "Fishing");
        assert_eq!(ship_type_label(60), "Passenger - all ships of this type");
        assert_eq!(ship_type_label(99), "Other Type - no additional information");
        assert_eq!(ship_type_label(100), "INVALID SHIP TYPE");
    }

    #[test]
    fn test_epfd_reserved_codes() {
        assert_eq!(EpfdFixType::from_raw(1), EpfdFixType::Gps);
        assert_eq!(EpfdFixType::from_raw(15), EpfdFixType::Reserved(15));
    }
}
