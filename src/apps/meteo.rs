//! IMO236 meteorological/hydrological data, DAC 1 FID 11.
//!
//! Broadcast by shore stations with type 8. Offsets below are relative to
//! the application payload, which begins after the 56-bit type 8 header.
//! Raw field values are kept; the scaling accessors document offsets and
//! divisors.

use crate::error::AisError;
use crate::util::BitVec;
use serde::Serialize;

/// Meteorological and hydrological observation (290 payload bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeteoHydro {
    /// Observation latitude in 1/1000 minute units; 0x7FFFFF not available.
    /// Latitude precedes longitude in this layout, unlike the kinematic
    /// messages.
    pub lat: i32,
    /// Observation longitude in 1/1000 minute units; 0xFFFFFF not available.
    pub lon: i32,
    /// UTC day of month 1-31; 0 not available.
    pub day: u8,
    /// UTC hour 0-23; 24 not available.
    pub hour: u8,
    /// UTC minute 0-59; 60 not available.
    pub minute: u8,
    /// Average wind speed in knots; 127 not available.
    pub wspeed: u8,
    /// Wind gust speed in knots; 127 not available.
    pub wgust: u8,
    /// Wind direction in degrees; 511 not available.
    pub wdir: u16,
    /// Wind gust direction in degrees; 511 not available.
    pub wgustdir: u16,
    /// Air temperature in 0.1 C units offset by -60.0 C; see
    /// [`MeteoHydro::air_temp_celsius`].
    pub airtemp: u16,
    /// Relative humidity in percent; 127 not available.
    pub humidity: u8,
    /// Dew point in 0.1 C units offset by -20.0 C.
    pub dewpoint: u16,
    /// Air pressure in hPa offset by 800.
    pub pressure: u16,
    /// Pressure tendency: 0 steady, 1 decreasing, 2 increasing.
    pub pressuretend: u8,
    /// Horizontal visibility in 0.1 nautical mile units.
    pub visibility: u8,
    /// Water level in 0.1 m units offset by -10.0 m.
    pub waterlevel: u16,
    /// Water level trend: 0 steady, 1 decreasing, 2 increasing.
    pub leveltrend: u8,
    /// Surface current speed in 0.1 knot units.
    pub cspeed: u8,
    /// Surface current direction in degrees; 511 not available.
    pub cdir: u16,
    /// Second current speed in 0.1 knot units.
    pub cspeed2: u8,
    /// Second current direction in degrees.
    pub cdir2: u16,
    /// Second current measurement depth in metres.
    pub cdepth2: u8,
    /// Third current speed in 0.1 knot units.
    pub cspeed3: u8,
    /// Third current direction in degrees.
    pub cdir3: u16,
    /// Third current measurement depth in metres.
    pub cdepth3: u8,
    /// Significant wave height in 0.1 m units.
    pub waveheight: u8,
    /// Wave period in seconds; 63 not available.
    pub waveperiod: u8,
    /// Wave direction in degrees; 511 not available.
    pub wavedir: u16,
    /// Swell height in 0.1 m units.
    pub swellheight: u8,
    /// Swell period in seconds; 63 not available.
    pub swellperiod: u8,
    /// Swell direction in degrees; 511 not available.
    pub swelldir: u16,
    /// Sea state on the Beaufort scale; 13 not available.
    pub seastate: u8,
    /// Water temperature in 0.1 C units offset by -10.0 C.
    pub watertemp: u16,
    /// Precipitation type code; 7 not available.
    pub preciptype: u8,
    /// Salinity in 0.1 percent units.
    pub salinity: u16,
    /// Ice code: 0 no, 1 yes, 3 not available.
    pub ice: u8,
}

/// Latitude "not available" in 1/1000 minute observation fields.
pub const METEO_LAT_NOT_AVAILABLE: i32 = 0x7FFFFF;

/// Longitude "not available" in 1/1000 minute observation fields.
pub const METEO_LON_NOT_AVAILABLE: i32 = 0xFFFFFF;

impl MeteoHydro {
    /// Decodes a DAC 1 FID 11 application payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            lat: bits.int(0, 24)? as i32,
            lon: bits.int(24, 25)? as i32,
            day: bits.uint(49, 5)? as u8,
            hour: bits.uint(54, 5)? as u8,
            minute: bits.uint(59, 6)? as u8,
            wspeed: bits.uint(65, 7)? as u8,
            wgust: bits.uint(72, 7)? as u8,
            wdir: bits.uint(79, 9)? as u16,
            wgustdir: bits.uint(88, 9)? as u16,
            airtemp: bits.uint(97, 11)? as u16,
            humidity: bits.uint(108, 7)? as u8,
            dewpoint: bits.uint(115, 10)? as u16,
            pressure: bits.uint(125, 9)? as u16,
            pressuretend: bits.uint(134, 2)? as u8,
            visibility: bits.uint(136, 8)? as u8,
            waterlevel: bits.uint(144, 9)? as u16,
            leveltrend: bits.uint(153, 2)? as u8,
            cspeed: bits.uint(155, 8)? as u8,
            cdir: bits.uint(163, 9)? as u16,
            cspeed2: bits.uint(172, 8)? as u8,
            cdir2: bits.uint(180, 9)? as u16,
            cdepth2: bits.uint(189, 5)? as u8,
            cspeed3: bits.uint(194, 8)? as u8,
            cdir3: bits.uint(202, 9)? as u16,
            cdepth3: bits.uint(211, 5)? as u8,
            waveheight: bits.uint(216, 8)? as u8,
            waveperiod: bits.uint(224, 6)? as u8,
            wavedir: bits.uint(230, 9)? as u16,
            swellheight: bits.uint(239, 8)? as u8,
            swellperiod: bits.uint(247, 6)? as u8,
            swelldir: bits.uint(253, 9)? as u16,
            seastate: bits.uint(262, 4)? as u8,
            watertemp: bits.uint(266, 10)? as u16,
            preciptype: bits.uint(276, 3)? as u8,
            salinity: bits.uint(279, 9)? as u16,
            ice: bits.uint(288, 2)? as u8,
        })
    }

    /// Observation latitude in degrees; `None` when not available.
    pub fn latitude(&self) -> Option<f64> {
        if self.lat == METEO_LAT_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.lat) / 60_000.0)
        }
    }

    /// Observation longitude in degrees; `None` when not available.
    pub fn longitude(&self) -> Option<f64> {
        if self.lon == METEO_LON_NOT_AVAILABLE {
            None
        } else {
            Some(f64::from(self.lon) / 60_000.0)
        }
    }

    /// Air temperature in degrees Celsius (raw 0.1 C steps from -60.0).
    pub fn air_temp_celsius(&self) -> f64 {
        (f64::from(self.airtemp) - 600.0) / 10.0
    }

    /// Dew point in degrees Celsius (raw 0.1 C steps from -20.0).
    pub fn dew_point_celsius(&self) -> f64 {
        (f64::from(self.dewpoint) - 200.0) / 10.0
    }

    /// Air pressure in hPa (raw steps from 800).
    pub fn pressure_hpa(&self) -> u16 {
        self.pressure + 800
    }

    /// Water level in metres (raw 0.1 m steps from -10.0).
    pub fn water_level_metres(&self) -> f64 {
        (f64::from(self.waterlevel) - 100.0) / 10.0
    }

    /// Water temperature in degrees Celsius (raw 0.1 C steps from -10.0).
    pub fn water_temp_celsius(&self) -> f64 {
        (f64::from(self.watertemp) - 100.0) / 10.0
    }
}
