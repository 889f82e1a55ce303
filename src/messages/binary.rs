//! Binary application messages: types 6, 8, 25 and 26.
//!
//! Types 6 and 8 carry a DAC/FID pair that selects an application payload
//! decoder from [`crate::apps`]. A combination without a decoder never
//! fails the message: the record keeps the header fields and the raw
//! payload bits. Types 25 and 26 are slot-efficient variants whose payload
//! stays raw even when the structured flag carries an application id.

use crate::apps::{self, Application};
use crate::error::AisError;
use crate::util::BitVec;
use serde::Serialize;

/// Addressed binary message, type 6 (up to 1008 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressedBinary {
    pub repeat: u8,
    pub mmsi: u32,
    /// Sequence number for the type 7 acknowledgement.
    pub seqno: u8,
    pub dest_mmsi: u32,
    /// True when this is a retransmission.
    pub retransmit: bool,
    /// Designated area code of the application payload.
    pub dac: u16,
    /// Function identifier within the DAC's range.
    pub fid: u8,
    /// Decoded application payload, or the raw bits when unrecognized.
    pub app: Application,
}

impl AddressedBinary {
    /// Decodes a type 6 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let dac = bits.uint(72, 10)? as u16;
        let fid = bits.uint(82, 6)? as u8;
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            seqno: bits.uint(38, 2)? as u8,
            dest_mmsi: bits.uint(40, 30)? as u32,
            retransmit: bits.flag(70)?,
            dac,
            fid,
            app: apps::decode_or_opaque(dac, fid, bits.tail(88)),
        })
    }
}

/// Broadcast binary message, type 8 (up to 1008 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BroadcastBinary {
    pub repeat: u8,
    pub mmsi: u32,
    /// Designated area code of the application payload.
    pub dac: u16,
    /// Function identifier within the DAC's range.
    pub fid: u8,
    /// Decoded application payload, or the raw bits when unrecognized.
    pub app: Application,
}

impl BroadcastBinary {
    /// Decodes a type 8 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let dac = bits.uint(40, 10)? as u16;
        let fid = bits.uint(50, 6)? as u8;
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            dac,
            fid,
            app: apps::decode_or_opaque(dac, fid, bits.tail(56)),
        })
    }
}

/// Single slot binary message, type 25 (up to 168 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleSlotBinary {
    pub repeat: u8,
    pub mmsi: u32,
    /// True when directed at `dest_mmsi` rather than broadcast.
    pub addressed: bool,
    /// True when the payload opens with a 16-bit application id.
    pub structured: bool,
    pub dest_mmsi: Option<u32>,
    /// Application id (DAC high 10 bits, FID low 6) when structured.
    pub app_id: Option<u16>,
    /// Raw payload bits after the header.
    pub data: BitVec,
}

impl SingleSlotBinary {
    /// Decodes a type 25 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let addressed = bits.flag(38)?;
        let structured = bits.flag(39)?;
        let mut offset = 40;
        let dest_mmsi = if addressed {
            let value = bits.uint(offset, 30)? as u32;
            offset += 30;
            Some(value)
        } else {
            None
        };
        let app_id = if structured {
            let value = bits.uint(offset, 16)? as u16;
            offset += 16;
            Some(value)
        } else {
            None
        };
        Ok(Self {
            repeat,
            mmsi,
            addressed,
            structured,
            dest_mmsi,
            app_id,
            data: bits.tail(offset),
        })
    }
}

/// Multiple slot binary message with communication state, type 26.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSlotBinary {
    pub repeat: u8,
    pub mmsi: u32,
    /// True when directed at `dest_mmsi` rather than broadcast.
    pub addressed: bool,
    /// True when the payload opens with a 16-bit application id.
    pub structured: bool,
    pub dest_mmsi: Option<u32>,
    /// Application id (DAC high 10 bits, FID low 6) when structured.
    pub app_id: Option<u16>,
    /// Raw payload bits between the header and the radio status word.
    pub data: BitVec,
    /// Communication state from the final 20 bits, carried raw.
    pub radio: u32,
}

impl MultiSlotBinary {
    /// Decodes a type 26 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let addressed = bits.flag(38)?;
        let structured = bits.flag(39)?;
        let mut offset = 40;
        let dest_mmsi = if addressed {
            let value = bits.uint(offset, 30)? as u32;
            offset += 30;
            Some(value)
        } else {
            None
        };
        let app_id = if structured {
            let value = bits.uint(offset, 16)? as u16;
            offset += 16;
            Some(value)
        } else {
            None
        };
        // The communication state occupies the final 20 bits.
        let radio_start = bits.len().checked_sub(20).filter(|start| *start >= offset).ok_or(
            AisError::TruncatedMessage {
                start: offset,
                length: 20,
                available: bits.len(),
            },
        )?;
        Ok(Self {
            repeat,
            mmsi,
            addressed,
            structured,
            dest_mmsi,
            app_id,
            data: bits.slice(offset, radio_start - offset),
            radio: bits.uint(radio_start, 20)? as u32,
        })
    }
}
