//! Safety related text messages and acknowledgements: types 7/13, 12, 14.

use crate::error::AisError;
use crate::util::BitVec;
use serde::Serialize;

/// One acknowledged message: destination plus the sequence number being
/// confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub mmsi: u32,
    pub sequence: u8,
}

/// Binary acknowledge (type 7) and safety acknowledge (type 13), which
/// share one layout: 1 to 4 acknowledgements selected by message length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Acknowledge {
    /// Message type actually received: 7 or 13.
    pub message_type: u8,
    pub repeat: u8,
    pub mmsi: u32,
    /// Acknowledged destinations in slot order; never empty.
    pub acks: Vec<Acknowledgement>,
}

impl Acknowledge {
    /// Decodes a type 7 or 13 payload. The number of acknowledgement slots
    /// is however many whole 32-bit entries the payload carries.
    pub fn decode(bits: &BitVec, message_type: u8) -> Result<Self, AisError> {
        let repeat = bits.uint(6, 2)? as u8;
        let mmsi = bits.uint(8, 30)? as u32;
        let mut acks = Vec::new();
        let mut offset = 40;
        while acks.len() < 4 && offset + 32 <= bits.len() {
            acks.push(Acknowledgement {
                mmsi: bits.uint(offset, 30)? as u32,
                sequence: bits.uint(offset + 30, 2)? as u8,
            });
            offset += 32;
        }
        if acks.is_empty() {
            // The first slot is what makes the message an acknowledgement.
            return Err(AisError::TruncatedMessage {
                start: 40,
                length: 32,
                available: bits.len(),
            });
        }
        Ok(Self {
            message_type,
            repeat,
            mmsi,
            acks,
        })
    }
}

/// Addressed safety related message, type 12 (up to 1008 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressedSafety {
    pub repeat: u8,
    pub mmsi: u32,
    /// Sequence number for the type 13 acknowledgement.
    pub seqno: u8,
    pub dest_mmsi: u32,
    /// True when this is a retransmission.
    pub retransmit: bool,
    /// Message text, up to 156 six-bit characters.
    pub text: String,
}

impl AddressedSafety {
    /// Decodes a type 12 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            seqno: bits.uint(38, 2)? as u8,
            dest_mmsi: bits.uint(40, 30)? as u32,
            retransmit: bits.flag(70)?,
            text: variable_text(bits, 72)?,
        })
    }
}

/// Safety related broadcast message, type 14 (up to 1008 bits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SafetyBroadcast {
    pub repeat: u8,
    pub mmsi: u32,
    /// Message text, up to 161 six-bit characters.
    pub text: String,
}

impl SafetyBroadcast {
    /// Decodes a type 14 payload.
    pub fn decode(bits: &BitVec) -> Result<Self, AisError> {
        Ok(Self {
            repeat: bits.uint(6, 2)? as u8,
            mmsi: bits.uint(8, 30)? as u32,
            text: variable_text(bits, 40)?,
        })
    }
}

/// Reads the 6-bit text running from `start` to the end of the vector,
/// ignoring any leftover bits shorter than one character.
pub(crate) fn variable_text(bits: &BitVec, start: usize) -> Result<String, AisError> {
    let available = bits.len().saturating_sub(start);
    bits.string(start, available - available % 6)
}
