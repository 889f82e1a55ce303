//! # AIS Error Handling
//!
//! This module defines the AisError enum, which represents the different error
//! types that can occur in the ais-rs crate.

use thiserror::Error;

/// Represents the different error types that can occur while decoding AIS data.
///
/// Every variant is local to the offending sentence or message; callers keep
/// processing subsequent lines after any of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AisError {
    /// Indicates a structurally malformed NMEA sentence.
    #[error("Malformed NMEA sentence: {reason}: {sentence}")]
    Framing { reason: String, sentence: String },

    /// Indicates the sentence checksum did not match the XOR of its body.
    #[error("Invalid checksum: expected {expected:02X}, calculated {calculated:02X}")]
    Checksum { expected: u8, calculated: u8 },

    /// Indicates a payload character outside the 6-bit armor alphabet.
    #[error("Invalid armor character {character:?} at payload offset {offset}")]
    ArmorDecode { character: char, offset: usize },

    /// Indicates a fragment sequence that cannot be assembled.
    #[error("Fragment reassembly failed for group (seq {sequence_id:?}, channel {channel:?}): {reason}")]
    Reassembly {
        sequence_id: Option<u8>,
        channel: Option<char>,
        reason: String,
    },

    /// Indicates a mandatory field extends past the end of the bit vector.
    #[error("Message truncated: field needs bits {start}..{end} but payload is {available} bits", end = .start + .length)]
    TruncatedMessage {
        start: usize,
        length: usize,
        available: usize,
    },

    /// Indicates a message type outside 1-27 or one this crate does not decode.
    #[error("Unsupported message type {message_type} ({payload_bits} bit payload)")]
    UnsupportedType {
        message_type: u8,
        payload_bits: usize,
    },

    /// Indicates a binary application (DAC/FID pair) without a dedicated decoder.
    #[error("Unsupported binary application DAC={dac} FID={fid}")]
    UnsupportedSubMessage { dac: u16, fid: u8 },
}

impl AisError {
    /// Builds a framing error, capturing the offending sentence for diagnosis.
    pub fn framing(reason: impl Into<String>, sentence: &str) -> Self {
        AisError::Framing {
            reason: reason.into(),
            sentence: sentence.to_string(),
        }
    }

    /// Builds a reassembly error for the given fragment group key.
    pub fn reassembly(
        sequence_id: Option<u8>,
        channel: Option<char>,
        reason: impl Into<String>,
    ) -> Self {
        AisError::Reassembly {
            sequence_id,
            channel,
            reason: reason.into(),
        }
    }
}
