//! The nmea module contains the components responsible for the sentence
//! transport layer: framing and checksum validation, 6-bit armor decoding,
//! and multi-sentence fragment reassembly.

pub mod armor;
pub mod deframer;
pub mod sentence;

pub use armor::decode_payload;
pub use deframer::{Deframer, DeframerStats, Reassembly, DEFAULT_MAX_PENDING_GROUPS};
pub use sentence::{decode_sentence, nmea_checksum, ChecksumMode, Sentence};
