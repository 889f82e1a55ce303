//! # ais-rs - A Rust Crate for AIS Message Decoding
//!
//! The ais-rs crate decodes AIS (Automatic Identification System) vessel
//! tracking messages carried inside NMEA 0183 sentences, per ITU-R M.1371.
//! It turns 6-bit-armored radio payloads into structured, typed records
//! for the 27 standardized message types.
//!
//! ## Features
//!
//! - Parse and validate NMEA sentence framing and checksums
//! - Decode the 6-bit armor alphabet into bit vectors
//! - Reassemble multi-sentence messages with a bounded fragment table
//! - Decode all 27 message types, including the DAC/FID sub-addressed
//!   binary applications of types 6 and 8
//! - Expose each record's fields as (name, value, unit) triples for
//!   serialization layers
//! - Support for logging and typed per-line error handling
//!
//! ## Usage
//!
//! To use the ais-rs crate in your Rust project, add the following to your
//! Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! ais-rs = "1.0.0"
//! ```
//!
//! Then feed sentence lines to a decoder:
//!
//! ```rust
//! use ais_rs::{AisDecoder, AisMessage};
//!
//! let mut decoder = AisDecoder::new();
//! let line = "!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C";
//! match decoder.decode_line(line) {
//!     Ok(Some(AisMessage::PositionReport(report))) => {
//!         println!("MMSI {} at {:?}", report.mmsi, report.latitude());
//!     }
//!     Ok(Some(_)) | Ok(None) => {}
//!     Err(err) => eprintln!("skipping line: {err}"),
//! }
//! ```

pub mod apps;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod logging;
pub mod messages;
pub mod nmea;
pub mod util;

pub use crate::error::AisError;
pub use crate::logging::{init_logger, log_info};

// Core decoding types
pub use decoder::{AisDecoder, DecoderConfig, DecoderStats};
pub use messages::{dispatch, AisMessage, Field};
pub use nmea::{decode_sentence, ChecksumMode, Deframer, Reassembly, Sentence};
pub use util::{BitVec, BitVecBuilder};

// Binary application payloads (types 6/8)
pub use apps::{Application, InlandStatic, MeteoHydro};
