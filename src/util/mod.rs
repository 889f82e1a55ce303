//! # Utility Modules
//!
//! This module provides common utility types used throughout the ais-rs
//! crate: the bit-addressed payload vector every decoder reads through, and
//! rate-limited logging for noisy receive paths.

pub mod bitvec;
pub mod logging;

// Re-export commonly used types and functions
pub use bitvec::{BitVec, BitVecBuilder, SIXBIT_CHARSET};
pub use logging::LogThrottle;
