//! # Bit Vector Extraction
//!
//! This module provides the bit-addressed view over an assembled AIS payload.
//! Every field decoder in the crate reads through [`BitVec`]: unsigned and
//! signed integer spans at arbitrary bit alignment, and the 6-bit character
//! strings used for names, call signs and destinations.
//!
//! The packing convention follows the radio payload: most significant bit
//! first, bit 0 is the high bit of byte 0.

use crate::constants::AIS_MAX_PAYLOAD_BITS;
use crate::error::AisError;
use bytes::{BufMut, BytesMut};
use serde::Serialize;

/// The 6-bit character set used by AIS string fields.
///
/// Value 0 maps to `@` (the padding character), 1-26 to `A`-`Z`, then
/// punctuation and digits up to value 63 (`?`). This is distinct from the
/// armor alphabet used to encode payload bits in the NMEA sentence.
pub const SIXBIT_CHARSET: &[u8; 64] =
    b"@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_ !\"#$%&'()*+,-./0123456789:;<=>?";

/// An immutable, bit-addressed payload assembled from one or more armored
/// NMEA fragments, with the final fragment's fill bits already removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitVec {
    data: Vec<u8>,
    len: usize,
}

impl BitVec {
    /// Wraps packed bytes as a bit vector of `len` bits.
    ///
    /// `len` may be smaller than `data.len() * 8`; trailing bits of the last
    /// byte are ignored.
    pub fn from_bytes(data: &[u8], len: usize) -> Self {
        debug_assert!(len <= data.len() * 8);
        Self {
            data: data.to_vec(),
            len,
        }
    }

    /// Number of valid bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the vector holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bit(&self, index: usize) -> u64 {
        ((self.data[index / 8] >> (7 - index % 8)) & 1) as u64
    }

    /// Reads `length` bits starting at `start` as a big-endian unsigned value.
    ///
    /// `length` must be at most 64. Reading past the end of the vector fails
    /// with [`AisError::TruncatedMessage`].
    pub fn uint(&self, start: usize, length: usize) -> Result<u64, AisError> {
        debug_assert!(length <= 64, "bit spans wider than 64 are not a thing in AIS");
        if start + length > self.len {
            return Err(AisError::TruncatedMessage {
                start,
                length,
                available: self.len,
            });
        }
        let mut value = 0u64;
        for i in start..start + length {
            value = (value << 1) | self.bit(i);
        }
        Ok(value)
    }

    /// Reads `length` bits starting at `start` as a two's-complement signed
    /// value.
    pub fn int(&self, start: usize, length: usize) -> Result<i64, AisError> {
        let raw = self.uint(start, length)?;
        let sign_bit = 1u64 << (length - 1);
        if raw & sign_bit != 0 {
            Ok((raw as i64) - ((sign_bit as i64) << 1))
        } else {
            Ok(raw as i64)
        }
    }

    /// Reads a single bit as a flag.
    pub fn flag(&self, start: usize) -> Result<bool, AisError> {
        Ok(self.uint(start, 1)? != 0)
    }

    /// Reads `length` bits (a multiple of 6) starting at `start` as a 6-bit
    /// character string, with trailing `@` padding and trailing blanks
    /// stripped.
    pub fn string(&self, start: usize, length: usize) -> Result<String, AisError> {
        debug_assert!(length % 6 == 0, "string spans are whole 6-bit characters");
        let mut out = String::with_capacity(length / 6);
        let mut offset = start;
        while offset < start + length {
            let value = self.uint(offset, 6)? as usize;
            out.push(SIXBIT_CHARSET[value] as char);
            offset += 6;
        }
        while out.ends_with('@') {
            out.pop();
        }
        while out.ends_with(' ') {
            out.pop();
        }
        Ok(out)
    }

    /// Reads an unsigned span, substituting `default` when the span extends
    /// past the end of the vector. Used for optional trailing fields whose
    /// sentinel stands in when a station transmits a short message.
    pub fn uint_or(&self, start: usize, length: usize, default: u64) -> u64 {
        self.uint(start, length).unwrap_or(default)
    }

    /// Reads a signed span, substituting `default` on truncation.
    pub fn int_or(&self, start: usize, length: usize, default: i64) -> i64 {
        self.int(start, length).unwrap_or(default)
    }

    /// Reads a flag, substituting `default` on truncation.
    pub fn flag_or(&self, start: usize, default: bool) -> bool {
        self.flag(start).unwrap_or(default)
    }

    /// Copies `length` bits starting at `start` into a new vector, clamped
    /// to the end of this one.
    pub fn slice(&self, start: usize, length: usize) -> BitVec {
        let end = (start + length).min(self.len);
        let mut builder = BitVecBuilder::new();
        for index in start..end {
            builder.push_bit(self.bit(index) != 0);
        }
        builder.finish()
    }

    /// Copies the bits from `start` to the end into a new vector.
    ///
    /// This is how variable-length application payloads (types 6, 8, 25, 26)
    /// and DGNSS correction words are carried in decoded records.
    pub fn tail(&self, start: usize) -> BitVec {
        self.slice(start, self.len.saturating_sub(start))
    }

    /// Hex rendering of the packed payload bytes, for error context and logs.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data[..self.len.div_ceil(8)])
    }
}

/// Accumulates bits most-significant-first while armored fragments are
/// decoded, then freezes into a [`BitVec`].
#[derive(Debug, Default)]
pub struct BitVecBuilder {
    data: BytesMut,
    len: usize,
}

impl BitVecBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            data: BytesMut::with_capacity(64),
            len: 0,
        }
    }

    /// Number of bits accumulated so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no bits have been pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        if self.len % 8 == 0 {
            self.data.put_u8(0);
        }
        if bit {
            let index = self.len / 8;
            self.data[index] |= 1 << (7 - self.len % 8);
        }
        self.len += 1;
    }

    /// Appends the six bits of one armored payload character, high bit first.
    pub fn push_sixbit(&mut self, value: u8) {
        debug_assert!(value < 64);
        for i in (0..6).rev() {
            self.push_bit((value >> i) & 1 != 0);
        }
    }

    /// True once the assembled payload exceeds the protocol's maximum size.
    pub fn overflowed(&self) -> bool {
        self.len > AIS_MAX_PAYLOAD_BITS
    }

    /// Drops `bits` bits from the tail. Used to remove the final fragment's
    /// declared fill bits.
    pub fn remove_fill_bits(&mut self, bits: usize) {
        let new_len = self.len.saturating_sub(bits);
        // Zero the dropped bits so equal vectors compare equal bytewise.
        for index in new_len..self.len {
            self.data[index / 8] &= !(1 << (7 - index % 8));
        }
        self.len = new_len;
    }

    /// Freezes the accumulated bits into an immutable vector.
    pub fn finish(self) -> BitVec {
        BitVec {
            data: self.data.to_vec(),
            len: self.len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn vec_from(bytes: &[u8]) -> BitVec {
        BitVec::from_bytes(bytes, bytes.len() * 8)
    }

    #[test]
    fn test_uint_aligned_and_unaligned() {
        let bits = vec_from(&[0b1010_1100, 0b0101_0011]);
        assert_eq!(bits.uint(0, 8).unwrap(), 0b1010_1100);
        assert_eq!(bits.uint(4, 8).unwrap(), 0b1100_0101);
        assert_eq!(bits.uint(6, 3).unwrap(), 0b000);
        assert_eq!(bits.uint(15, 1).unwrap(), 1);
    }

    #[test]
    fn test_uint_past_end_is_truncation() {
        let bits = vec_from(&[0xFF]);
        let err = bits.uint(4, 8).unwrap_err();
        assert_eq!(
            err,
            AisError::TruncatedMessage {
                start: 4,
                length: 8,
                available: 8
            }
        );
    }

    #[test]
    fn test_int_sign_extension() {
        // 0b1000_0000 over 8 bits is -128; over 4 bits the top nibble is -8.
        let bits = vec_from(&[0b1000_0000]);
        assert_eq!(bits.int(0, 8).unwrap(), -128);
        assert_eq!(bits.int(0, 4).unwrap(), -8);
        assert_eq!(bits.int(4, 4).unwrap(), 0);
        let bits = vec_from(&[0b0111_1111]);
        assert_eq!(bits.int(0, 8).unwrap(), 127);
    }

    #[test]
    fn test_string_strips_padding() {
        // "AB@@" in 6-bit chars: 1, 2, 0, 0.
        let mut builder = BitVecBuilder::new();
        for value in [1u8, 2, 0, 0] {
            builder.push_sixbit(value);
        }
        let bits = builder.finish();
        assert_eq!(bits.string(0, 24).unwrap(), "AB");
    }

    #[test]
    fn test_string_strips_trailing_blanks() {
        // "A " then padding: trailing blanks go too.
        let mut builder = BitVecBuilder::new();
        for value in [1u8, 32, 0] {
            builder.push_sixbit(value);
        }
        let bits = builder.finish();
        assert_eq!(bits.string(0, 18).unwrap(), "A");
    }

    #[test]
    fn test_optional_reads_substitute_defaults() {
        let bits = vec_from(&[0xAB]);
        assert_eq!(bits.uint_or(0, 4, 99), 0xA);
        assert_eq!(bits.uint_or(6, 4, 99), 99);
        assert_eq!(bits.int_or(6, 4, -1), -1);
        assert!(bits.flag_or(8, true));
    }

    #[test]
    fn test_tail_copies_remaining_bits() {
        let bits = vec_from(&[0b1010_1100, 0b0101_0011]);
        let tail = bits.tail(4);
        assert_eq!(tail.len(), 12);
        assert_eq!(tail.uint(0, 12).unwrap(), bits.uint(4, 12).unwrap());
    }

    #[test]
    fn test_remove_fill_bits_zeroes_tail() {
        let mut builder = BitVecBuilder::new();
        builder.push_sixbit(0b111111);
        builder.remove_fill_bits(4);
        let bits = builder.finish();
        assert_eq!(bits.len(), 2);
        assert_eq!(bits, BitVec::from_bytes(&[0b1100_0000], 2));
    }

    proptest! {
        #[test]
        fn prop_uint_fits_length(data in proptest::collection::vec(any::<u8>(), 1..16),
                                 start in 0usize..64, length in 1usize..32) {
            let bits = BitVec::from_bytes(&data, data.len() * 8);
            if let Ok(value) = bits.uint(start, length) {
                prop_assert!(value < (1u64 << length));
            }
        }

        #[test]
        fn prop_int_fits_signed_range(data in proptest::collection::vec(any::<u8>(), 1..16),
                                      start in 0usize..64, length in 2usize..32) {
            let bits = BitVec::from_bytes(&data, data.len() * 8);
            if let Ok(value) = bits.int(start, length) {
                let bound = 1i64 << (length - 1);
                prop_assert!(value >= -bound && value < bound);
            }
        }
    }
}
