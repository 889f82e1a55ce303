//! # 6-bit Armor Decoding
//!
//! AIS payload bits travel inside NMEA sentences as printable characters,
//! six bits per character. The alphabet runs from `'0'` (value 0) through
//! `'W'` (value 39), then skips to `` '`' `` (value 40) through `'w'`
//! (value 63). This armor alphabet is not the character set used by string
//! fields inside the payload; see [`crate::util::bitvec::SIXBIT_CHARSET`]
//! for that one.

use crate::error::AisError;
use crate::util::{BitVec, BitVecBuilder};

/// Returns the 6-bit value of one armor character, or `None` when the
/// character is outside the alphabet.
pub fn armor_value(character: char) -> Option<u8> {
    let code = character as u32;
    if !(48..=119).contains(&code) {
        return None;
    }
    let mut value = (code - 48) as u8;
    if value >= 40 {
        if value < 48 {
            // 'X'..'_' sit in the gap between the two alphabet halves.
            return None;
        }
        value -= 8;
    }
    if value >= 64 {
        return None;
    }
    Some(value)
}

/// Appends the bits of one armored payload onto `builder`, most significant
/// bit of each character first.
///
/// Fails with [`AisError::ArmorDecode`] on the first character outside the
/// armor alphabet, identifying the offending character and offset.
pub fn append_payload(builder: &mut BitVecBuilder, payload: &str) -> Result<(), AisError> {
    for (offset, character) in payload.chars().enumerate() {
        let value = armor_value(character).ok_or(AisError::ArmorDecode { character, offset })?;
        builder.push_sixbit(value);
    }
    Ok(())
}

/// Decodes a single armored payload into a complete bit vector, removing
/// `fill_bits` padding bits from the tail.
pub fn decode_payload(payload: &str, fill_bits: u8) -> Result<BitVec, AisError> {
    let mut builder = BitVecBuilder::new();
    append_payload(&mut builder, payload)?;
    builder.remove_fill_bits(fill_bits as usize);
    Ok(builder.finish())
}
