//! # NMEA 0183 Sentence Framing
//!
//! This module parses one AIS sentence line into its header fields and
//! armored payload, and validates the trailing XOR checksum.
//!
//! ## Sentence shape
//!
//! ```text
//! !AIVDM,<frag_count>,<frag_num>,<seq_id|empty>,<channel>,<payload>,<fill>*<checksum>
//! ```
//!
//! The checksum covers every character strictly between the leading `!` and
//! the `*` delimiter, XOR-accumulated and rendered as two uppercase hex
//! digits.
//!
//! ## Error Handling
//! Structural problems surface as [`AisError::Framing`]; a checksum mismatch
//! surfaces as [`AisError::Checksum`] in strict mode, or as a cleared
//! `checksum_valid` flag in lenient mode for lossy radio links.

use crate::error::AisError;
use nom::{
    bytes::complete::{take_while, take_while_m_n},
    character::complete::char,
    combinator::opt,
    sequence::preceded,
    IResult,
};

/// Checksum handling policy for [`decode_sentence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumMode {
    /// Reject sentences whose checksum does not match.
    #[default]
    Strict,
    /// Accept mismatched sentences, clearing [`Sentence::checksum_valid`].
    Lenient,
}

/// One parsed AIS sentence: header fields plus the still-armored payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Talker code, e.g. `AI`, `BS`, `SA`.
    pub talker: String,
    /// Sentence type code: `VDM` (received traffic) or `VDO` (own ship).
    pub sentence_type: String,
    /// Total fragments in this message (1 for single-sentence messages).
    pub fragment_count: u8,
    /// This fragment's 1-based number.
    pub fragment_number: u8,
    /// Sequential message id linking fragments of one message, 0-9.
    pub sequence_id: Option<u8>,
    /// Radio channel, normalized so `1`/`2` read as `A`/`B`.
    pub channel: Option<char>,
    /// Armored payload characters.
    pub payload: String,
    /// Padding bits to drop from the tail of this fragment's payload.
    pub fill_bits: u8,
    /// Checksum byte carried by the sentence.
    pub checksum: u8,
    /// False when the checksum failed and [`ChecksumMode::Lenient`] let the
    /// sentence through anyway.
    pub checksum_valid: bool,
}

impl Sentence {
    /// True when this sentence carries a complete message on its own.
    pub fn is_single_fragment(&self) -> bool {
        self.fragment_count == 1
    }

    /// True when this is the last fragment of its message.
    pub fn is_final_fragment(&self) -> bool {
        self.fragment_number == self.fragment_count
    }
}

/// Computes the NMEA checksum over a sentence body: the XOR of all character
/// values strictly between the leading `!` and the `*` delimiter.
pub fn nmea_checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, byte| acc ^ byte)
}

fn is_field_char(c: char) -> bool {
    c != ',' && c != '*'
}

fn field(input: &str) -> IResult<&str, &str> {
    preceded(char(','), take_while(is_field_char))(input)
}

fn sentence_parts(input: &str) -> IResult<&str, (&str, Vec<&str>, Option<&str>)> {
    let (i, _) = char('!')(input)?;
    let (i, identifier) =
        take_while_m_n(5, 5, |c: char| c.is_ascii_uppercase())(i)?;
    let (i, f1) = field(i)?;
    let (i, f2) = field(i)?;
    let (i, f3) = field(i)?;
    let (i, f4) = field(i)?;
    let (i, f5) = field(i)?;
    let (i, f6) = field(i)?;
    let (i, checksum) = opt(preceded(
        char('*'),
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
    ))(i)?;
    Ok((i, (identifier, vec![f1, f2, f3, f4, f5, f6], checksum)))
}

fn parse_u8(value: &str, what: &str, line: &str) -> Result<u8, AisError> {
    value
        .parse::<u8>()
        .map_err(|_| AisError::framing(format!("invalid {what} field {value:?}"), line))
}

/// Parses and validates one NMEA sentence line.
///
/// The leading `!`, the five-character identifier (any talker followed by
/// `VDM`/`VDO`), the comma field structure, and the checksum are all
/// validated here; the payload stays armored for the reassembly stage.
pub fn decode_sentence(line: &str, mode: ChecksumMode) -> Result<Sentence, AisError> {
    let line = line.trim_end_matches(['\r', '\n']);

    let (rest, (identifier, fields, checksum_text)) = sentence_parts(line)
        .map_err(|_| AisError::framing("unrecognized sentence structure", line))?;
    if !rest.is_empty() {
        return Err(AisError::framing("trailing characters after checksum", line));
    }
    let sentence_type = &identifier[2..];
    if sentence_type != "VDM" && sentence_type != "VDO" {
        return Err(AisError::framing(
            format!("not an AIS sentence type: {identifier}"),
            line,
        ));
    }

    let checksum_text = checksum_text
        .ok_or_else(|| AisError::framing("missing checksum", line))?;
    let expected = u8::from_str_radix(checksum_text, 16)
        .map_err(|_| AisError::framing("invalid checksum digits", line))?;
    // Body runs from just after '!' to just before '*'.
    let body_end = line.rfind('*').unwrap_or(line.len());
    let calculated = nmea_checksum(&line[1..body_end]);
    let checksum_valid = calculated == expected;
    if !checksum_valid && mode == ChecksumMode::Strict {
        return Err(AisError::Checksum {
            expected,
            calculated,
        });
    }

    let fragment_count = parse_u8(fields[0], "fragment count", line)?;
    let fragment_number = parse_u8(fields[1], "fragment number", line)?;
    if fragment_number < 1 || fragment_count < fragment_number {
        return Err(AisError::framing(
            format!("fragment {fragment_number} of {fragment_count} out of range"),
            line,
        ));
    }

    let sequence_id = match fields[2] {
        "" => None,
        text => Some(parse_u8(text, "sequence id", line)?),
    };
    if let Some(id) = sequence_id {
        if id > crate::constants::AIS_MAX_SEQUENCE_ID {
            return Err(AisError::framing(format!("sequence id {id} out of range"), line));
        }
    }

    let channel = match fields[3] {
        "" => None,
        // Some receivers report the channel number instead of its letter.
        "1" | "A" => Some('A'),
        "2" | "B" => Some('B'),
        text if text.len() == 1 => text.chars().next(),
        text => {
            return Err(AisError::framing(
                format!("invalid channel field {text:?}"),
                line,
            ))
        }
    };

    let payload = fields[4];
    if payload.is_empty() {
        return Err(AisError::framing("empty payload", line));
    }

    let fill_bits = parse_u8(fields[5], "fill bits", line)?;
    if fill_bits > 5 {
        return Err(AisError::framing(
            format!("fill bit count {fill_bits} out of range"),
            line,
        ));
    }

    Ok(Sentence {
        talker: identifier[..2].to_string(),
        sentence_type: sentence_type.to_string(),
        fragment_count,
        fragment_number,
        sequence_id,
        channel,
        payload: payload.to_string(),
        fill_bits,
        checksum: expected,
        checksum_valid,
    })
}
