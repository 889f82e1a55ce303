//! Error-path tests: truncation policy, unsupported types, checksum modes,
//! and the stream-survives-errors contract.

use ais_rs::messages::enums::ManeuverIndicator;
use ais_rs::{AisDecoder, AisError, AisMessage, ChecksumMode, DecoderConfig};

/// Tests that truncation before a mandatory field fails the message.
#[test]
fn test_truncation_in_mandatory_field_is_fatal() {
    // The golden type 1 sentence cut to 40 bits: navigational status at
    // bits 38..42 is no longer fully present.
    let mut decoder = AisDecoder::new();
    let err = decoder
        .decode_line("!AIVDM,1,1,,B,177KQJ4,2*72")
        .unwrap_err();
    assert_eq!(
        err,
        AisError::TruncatedMessage {
            start: 38,
            length: 4,
            available: 40
        }
    );
}

/// Tests that truncation inside the optional tail substitutes sentinels.
#[test]
fn test_truncation_in_optional_tail_substitutes_sentinels() {
    // Same sentence cut to 144 bits: everything through `second` is intact,
    // the maneuver field onward is gone.
    let mut decoder = AisDecoder::new();
    let message = decoder
        .decode_line("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN,0*3B")
        .unwrap()
        .expect("complete");
    let AisMessage::PositionReport(report) = message else {
        panic!("wrong variant");
    };
    assert_eq!(report.second, 15);
    assert_eq!(report.maneuver, ManeuverIndicator::NotAvailable);
    assert!(!report.raim);
    assert_eq!(report.radio, 0);
}

/// Tests that a partially present optional tail keeps what it has.
#[test]
fn test_partial_optional_tail() {
    // Cut to 150 bits: maneuver and raim present, radio truncated.
    let mut decoder = AisDecoder::new();
    let message = decoder
        .decode_line("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0,0*0B")
        .unwrap()
        .expect("complete");
    let AisMessage::PositionReport(report) = message else {
        panic!("wrong variant");
    };
    assert_eq!(report.maneuver, ManeuverIndicator::NotAvailable);
    assert!(!report.raim);
    assert_eq!(report.radio, 0);
}

/// Tests that an undefined message type reports its raw tag value.
#[test]
fn test_unsupported_type_carries_raw_value() {
    let mut decoder = AisDecoder::new();
    let err = decoder
        .decode_line("!AIVDM,1,1,,A,O1mg=5@0,0*2A")
        .unwrap_err();
    assert_eq!(
        err,
        AisError::UnsupportedType {
            message_type: 31,
            payload_bits: 48
        }
    );
}

/// Tests that a payload character outside the armor alphabet fails the
/// line with its character and offset.
#[test]
fn test_invalid_armor_character() {
    // 'x' sits past the armor alphabet; build the line with a fresh
    // checksum so only the armor layer can object.
    let body = "AIVDM,1,1,,A,17x,0";
    let line = format!("!{}*{:02X}", body, ais_rs::nmea::nmea_checksum(body));
    let mut decoder = AisDecoder::new();
    let err = decoder.decode_line(&line).unwrap_err();
    assert_eq!(
        err,
        AisError::ArmorDecode {
            character: 'x',
            offset: 2
        }
    );
}

/// Tests that one bad line does not poison subsequent decoding.
#[test]
fn test_stream_survives_per_line_failures() {
    let mut decoder = AisDecoder::new();

    assert!(decoder.decode_line("garbage line").is_err());
    assert!(decoder.decode_line("!AIVDM,1,1,,A,O1mg=5@0,0*2A").is_err());

    // A valid message after two failures decodes normally.
    let message = decoder
        .decode_line("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C")
        .unwrap()
        .expect("complete");
    assert_eq!(message.mmsi(), 477_553_000);

    let stats = decoder.stats();
    assert_eq!(stats.lines_processed, 3);
    assert_eq!(stats.messages_decoded, 1);
    assert_eq!(stats.decode_errors, 2);
}

/// Tests that checksum failures reject in strict mode and pass with a
/// cleared flag in lenient mode.
#[test]
fn test_checksum_mode_strict_vs_lenient() {
    // One corrupted payload character, checksum left alone.
    let corrupted = "!AIVDM,1,1,,B,177KRJ5000G?tO`K>RA1wUbN0TKH,0*5C";

    let mut strict = AisDecoder::new();
    let err = strict.decode_line(corrupted).unwrap_err();
    assert_eq!(
        err,
        AisError::Checksum {
            expected: 0x5C,
            calculated: 0x5F
        }
    );

    let mut lenient = AisDecoder::with_config(DecoderConfig {
        checksum_mode: ChecksumMode::Lenient,
        ..DecoderConfig::default()
    });
    let message = lenient.decode_line(corrupted).unwrap().expect("complete");
    // The corrupted character lands in the MMSI span; the record decodes,
    // flagged by the stats counter.
    assert_eq!(message.message_type(), 1);
    assert_eq!(lenient.stats().checksum_failures_tolerated, 1);
}

/// Tests that error values render with their contextual payload.
#[test]
fn test_error_display_carries_context() {
    let err = AisError::UnsupportedSubMessage { dac: 235, fid: 10 };
    assert_eq!(err.to_string(), "Unsupported binary application DAC=235 FID=10");

    let err = AisError::Checksum {
        expected: 0x5C,
        calculated: 0x5F,
    };
    assert_eq!(err.to_string(), "Invalid checksum: expected 5C, calculated 5F");

    let err = AisError::TruncatedMessage {
        start: 38,
        length: 4,
        available: 40,
    };
    assert_eq!(
        err.to_string(),
        "Message truncated: field needs bits 38..42 but payload is 40 bits"
    );
}
