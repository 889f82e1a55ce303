//! Reassembly scenario tests against the public deframer API.

use ais_rs::nmea::{decode_sentence, nmea_checksum, ChecksumMode, Deframer, Reassembly, Sentence};
use ais_rs::AisError;

fn sentence(count: u8, number: u8, seq: &str, channel: &str, payload: &str, fill: u8) -> Sentence {
    let body = format!("AIVDM,{count},{number},{seq},{channel},{payload},{fill}");
    let line = format!("!{}*{:02X}", body, nmea_checksum(&body));
    decode_sentence(&line, ChecksumMode::Strict).unwrap()
}

/// Tests that two in-order fragments concatenate, with the declared fill
/// bits removed from the tail of the final fragment only.
#[test]
fn test_two_fragment_concatenation() {
    let mut deframer = Deframer::default();

    let first = sentence(2, 1, "3", "A", "1w", 0);
    let second = sentence(2, 2, "3", "A", "w1", 2);

    assert_eq!(deframer.accept(&first).unwrap(), Reassembly::Pending);
    let Reassembly::Complete(bits) = deframer.accept(&second).unwrap() else {
        panic!("expected completion");
    };

    // Fragment 1 contributes all 12 bits, fragment 2 its 12 minus 2 fill.
    assert_eq!(bits.len(), 22);
    assert_eq!(bits.uint(0, 6).unwrap(), 1);
    assert_eq!(bits.uint(6, 6).unwrap(), 63);
    assert_eq!(bits.uint(12, 6).unwrap(), 63);
    assert_eq!(bits.uint(18, 4).unwrap(), 0b0000);
}

/// Tests that fragment 2 with no prior group fails and a later fragment 1
/// for the same key starts a fresh group.
#[test]
fn test_fragment_two_first_is_error_then_recovers() {
    let mut deframer = Deframer::default();

    let out_of_order = sentence(2, 2, "3", "A", "w1", 2);
    let err = deframer.accept(&out_of_order).unwrap_err();
    assert!(matches!(
        err,
        AisError::Reassembly {
            sequence_id: Some(3),
            channel: Some('A'),
            ..
        }
    ));

    assert_eq!(
        deframer.accept(&sentence(2, 1, "3", "A", "1w", 0)).unwrap(),
        Reassembly::Pending
    );
    assert!(matches!(
        deframer.accept(&sentence(2, 2, "3", "A", "w1", 2)).unwrap(),
        Reassembly::Complete(_)
    ));
}

/// Tests that single-fragment sentences never occupy the pending table.
#[test]
fn test_single_fragment_never_buffers() {
    let mut deframer = Deframer::default();
    for _ in 0..10 {
        let result = deframer.accept(&sentence(1, 1, "", "A", "177KQJ", 0)).unwrap();
        assert!(matches!(result, Reassembly::Complete(_)));
        assert_eq!(deframer.pending_groups(), 0);
    }
}

/// Tests that groups on different channels do not interfere even with the
/// same sequence id.
#[test]
fn test_channels_are_independent_groups() {
    let mut deframer = Deframer::default();
    deframer.accept(&sentence(2, 1, "5", "A", "11", 0)).unwrap();
    deframer.accept(&sentence(2, 1, "5", "B", "22", 0)).unwrap();
    assert_eq!(deframer.pending_groups(), 2);

    let Reassembly::Complete(on_b) = deframer.accept(&sentence(2, 2, "5", "B", "00", 0)).unwrap()
    else {
        panic!("expected completion");
    };
    assert_eq!(on_b.uint(0, 6).unwrap(), 2);

    let Reassembly::Complete(on_a) = deframer.accept(&sentence(2, 2, "5", "A", "00", 0)).unwrap()
    else {
        panic!("expected completion");
    };
    assert_eq!(on_a.uint(0, 6).unwrap(), 1);
}
