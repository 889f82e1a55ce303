//! Integration tests for the `ais-rs` crate.
//!
//! These tests exercise the record-side output contract: the (name, value,
//! unit) field triples and the serde schema the serialization adapter
//! consumes.

use ais_rs::{AisDecoder, AisMessage};
use serde_json::Value;

fn decode_one(line: &str) -> AisMessage {
    AisDecoder::new()
        .decode_line(line)
        .expect("line decodes")
        .expect("single fragment completes")
}

/// Tests that every record exposes type, repeat and MMSI.
#[test]
fn test_common_header_accessors() {
    let message = decode_one("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C");
    assert_eq!(message.message_type(), 1);
    assert_eq!(message.repeat(), 0);
    assert_eq!(message.mmsi(), 477_553_000);
}

/// Tests that the field triples carry raw values with their units.
#[test]
fn test_field_triples_carry_units() {
    let message = decode_one("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C");
    let fields = message.fields();

    let speed = fields.iter().find(|f| f.name == "speed").expect("speed field");
    assert_eq!(speed.value, Value::from(0));
    assert_eq!(speed.unit, Some("0.1 kt"));

    let lon = fields.iter().find(|f| f.name == "lon").expect("lon field");
    assert_eq!(lon.value, Value::from(-73_407_500));
    assert_eq!(lon.unit, Some("1/10000 min"));

    let mmsi = fields.iter().find(|f| f.name == "mmsi").expect("mmsi field");
    assert_eq!(mmsi.value, Value::from(477_553_000u32));
    assert_eq!(mmsi.unit, None);
}

/// Tests that unavailable optional fields are present with their sentinel
/// rather than omitted, keeping the schema stable per type.
#[test]
fn test_sentinels_present_not_omitted() {
    // Golden type 18: heading is the 511 "not available" sentinel.
    let message = decode_one("!AIVDM,1,1,,A,B52K>;h00Fc>jpUlNV@ikwpUoP06,0*4C");
    let fields = message.fields();
    let heading = fields.iter().find(|f| f.name == "heading").expect("heading present");
    assert_eq!(heading.value, Value::from(511));
    assert_eq!(heading.unit, Some("deg"));
}

/// Tests that two records of the same type expose the same field names.
#[test]
fn test_schema_stable_per_type() {
    let first = decode_one("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C");
    // The same sentence truncated into the optional tail.
    let second = decode_one("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN,0*3B");

    let names = |message: &AisMessage| -> Vec<String> {
        message.fields().into_iter().map(|f| f.name).collect()
    };
    assert_eq!(names(&first), names(&second));
}

/// Tests the serde JSON shape consumed by downstream serializers.
#[test]
fn test_serde_record_shape() {
    let message = decode_one("!AIVDM,1,1,,B,177KQJ5000G?tO`K>RA1wUbN0TKH,0*5C");
    let value = serde_json::to_value(&message).expect("serializable");

    // Externally tagged by variant name.
    let report = value
        .get("PositionReport")
        .expect("variant tag present");
    assert_eq!(report.get("mmsi"), Some(&Value::from(477_553_000u32)));
    assert_eq!(report.get("status"), Some(&Value::from("Moored")));
}
