use nanote_core::{Charset, Engine, NanoteError};
use num_bigint::BigUint;

#[test]
fn most_frequent_letter_encodes_to_golden_amount() {
    let engine = Engine::new(false);
    assert_eq!(
        engine.encode("e").unwrap(),
        "0.000100000000000000000000020001"
    );
    assert_eq!(
        engine.encode_raw("e").unwrap(),
        "0000100000000000000000000020001"
    );
}

#[test]
fn greeting_encodes_to_golden_amount() {
    let engine = Engine::new(false);
    assert_eq!(engine.shortest_charset("hello, world!"), Some(901));
    assert_eq!(
        engine.encode("hello, world!").unwrap(),
        "0.000100476884084665303374619011"
    );
}

#[test]
fn golden_amount_decodes() {
    let engine = Engine::new(false);
    assert_eq!(
        engine.decode("0.000100000000000000000000020001").unwrap(),
        "e"
    );
    assert_eq!(
        engine.decode("0.000100476884084665303374619011").unwrap(),
        "hello, world!"
    );
    assert_eq!(
        engine.decode_raw("0000100000000000000000000020001").unwrap(),
        "e"
    );
}

#[test]
fn empty_message_is_the_minimum_amount() {
    let engine = Engine::new(false);
    let amount = engine.encode("").unwrap();
    assert_eq!(amount, "0.000100000000000000000000000001");
    assert_eq!(engine.decode(&amount).unwrap(), "");
}

#[test]
fn checksum_reference_values() {
    let engine = Engine::new(false);
    assert_eq!(engine.calculate_checksum("0").unwrap(), 1);
    assert_eq!(engine.calculate_checksum("999").unwrap(), 8);
    assert_eq!(engine.calculate_checksum("900").unwrap(), 0);
    assert!(engine.validate_checksum("999", "8"));
    assert!(!engine.validate_checksum("999", "9"));
    assert!(engine.calculate_checksum("").is_err());
    assert!(engine.calculate_checksum("9a").is_err());
}

#[test]
fn base_conversion_reference_values() {
    let engine = Engine::new(false);
    let charset = Charset::from("a");
    assert_eq!(engine.b10_encode("a", &charset).unwrap(), BigUint::from(1u32));
    assert_eq!(engine.b10_encode("aa", &charset).unwrap(), BigUint::from(3u32));
    assert_eq!(engine.b10_decode(&BigUint::from(1u32), &charset), "a");
    assert_eq!(engine.b10_decode(&BigUint::from(3u32), &charset), "aa");
}

#[test]
fn unsupported_character_cannot_be_encoded() {
    let engine = Engine::new(false);
    assert_eq!(engine.shortest_charset("\\"), None);
    assert_eq!(
        engine.encode("back\\slash"),
        Err(NanoteError::NoCoveringCharset {
            unsupported: "\\".into()
        })
    );
    assert!(engine.encode_raw("Capital").is_err());
}

#[test]
fn below_offset_and_bad_checksum_fail_differently() {
    let engine = Engine::new(false);
    let below = engine
        .decode("0.000000000000000000000000000001")
        .unwrap_err();
    let corrupted = engine
        .decode("0.000100000000000000000000020005")
        .unwrap_err();
    assert!(matches!(below, NanoteError::BelowMinimumOffset { .. }));
    assert!(matches!(corrupted, NanoteError::ChecksumMismatch { .. }));
    assert_ne!(below.code(), corrupted.code());
}

#[test]
fn malformed_amounts_fail() {
    let engine = Engine::new(false);
    for bad in ["", "e", "0.0001", "1.000100000000000000000000020001x"] {
        assert!(matches!(
            engine.decode(bad),
            Err(NanoteError::MalformedAmount { .. })
        ));
    }
    assert!(matches!(
        engine.decode_raw("0.000100000000000000000000020001"),
        Err(NanoteError::MalformedAmount { .. })
    ));
}

#[test]
fn engines_build_identical_catalogs() {
    let first = Engine::new(false);
    let second = Engine::new(true);
    assert_eq!(first.catalog().len(), 1000);
    assert_eq!(first.catalog(), second.catalog());
}
