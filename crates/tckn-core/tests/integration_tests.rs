//! Integration tests over the public tckn-core API.
//!
//! Unit tests beside the modules cover the individual rules; these exercise
//! the crate surface the way downstream crates use it.

use tckn_core::{DomainError, IdentityNumber, LENGTH, is_valid};

#[test]
fn validator_and_value_type_agree_everywhere() {
    let inputs = [
        "14948892948",
        "10000000146",
        "04948892948",
        "14948892946",
        "00000000000",
        "99999999999",
        "1494889294",
        "149488929481",
        "",
        "not a number",
    ];

    for input in inputs {
        let predicate = is_valid(input);
        assert_eq!(IdentityNumber::try_parse(input).is_some(), predicate);
        assert_eq!(IdentityNumber::new(input).is_ok(), predicate);
        assert_eq!(input.parse::<IdentityNumber>().is_ok(), predicate);
    }
}

#[test]
fn generated_numbers_round_trip_through_the_validator() {
    // A deterministic sweep; the CLI covers the random path end to end.
    for sequence in (IdentityNumber::MIN_SEQUENCE..).step_by(7_777_777).take(100) {
        let Ok(id) = IdentityNumber::from_sequence(sequence) else {
            break; // walked past MAX_SEQUENCE
        };
        assert_eq!(id.as_str().len(), LENGTH);
        assert!(is_valid(id.as_str()), "generator broke on {sequence}");
        assert_eq!(
            IdentityNumber::new(id.as_str()).unwrap(),
            id,
            "parse of generated output must agree on {sequence}"
        );
    }
}

#[test]
fn leading_zero_inputs_never_validate() {
    for tail in ["4948892948", "0000000000", "9999999999"] {
        let number = format!("0{tail}");
        assert!(!is_valid(&number), "should reject {number}");
    }
}

#[test]
fn strict_constructor_reports_invalid_content() {
    let err = IdentityNumber::new("garbage-in").unwrap_err();
    assert!(matches!(err, DomainError::InvalidNumber { .. }));
}

#[test]
fn value_survives_serde_round_trip() {
    let id = IdentityNumber::new("14948892948").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    let back: IdentityNumber = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}
