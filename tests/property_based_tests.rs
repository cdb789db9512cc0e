//! Property-based tests for the mask, check digits and validators.
//!
//! Covers the invariants that must hold for any input, not just the
//! fixtures: idempotent masking, digit preservation, validity implying
//! shape, and extractor/validator agreement.

use cnj::domain::digits_only;
use cnj::{
    compute_check_digits, extract_cnj_info, format, is_valid_cnj, matches_cnj_shape,
    validate_process_number, CnjNumber,
};
use proptest::prelude::*;

/// Five non-check fields of a CNJ number.
fn cnj_parts() -> impl Strategy<Value = (String, String, String, String, String)> {
    (
        "[0-9]{7}",
        "[0-9]{4}",
        "[0-9]",
        "[0-9]{2}",
        "[0-9]{4}",
    )
}

/// Mix of free text, digit runs and CNJ punctuation.
fn noisy_input() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        "[0-9]{0,30}",
        "[0-9 .\\-a-z]{0,40}",
    ]
}

proptest! {
    #[test]
    fn format_is_idempotent(input in noisy_input()) {
        let once = format(&input);
        prop_assert_eq!(format(&once), once);
    }

    #[test]
    fn format_preserves_digits(input in noisy_input()) {
        let mut expected = digits_only(&input);
        expected.truncate(20);
        prop_assert_eq!(digits_only(&format(&input)), expected);
    }

    #[test]
    fn check_digits_are_deterministic((seq, ano, seg, trib, orig) in cnj_parts()) {
        let first = compute_check_digits(&seq, &ano, &seg, &trib, &orig);
        let second = compute_check_digits(&seq, &ano, &seg, &trib, &orig);
        prop_assert_eq!(first.len(), 2);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn validity_implies_shape(input in noisy_input()) {
        if is_valid_cnj(&input) {
            prop_assert!(matches_cnj_shape(&input));
        }
    }

    #[test]
    fn extractor_agrees_with_validator(input in noisy_input()) {
        prop_assert_eq!(extract_cnj_info(&input).is_some(), is_valid_cnj(&input));
    }

    #[test]
    fn generated_numbers_round_trip((seq, ano, seg, trib, orig) in cnj_parts()) {
        let number = CnjNumber::from_parts(&seq, &ano, &seg, &trib, &orig).unwrap();
        let rendered = number.to_string();

        prop_assert!(is_valid_cnj(&rendered));
        prop_assert!(validate_process_number(&rendered).is_valid);

        let info = extract_cnj_info(&rendered).unwrap();
        prop_assert_eq!(format(&info.raw_digits()), rendered);
    }

    #[test]
    fn extractor_agrees_on_shaped_input(
        (seq, ano, seg, trib, orig) in cnj_parts(),
        digitos in "[0-9]{2}",
    ) {
        let candidate = format!("{}-{}.{}.{}.{}.{}", seq, digitos, ano, seg, trib, orig);
        prop_assert!(matches_cnj_shape(&candidate));
        prop_assert_eq!(extract_cnj_info(&candidate).is_some(), is_valid_cnj(&candidate));
        let expected = compute_check_digits(&seq, &ano, &seg, &trib, &orig);
        prop_assert_eq!(is_valid_cnj(&candidate), digitos == expected);
    }

    #[test]
    fn validation_never_panics(input in noisy_input()) {
        let result = validate_process_number(&input);
        prop_assert_eq!(result.is_valid, result.message.is_none());
    }
}
