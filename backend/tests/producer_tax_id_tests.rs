//! Producer tax ID property-based and unit tests
//!
//! The CPF check digits are recomputed locally so the generator can build
//! identifiers that are valid by construction, then corrupt them.

use proptest::prelude::*;

use shared::models::ProducerInput;
use shared::validation::{
    is_valid_cnpj, is_valid_cpf, validate_cpf_cnpj, validate_producer_input,
};

/// Compute the two CPF check digits for a 9-digit root.
fn cpf_check_digits(root: &[u32; 9]) -> (u32, u32) {
    let first = {
        let sum: u32 = root
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (10 - i as u32))
            .sum();
        (sum * 10) % 11 % 10
    };
    let second = {
        let sum: u32 = root
            .iter()
            .chain(std::iter::once(&first))
            .enumerate()
            .map(|(i, &d)| d * (11 - i as u32))
            .sum();
        (sum * 10) % 11 % 10
    };
    (first, second)
}

fn digits_to_string(digits: &[u32]) -> String {
    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap())
        .collect()
}

fn cpf_root_strategy() -> impl Strategy<Value = [u32; 9]> {
    prop::array::uniform9(0..=9u32).prop_filter("must not be a repeated sequence", |root| {
        root.iter().any(|&d| d != root[0])
    })
}

proptest! {
    /// A CPF with correctly computed check digits is always accepted.
    #[test]
    fn constructed_cpf_is_accepted(root in cpf_root_strategy()) {
        let (d10, d11) = cpf_check_digits(&root);
        let mut digits: Vec<u32> = root.to_vec();
        digits.push(d10);
        digits.push(d11);
        let cpf = digits_to_string(&digits);
        prop_assert!(is_valid_cpf(&cpf));
        prop_assert!(validate_cpf_cnpj(&cpf).is_ok());
    }

    /// Corrupting a check digit always rejects the CPF.
    #[test]
    fn corrupted_check_digit_is_rejected(root in cpf_root_strategy(), bump in 1..=9u32) {
        let (d10, d11) = cpf_check_digits(&root);
        let mut digits: Vec<u32> = root.to_vec();
        digits.push(d10);
        digits.push((d11 + bump) % 10);
        let cpf = digits_to_string(&digits);
        prop_assert!(!is_valid_cpf(&cpf));
    }

    /// Lengths other than 11 and 14 digits are never valid tax IDs.
    #[test]
    fn wrong_length_is_rejected(digits in prop::collection::vec(0..=9u32, 0..=20)) {
        prop_assume!(digits.len() != 11 && digits.len() != 14);
        let id = digits_to_string(&digits);
        prop_assert!(validate_cpf_cnpj(&id).is_err());
    }
}

#[test]
fn known_ids_are_accepted() {
    assert!(is_valid_cpf("52998224725"));
    assert!(is_valid_cnpj("11222333000181"));
    assert!(validate_cpf_cnpj("529.982.247-25").is_ok());
    assert!(validate_cpf_cnpj("11.222.333/0001-81").is_ok());
}

#[test]
fn repeated_digit_ids_are_rejected() {
    // These carry a formally valid checksum but are never issued.
    assert!(!is_valid_cpf("11111111111"));
    assert!(!is_valid_cnpj("22222222222222"));
}

#[test]
fn producer_payload_round_trips_through_validation() {
    let input = ProducerInput {
        name: "Cooperativa Vale Verde".to_string(),
        cpf_cnpj: "11.222.333/0001-81".to_string(),
    };
    assert!(validate_producer_input(&input).is_ok());
    // Pure and idempotent
    assert!(validate_producer_input(&input).is_ok());
}

#[test]
fn producer_with_bad_checksum_is_rejected() {
    let input = ProducerInput {
        name: "Cooperativa Vale Verde".to_string(),
        cpf_cnpj: "529.982.247-24".to_string(),
    };
    let issues = validate_producer_input(&input).unwrap_err();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "cpf_cnpj");
}
