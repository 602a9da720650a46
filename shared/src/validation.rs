//! Validation rules for the Farm Registry
//!
//! Field checks are pure and run in the declaration order of each payload;
//! the first violated rule per field wins, and a failing field never stops
//! evaluation of the fields after it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CropInput, FarmInput, HarvestInput, PlantingInput, ProducerInput};

/// A single field-level validation issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(path: &str, message: &str) -> Self {
        Self {
            path: path.to_string(),
            message: message.to_string(),
        }
    }
}

// ============================================================================
// Tax ID (CPF/CNPJ) Validation
// ============================================================================

/// Strip punctuation from a CPF/CNPJ, keeping digits only.
pub fn normalize_tax_id(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a Brazilian CPF: 11 digits with two mod-11 check digits.
///
/// Expects a digits-only string. Repeated-digit sequences such as
/// "11111111111" carry a valid checksum but are not issued, so they are
/// rejected up front.
pub fn is_valid_cpf(digits: &str) -> bool {
    let nums: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if nums.len() != 11 || digits.len() != 11 {
        return false;
    }
    if nums.iter().all(|&d| d == nums[0]) {
        return false;
    }

    // Check digit over the first `len` digits, weights len+1 down to 2.
    let check_digit = |len: usize| -> u32 {
        let first_weight = (len + 1) as u32;
        let sum: u32 = nums[..len]
            .iter()
            .enumerate()
            .map(|(i, &d)| d * (first_weight - i as u32))
            .sum();
        (sum * 10) % 11 % 10
    };

    check_digit(9) == nums[9] && check_digit(10) == nums[10]
}

/// Validate a Brazilian CNPJ: 14 digits with two weighted check digits.
///
/// Expects a digits-only string; repeated-digit sequences are rejected.
pub fn is_valid_cnpj(digits: &str) -> bool {
    const WEIGHTS_FIRST: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
    const WEIGHTS_SECOND: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

    let nums: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if nums.len() != 14 || digits.len() != 14 {
        return false;
    }
    if nums.iter().all(|&d| d == nums[0]) {
        return false;
    }

    let check_digit = |weights: &[u32]| -> u32 {
        let sum: u32 = nums.iter().zip(weights).map(|(&d, &w)| d * w).sum();
        let rem = sum % 11;
        if rem < 2 {
            0
        } else {
            11 - rem
        }
    };

    check_digit(&WEIGHTS_FIRST) == nums[12] && check_digit(&WEIGHTS_SECOND) == nums[13]
}

/// Validate a producer tax ID in either CPF or CNPJ form.
///
/// Punctuation is ignored: "529.982.247-25" and "52998224725" are the same
/// identifier.
pub fn validate_cpf_cnpj(raw: &str) -> Result<(), &'static str> {
    let digits = normalize_tax_id(raw);
    match digits.len() {
        11 if is_valid_cpf(&digits) => Ok(()),
        14 if is_valid_cnpj(&digits) => Ok(()),
        _ => Err("CPF ou CNPJ inválido"),
    }
}

// ============================================================================
// Land Allocation
// ============================================================================

/// Check that the allocated area categories fit within the declared total.
///
/// Equality is allowed, and so is an unallocated remainder. Additional area
/// categories extend the slice without changing the rule.
pub fn validate_area_allocation(total: Decimal, allocated: &[Decimal]) -> Result<(), &'static str> {
    let sum: Decimal = allocated.iter().copied().sum();
    if sum > total {
        return Err("Área agricultável + vegetação não pode exceder a área total");
    }
    Ok(())
}

// ============================================================================
// Entity Validators
// ============================================================================

/// Validate a producer payload.
pub fn validate_producer_input(input: &ProducerInput) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if input.name.trim().is_empty() {
        issues.push(FieldIssue::new("name", "Nome é obrigatório"));
    } else if input.name.chars().count() > 100 {
        issues.push(FieldIssue::new(
            "name",
            "Nome deve ter no máximo 100 caracteres",
        ));
    }

    if input.cpf_cnpj.trim().is_empty() {
        issues.push(FieldIssue::new("cpf_cnpj", "CPF ou CNPJ é obrigatório"));
    } else if let Err(message) = validate_cpf_cnpj(&input.cpf_cnpj) {
        issues.push(FieldIssue::new("cpf_cnpj", message));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validate a farm payload, including the land allocation refinement.
///
/// The refinement is a predicate over the whole record and only runs once
/// every per-field check has passed; a violation is reported against
/// `arable_area`.
pub fn validate_farm_input(input: &FarmInput) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    let name_len = input.name.trim().chars().count();
    if name_len < 3 {
        issues.push(FieldIssue::new(
            "name",
            "Nome deve ter pelo menos 3 caracteres",
        ));
    } else if name_len > 100 {
        issues.push(FieldIssue::new(
            "name",
            "Nome deve ter no máximo 100 caracteres",
        ));
    }

    let city_len = input.city.trim().chars().count();
    if city_len < 2 {
        issues.push(FieldIssue::new(
            "city",
            "Cidade deve ter pelo menos 2 caracteres",
        ));
    } else if city_len > 50 {
        issues.push(FieldIssue::new(
            "city",
            "Cidade deve ter no máximo 50 caracteres",
        ));
    }

    if input.state.chars().count() != 2 {
        issues.push(FieldIssue::new(
            "state",
            "Estado deve ter exatamente 2 caracteres",
        ));
    }

    if input.total_area <= Decimal::ZERO {
        issues.push(FieldIssue::new(
            "total_area",
            "Área total deve ser maior que zero",
        ));
    }
    if input.arable_area < Decimal::ZERO {
        issues.push(FieldIssue::new(
            "arable_area",
            "Área agricultável não pode ser negativa",
        ));
    }
    if input.vegetation_area < Decimal::ZERO {
        issues.push(FieldIssue::new(
            "vegetation_area",
            "Área de vegetação não pode ser negativa",
        ));
    }

    if issues.is_empty() {
        if let Err(message) = validate_area_allocation(
            input.total_area,
            &[input.arable_area, input.vegetation_area],
        ) {
            issues.push(FieldIssue::new("arable_area", message));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validate a crop payload.
pub fn validate_crop_input(input: &CropInput) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    let name_len = input.name.trim().chars().count();
    if name_len == 0 {
        issues.push(FieldIssue::new("name", "Nome é obrigatório"));
    } else if name_len > 100 {
        issues.push(FieldIssue::new(
            "name",
            "Nome deve ter no máximo 100 caracteres",
        ));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validate a harvest payload.
pub fn validate_harvest_input(input: &HarvestInput) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    let name_len = input.name.trim().chars().count();
    if name_len == 0 {
        issues.push(FieldIssue::new("name", "Nome é obrigatório"));
    } else if name_len > 100 {
        issues.push(FieldIssue::new(
            "name",
            "Nome deve ter no máximo 100 caracteres",
        ));
    }

    if !(2000..=2100).contains(&input.year) {
        issues.push(FieldIssue::new("year", "Ano deve estar entre 2000 e 2100"));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validate an association payload.
pub fn validate_planting_input(input: &PlantingInput) -> Result<(), Vec<FieldIssue>> {
    let mut issues = Vec::new();

    if input.farm_id.is_nil() {
        issues.push(FieldIssue::new("farm_id", "Fazenda é obrigatória"));
    }
    if input.crop_id.is_nil() {
        issues.push(FieldIssue::new("crop_id", "Cultura é obrigatória"));
    }
    if input.harvest_id.is_nil() {
        issues.push(FieldIssue::new("harvest_id", "Safra é obrigatória"));
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}
