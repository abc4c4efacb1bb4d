//! CPF/CNPJ checksum validation and progressive formatting.
//!
//! Every entry point strips non-digit characters first, so masked input
//! (`529.982.247-25`) and raw input (`52998224725`) behave the same.

use crate::domain::model::{Document, DocumentKind};
use crate::utils::error::{Result, ToolkitError};
use std::fmt;
use std::str::FromStr;

const CPF_MASK: &[(usize, &str)] = &[(3, "."), (6, "."), (9, "-")];
const CNPJ_MASK: &[(usize, &str)] = &[(2, "."), (5, "."), (8, "/"), (12, "-")];

pub fn only_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Picks the document kind from the digit count alone, without checksums.
pub fn detect_kind(input: &str) -> Option<DocumentKind> {
    DocumentKind::from_digit_count(only_digits(input).len())
}

pub fn is_valid_cpf(input: &str) -> bool {
    is_valid_as(input, DocumentKind::Cpf)
}

pub fn is_valid_cnpj(input: &str) -> bool {
    is_valid_as(input, DocumentKind::Cnpj)
}

pub fn is_valid_document(input: &str) -> bool {
    detect_kind(input).is_some_and(|kind| is_valid_as(input, kind))
}

fn is_valid_as(input: &str, kind: DocumentKind) -> bool {
    let digits = to_digit_vec(input);
    digits.len() == kind.digit_count() && checksum_matches(&digits, kind)
}

fn checksum_matches(digits: &[u32], kind: DocumentKind) -> bool {
    match kind {
        DocumentKind::Cpf => check_cpf(digits),
        DocumentKind::Cnpj => check_cnpj(digits),
    }
}

/// Masks the input as the user types: CPF layout up to 11 digits, CNPJ
/// layout from 12 to 14. Digits past the 14th are dropped.
pub fn format_document(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(14);

    if digits.len() <= 11 {
        apply_mask(&digits, CPF_MASK)
    } else {
        apply_mask(&digits, CNPJ_MASK)
    }
}

/// Inserts each separator right before the digit at its offset, so a
/// separator only appears once a digit follows it.
pub(crate) fn apply_mask(digits: &str, mask: &[(usize, &str)]) -> String {
    let mut out = String::with_capacity(digits.len() + 2 * mask.len());
    for (index, digit) in digits.chars().enumerate() {
        if let Some((_, separator)) = mask.iter().find(|(offset, _)| *offset == index) {
            out.push_str(separator);
        }
        out.push(digit);
    }
    out
}

impl Document {
    pub fn parse(input: &str) -> Result<Self> {
        let digits = only_digits(input);
        let values = to_digit_vec(&digits);

        let Some(kind) = DocumentKind::from_digit_count(values.len()) else {
            return Err(invalid(
                input,
                format!(
                    "expected {} (CPF) or {} (CNPJ) digits, got {}",
                    DocumentKind::Cpf.digit_count(),
                    DocumentKind::Cnpj.digit_count(),
                    values.len()
                ),
            ));
        };

        if all_identical(&values) {
            return Err(invalid(input, "all digits are identical".to_string()));
        }

        if !checksum_matches(&values, kind) {
            return Err(invalid(input, format!("{} check digits do not match", kind)));
        }

        Ok(Document { kind, digits })
    }

    pub fn formatted(&self) -> String {
        format_document(&self.digits)
    }
}

impl FromStr for Document {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self> {
        Document::parse(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

fn invalid(input: &str, reason: String) -> ToolkitError {
    ToolkitError::InvalidDocument {
        value: input.to_string(),
        reason,
    }
}

fn to_digit_vec(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_identical(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

fn check_cpf(digits: &[u32]) -> bool {
    if all_identical(digits) {
        return false;
    }
    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

// Weights run from len+1 down to 2.
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r,
    }
}

fn check_cnpj(digits: &[u32]) -> bool {
    if all_identical(digits) {
        return false;
    }
    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}

// Weights cycle 2..=9 starting from the rightmost digit.
fn cnpj_check_digit(digits: &[u32]) -> u32 {
    let last = digits.len() - 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (2 + ((last - i) as u32 % 8)))
        .sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
