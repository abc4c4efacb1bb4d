//! Input masks for currency, grouped integers and phone numbers.

use crate::core::document::{apply_mask, only_digits};

const PHONE_MASK: &[(usize, &str)] = &[(0, "("), (2, ") "), (6, "-")];
const MOBILE_MASK: &[(usize, &str)] = &[(0, "("), (2, ") "), (7, "-")];

// Keeps typed amounts inside i64 cents.
const MAX_CURRENCY_DIGITS: usize = 15;

/// `123456` → `R$ 1.234,56`.
pub fn format_currency(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(abs / 100), abs % 100)
}

/// Treats every typed digit as cents, the way a currency field fills from
/// the right. Digits past the fifteenth are ignored.
pub fn mask_currency_input(input: &str) -> String {
    let mut digits = only_digits(input);
    if digits.is_empty() {
        return String::new();
    }
    digits.truncate(MAX_CURRENCY_DIGITS);

    match digits.parse::<i64>() {
        Ok(cents) => format_currency(cents),
        Err(_) => String::new(),
    }
}

/// Reads a masked amount back into cents. Accepts `R$ 1.234,56`,
/// `1234,5`, `-R$ 10,00` and `R$ -10,00`; returns `None` when there are
/// no digits.
pub fn parse_currency(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    let first_digit = trimmed.find(|c: char| c.is_ascii_digit()).unwrap_or(trimmed.len());
    let negative = trimmed[..first_digit].contains('-');

    let (integer, fraction) = match trimmed.rfind(',') {
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
        None => (trimmed, ""),
    };

    let integer = only_digits(integer);
    let mut fraction = only_digits(fraction);
    if integer.is_empty() && fraction.is_empty() {
        return None;
    }
    fraction.truncate(2);
    while fraction.len() < 2 {
        fraction.push('0');
    }

    let whole: i64 = if integer.is_empty() {
        0
    } else {
        integer.parse().ok()?
    };
    let cents = whole
        .checked_mul(100)?
        .checked_add(fraction.parse::<i64>().ok()?)?;

    Some(if negative { -cents } else { cents })
}

/// `1234567` → `1.234.567`.
pub fn format_number(value: i64) -> String {
    let grouped = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Landline layout `(NN) NNNN-NNNN` up to 10 digits, mobile layout
/// `(NN) NNNNN-NNNN` at 11. Digits past the eleventh are dropped.
pub fn mask_phone(input: &str) -> String {
    let mut digits = only_digits(input);
    digits.truncate(11);

    if digits.len() <= 10 {
        apply_mask(&digits, PHONE_MASK)
    } else {
        apply_mask(&digits, MOBILE_MASK)
    }
}

fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "R$ 0,00");
        assert_eq!(format_currency(5), "R$ 0,05");
        assert_eq!(format_currency(123456), "R$ 1.234,56");
        assert_eq!(format_currency(100000000), "R$ 1.000.000,00");
        assert_eq!(format_currency(-1000), "-R$ 10,00");
    }

    #[test]
    fn test_mask_currency_input() {
        assert_eq!(mask_currency_input(""), "");
        assert_eq!(mask_currency_input("abc"), "");
        assert_eq!(mask_currency_input("1"), "R$ 0,01");
        assert_eq!(mask_currency_input("123456"), "R$ 1.234,56");
        assert_eq!(mask_currency_input("R$ 1.234,567"), "R$ 12.345,67");
        assert_eq!(mask_currency_input("000150"), "R$ 1,50");
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("R$ 1.234,56"), Some(123456));
        assert_eq!(parse_currency("1234,5"), Some(123450));
        assert_eq!(parse_currency("-R$ 10,00"), Some(-1000));
        assert_eq!(parse_currency("R$ -10,00"), Some(-1000));
        assert_eq!(parse_currency("R$-1.234,56"), Some(-123456));
        assert_eq!(parse_currency("R$ 10,00-"), Some(1000));
        assert_eq!(parse_currency("R$ 7"), Some(700));
        assert_eq!(parse_currency("R$ "), None);
        assert_eq!(parse_currency(""), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
        assert_eq!(format_number(-45000), "-45.000");
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "(1");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("1134567890"), "(11) 3456-7890");
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(mask_phone("(11) 98765-43219"), "(11) 98765-4321");
    }
}
