//! Numeric-text rule for long identifiers
//!
//! Numeric cells lose precision or flip to scientific notation beyond ~15
//! significant digits, which corrupts long identifiers such as national ID
//! or account numbers. Cells that trip the rule get a plain-text display
//! format in the output.

use crate::reader::CellValue;

/// Largest integer digit count a numeric cell can display faithfully.
const MAX_PLAIN_DIGITS: usize = 15;

/// True when `value` is numeric and its integer part has more than 15
/// decimal digits. Applied per cell by the writer.
pub fn needs_text_format(value: &CellValue) -> bool {
    match value {
        CellValue::Number(n) => integer_digits(*n) > MAX_PLAIN_DIGITS,
        _ => false,
    }
}

fn integer_digits(n: f64) -> usize {
    format!("{:.0}", n.abs().trunc()).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_digits_trigger_text_format() {
        assert!(needs_text_format(&CellValue::Number(1234567890123456.0)));
    }

    #[test]
    fn test_fifteen_digits_do_not() {
        assert!(!needs_text_format(&CellValue::Number(123456789012345.0)));
    }

    #[test]
    fn test_sign_does_not_count_as_digit() {
        assert!(needs_text_format(&CellValue::Number(-1234567890123456.0)));
        assert!(!needs_text_format(&CellValue::Number(-123456789012345.0)));
    }

    #[test]
    fn test_fraction_is_ignored() {
        assert!(!needs_text_format(&CellValue::Number(0.123456789012345678)));
    }

    #[test]
    fn test_text_and_empty_cells_never_trigger() {
        assert!(!needs_text_format(&CellValue::Text(
            "12345678901234567890".to_string()
        )));
        assert!(!needs_text_format(&CellValue::Empty));
    }
}
