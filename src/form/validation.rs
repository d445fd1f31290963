//! Field parsers used at submit time.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::DATE_FORMAT;

/// Longest text the date input accepts (`YYYY-MM-DD`).
pub const DATE_INPUT_MAX_LEN: usize = 10;

/// Largest amount a single expense may carry.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Accepts decimal text denoting an amount greater than zero and at most
/// [`MAX_AMOUNT`].
pub fn parse_amount(input: &str) -> Result<f64, ValidationError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ValidationError::new("Enter a numeric value"))
        .and_then(|value| {
            if value <= 0.0 {
                Err(ValidationError::new("Value must be greater than zero"))
            } else if value > MAX_AMOUNT {
                Err(ValidationError::new(format!("Value must not exceed {MAX_AMOUNT}")))
            } else {
                Ok(value)
            }
        })
}

/// Accepts exactly `YYYY-MM-DD` (no padding, signs or surrounding
/// whitespace) naming a real calendar date.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    if !has_iso_date_shape(input) {
        return Err(ValidationError::new("Use YYYY-MM-DD format"));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| ValidationError::new("Use YYYY-MM-DD format with a real calendar date"))
}

/// Ten ASCII bytes: digits everywhere except `-` at offsets 4 and 7.
fn has_iso_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == DATE_INPUT_MAX_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Trims the description and requires something to remain.
pub fn parse_description(input: &str) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new("Value cannot be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_accepts_decimal_text() {
        assert_eq!(parse_amount(" 12.50 ").unwrap(), 12.5);
    }

    #[test]
    fn amount_rejects_zero_negative_and_garbage() {
        for input in ["0", "-3", "", "abc", "NaN", "inf", "1,5", "1e308", "1000000000000.01"] {
            assert!(parse_amount(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn date_requires_real_calendar_day() {
        assert!(parse_date("2025-02-28").is_ok());
        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2025-02-30").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("2025-4-1").is_err());
        assert!(parse_date("2025-04-011").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn date_rejects_anything_but_plain_iso_shape() {
        for input in [
            "2025- 4- 1",
            "+2025-4-01",
            "2025-4- 01",
            " 2025-04-01",
            "2025-04-01\t",
            "2025/04/01",
            "20250401xx",
            "２025-04-01",
        ] {
            assert!(parse_date(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn amount_cap_is_inclusive() {
        assert_eq!(parse_amount("1000000000000").unwrap(), MAX_AMOUNT);
    }

    #[test]
    fn description_is_trimmed() {
        assert_eq!(parse_description("  Coffee \n").unwrap(), "Coffee");
        assert!(parse_description(" \t ").is_err());
    }
}
