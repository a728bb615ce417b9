use crate::error::QrisError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A transaction amount ready to be written into tag `54`.
///
/// Always a non-empty string of ASCII digits, expressed in whole units of the
/// payload's currency (rupiah for QRIS). There are no minor units: `25000`
/// means twenty-five thousand rupiah.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amount(String);

impl Amount {
    pub fn new(digits: &str) -> Result<Self, QrisError> {
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(digits.to_string()))
        } else {
            Err(QrisError::ValidationError(format!(
                "Amount '{digits}' must be a non-empty string of digits"
            )))
        }
    }

    /// Normalizes free-form user input such as `"Rp 25.000"` into `25000`.
    ///
    /// Every non-digit character is dropped and leading zeros are stripped,
    /// keeping a single `0` for all-zero input. Returns `None` when the input
    /// holds no digit at all.
    pub fn normalize(input: &str) -> Option<Self> {
        let digits: String = input.trim().chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        match digits.trim_start_matches('0') {
            "" => Some(Self("0".to_string())),
            significant => Some(Self(significant.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = QrisError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value <= Decimal::ZERO {
            return Err(QrisError::ValidationError(
                "Amount must be positive".to_string(),
            ));
        }
        if !value.fract().is_zero() {
            return Err(QrisError::ValidationError(format!(
                "Amount {value} must be in whole currency units"
            )));
        }
        Self::new(&value.trunc().normalize().to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
