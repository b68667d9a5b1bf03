//! Deposit amount parsing and provider formatting.
//!
//! Uses `rust_decimal` so that the two-decimal string sent to the provider is
//! computed on the decimal value the caller wrote, not on a binary float.

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::DomainError;

/// Amount exactly as the caller supplied it: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

/// A validated, strictly positive deposit amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositAmount(Decimal);

impl DepositAmount {
    /// Number of fractional digits the provider expects.
    pub const SCALE: u32 = 2;

    /// Parses and validates a caller-supplied amount.
    pub fn parse(raw: Option<&RawAmount>) -> Result<Self, DomainError> {
        let raw = raw.ok_or_else(|| DomainError::InvalidAmount("amount is required".into()))?;

        let value = match raw {
            RawAmount::Number(n) if !n.is_finite() => {
                return Err(DomainError::InvalidAmount(format!("{n} is not finite")));
            }
            // Display on f64 never uses exponent notation and is the shortest round-trip form.
            RawAmount::Number(n) => parse_decimal(&n.to_string())?,
            RawAmount::Text(s) => parse_decimal(s)?,
        };

        let rounded = value.round_dp_with_strategy(Self::SCALE, RoundingStrategy::MidpointAwayFromZero);
        if rounded <= Decimal::ZERO {
            return Err(DomainError::InvalidAmount(format!(
                "{value} must be greater than zero"
            )));
        }

        Ok(Self(rounded))
    }

    /// Returns the rounded decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Formats the amount as fixed-point with exactly two decimals.
    pub fn to_provider_value(&self) -> String {
        format!("{:.2}", self.0)
    }
}

impl fmt::Display for DepositAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_provider_value())
    }
}

fn parse_decimal(input: &str) -> Result<Decimal, DomainError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidAmount("amount is empty".into()));
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DomainError::InvalidAmount(format!("'{trimmed}' is not a number")))
}
