//! ISO 4217 currency code as passed through to the provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper-cased currency code. No table lookup is performed; the provider is
/// the authority on which codes it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub const DEFAULT: &'static str = "EUR";

    /// Normalizes caller input, falling back to EUR when absent or blank.
    pub fn normalize(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            Some(code) if !code.is_empty() => Self(code.to_uppercase()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_is_uppercased() {
        assert_eq!(CurrencyCode::normalize(Some("eur")).as_str(), "EUR");
        assert_eq!(CurrencyCode::normalize(Some(" usd ")).as_str(), "USD");
    }

    #[test]
    fn test_currency_defaults_to_eur() {
        assert_eq!(CurrencyCode::normalize(None).as_str(), "EUR");
        assert_eq!(CurrencyCode::normalize(Some("  ")).as_str(), "EUR");
    }
}
