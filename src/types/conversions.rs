use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

// Subgraph BigDecimal/BigInt fields arrive as JSON strings. Parse through
// rust_decimal first so malformed input fails loudly instead of becoming NaN.
pub fn decimal_str_to_f64(value: &str) -> Result<f64, ConversionError> {
    let decimal = Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|e| ConversionError::InvalidDecimal(format!("{value:?}: {e}")))?;

    decimal
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConversionError::NotRepresentable(value.to_string()))
}

pub fn int_str_to_u64(value: &str) -> Result<u64, ConversionError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConversionError::InvalidInteger(format!("{value:?}: {e}")))
}

/// Lowercased hex identifier as the subgraph stores them (pair/token/account ids).
pub fn normalize_id(id: &str) -> String {
    id.trim().to_lowercase()
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),
    #[error("decimal not representable as finite f64: {0}")]
    NotRepresentable(String),
    #[error("invalid integer: {0}")]
    InvalidInteger(String),
}

/// Serde adapter for string-encoded BigDecimal fields.
pub mod decimal_str {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::decimal_str_to_f64(&raw).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for optional string-encoded BigDecimal fields.
pub mod opt_decimal_str {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::decimal_str_to_f64(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// Serde adapter for string-encoded BigInt fields (timestamps, counters).
pub mod int_str {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::int_str_to_u64(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(decimal_str_to_f64("0").unwrap(), 0.0);
        assert_eq!(decimal_str_to_f64("120.5").unwrap(), 120.5);
        assert_eq!(decimal_str_to_f64("-3.25").unwrap(), -3.25);
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(decimal_str_to_f64("1.5e3").unwrap(), 1500.0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(decimal_str_to_f64("not-a-number").is_err());
        assert!(decimal_str_to_f64("").is_err());
    }

    #[test]
    fn parses_big_int_strings() {
        assert_eq!(int_str_to_u64("1620000000").unwrap(), 1_620_000_000);
        assert!(int_str_to_u64("12.5").is_err());
    }

    #[test]
    fn normalizes_ids() {
        assert_eq!(normalize_id(" 0xABCdef0123 "), "0xabcdef0123".to_string());
    }
}
