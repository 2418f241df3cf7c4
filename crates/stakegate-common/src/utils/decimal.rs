//! Exact decimal helpers
//!
//! Monetary values never pass through `f64` arithmetic. Upstream JSON numbers
//! are captured by their decimal text and parsed into [`BigDecimal`].

use {
    bigdecimal::{num_bigint::Sign, BigDecimal, ParseBigDecimalError},
    std::str::FromStr,
};

pub fn parse_decimal(raw: &str) -> Result<BigDecimal, ParseBigDecimalError> {
    BigDecimal::from_str(raw.trim())
}

/// Renders `value` without exponent notation and without trailing zeros.
pub fn to_plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().as_bigint_and_exponent();
    let mut text = digits.magnitude().to_string();

    if scale <= 0 {
        text.push_str(&"0".repeat(scale.unsigned_abs() as usize));
    } else {
        let scale = scale as usize;
        if text.len() <= scale {
            text = format!("{}{}", "0".repeat(scale - text.len() + 1), text);
        }
        text.insert(text.len() - scale, '.');
    }

    if digits.sign() == Sign::Minus {
        text.insert(0, '-');
    }
    text
}

/// `#[serde(with = "plain")]`: plain decimal strings in both directions.
pub mod plain {
    use super::{parse_decimal, to_plain_string};
    use bigdecimal::BigDecimal;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigDecimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&to_plain_string(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_decimal(&raw).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(deserialize_with = "flexible::deserialize")]`: accepts a JSON
/// string or a JSON number.
pub mod flexible {
    use super::parse_decimal;
    use bigdecimal::BigDecimal;
    use serde::{de, Deserializer};
    use std::fmt;

    struct DecimalVisitor;

    impl<'de> de::Visitor<'de> for DecimalVisitor {
        type Value = BigDecimal;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a decimal number or decimal string")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            parse_decimal(v).map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(BigDecimal::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(BigDecimal::from(v))
        }

        // Display yields the shortest text that round-trips to `v`.
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if !v.is_finite() {
                return Err(E::custom(format!("non-finite decimal {v}")));
            }
            parse_decimal(&v.to_string()).map_err(E::custom)
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DecimalVisitor)
    }
}
