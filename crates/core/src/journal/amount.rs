//! Tolerant parsing of operator-entered monetary figures.
//!
//! Monetary fields coming from forms are coerced rather than rejected:
//! anything that is not a finite number becomes "not recorded".

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Parses a monetary figure, returning `None` for blanks and garbage.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Decimal::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(_) => match Decimal::from_scientific(trimmed) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("Ignoring non-numeric amount '{}': {}", trimmed, e);
                None
            }
        },
    }
}

/// Serde adapter accepting numbers, numeric strings, blanks and null.
pub fn deserialize_lenient_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(number)) => parse_amount(&number.to_string()),
        Some(Value::String(text)) => parse_amount(&text),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[derive(Deserialize)]
    struct Form {
        #[serde(default, deserialize_with = "deserialize_lenient_amount")]
        amount: Option<Decimal>,
    }

    fn amount_of(json: &str) -> Option<Decimal> {
        serde_json::from_str::<Form>(json).unwrap().amount
    }

    #[test]
    fn test_parse_amount_accepts_plain_and_scientific() {
        assert_eq!(parse_amount("1500.50"), Some(dec!(1500.50)));
        assert_eq!(parse_amount(" -42 "), Some(dec!(-42)));
        assert_eq!(parse_amount("1e3"), Some(dec!(1000)));
    }

    #[test]
    fn test_parse_amount_coerces_garbage_to_none() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("Infinity"), None);
    }

    #[test]
    fn test_lenient_deserializer() {
        assert_eq!(amount_of(r#"{"amount": 0.1}"#), Some(dec!(0.1)));
        assert_eq!(amount_of(r#"{"amount": 250}"#), Some(dec!(250)));
        assert_eq!(amount_of(r#"{"amount": "99.5"}"#), Some(dec!(99.5)));
        assert_eq!(amount_of(r#"{"amount": "12abc"}"#), None);
        assert_eq!(amount_of(r#"{"amount": ""}"#), None);
        assert_eq!(amount_of(r#"{"amount": null}"#), None);
        assert_eq!(amount_of(r#"{"amount": true}"#), None);
        assert_eq!(amount_of(r#"{}"#), None);
    }
}
