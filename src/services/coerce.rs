// src/services/coerce.rs
use crate::models::RawAmount;
use log::debug;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// How user-entered amounts are turned into numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoercionMode {
    /// Anything unparsable silently becomes zero.
    #[default]
    Lenient,
    /// Amounts must be finite, non-negative numbers.
    Strict,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountError {
    pub field: String,
    pub value: String,
    pub reason: &'static str,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid value {} for '{}': {}", self.value, self.field, self.reason)
    }
}

impl std::error::Error for AmountError {}

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("leading number pattern is valid")
    })
}

/// Reads the longest numeric prefix of `text`, ignoring leading whitespace.
/// `"1,200"` reads as 1 and `"abc"` as nothing, like a browser's parseFloat.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let m = leading_number().find(trimmed)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lenient coercion: absent, unparsable and non-finite input is zero.
pub fn lenient_amount(raw: Option<&RawAmount>) -> f64 {
    let value = match raw {
        None => 0.0,
        Some(RawAmount::Number(n)) if n.is_finite() => *n,
        Some(RawAmount::Number(_)) => 0.0,
        Some(RawAmount::Text(s)) => parse_float_prefix(s).unwrap_or(0.0),
        Some(RawAmount::Other(_)) => 0.0,
    };
    if let Some(raw) = raw {
        if value == 0.0 {
            debug!("Coerced {:?} to 0", raw);
        }
    }
    value
}

/// Strict coercion: absent is still zero, but anything else must be a
/// complete, finite, non-negative number.
pub fn strict_amount(field: &str, raw: Option<&RawAmount>) -> Result<f64, AmountError> {
    let fail = |value: String, reason: &'static str| AmountError {
        field: field.to_string(),
        value,
        reason,
    };
    let value = match raw {
        None => return Ok(0.0),
        Some(RawAmount::Number(n)) => *n,
        Some(RawAmount::Text(s)) if s.trim().is_empty() => return Ok(0.0),
        Some(RawAmount::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| fail(format!("{:?}", s), "not a number"))?,
        Some(RawAmount::Other(v)) => return Err(fail(v.to_string(), "not a number")),
    };
    if !value.is_finite() {
        return Err(fail(value.to_string(), "not a finite number"));
    }
    if value < 0.0 {
        return Err(fail(value.to_string(), "must not be negative"));
    }
    Ok(value)
}

/// Coerces one named field according to `mode`.
pub fn amount(mode: CoercionMode, field: &str, raw: Option<&RawAmount>) -> Result<f64, AmountError> {
    match mode {
        CoercionMode::Lenient => Ok(lenient_amount(raw)),
        CoercionMode::Strict => strict_amount(field, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("2000"), Some(2000.0));
        assert_eq!(parse_float_prefix("  12.5 "), Some(12.5));
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix("1,200"), Some(1.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-3"), Some(-3.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("$200"), None);
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
    }

    #[test]
    fn test_lenient_never_fails() {
        assert_eq!(lenient_amount(None), 0.0);
        assert_eq!(lenient_amount(Some(&RawAmount::Number(190.0))), 190.0);
        assert_eq!(lenient_amount(Some(&RawAmount::Number(f64::NAN))), 0.0);
        assert_eq!(lenient_amount(Some(&"oops".into())), 0.0);
        assert_eq!(lenient_amount(Some(&"75".into())), 75.0);
        assert_eq!(lenient_amount(Some(&RawAmount::Other(json!(true)))), 0.0);
    }

    #[test]
    fn test_strict_rejects_garbage() {
        assert_eq!(strict_amount("rent", None), Ok(0.0));
        assert_eq!(strict_amount("rent", Some(&" ".into())), Ok(0.0));
        assert_eq!(strict_amount("rent", Some(&"2000".into())), Ok(2000.0));

        let err = strict_amount("rent", Some(&"12abc".into())).unwrap_err();
        assert_eq!(err.field, "rent");
        assert_eq!(err.reason, "not a number");

        let err = strict_amount("power", Some(&RawAmount::Number(-5.0))).unwrap_err();
        assert_eq!(err.reason, "must not be negative");

        let err = strict_amount("power", Some(&"inf".into())).unwrap_err();
        assert_eq!(err.reason, "not a finite number");

        assert!(strict_amount("power", Some(&RawAmount::Other(json!([1])))).is_err());
    }

    #[test]
    fn test_mode_dispatch() {
        let raw: RawAmount = "12abc".into();
        assert_eq!(amount(CoercionMode::Lenient, "x", Some(&raw)), Ok(12.0));
        assert!(amount(CoercionMode::Strict, "x", Some(&raw)).is_err());
    }
}
