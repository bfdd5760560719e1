// src/config.rs
use log::{info, warn};
use serde::Serialize;
use std::env;

/// Minimum revenue-to-rent ratio for a submarket to be worth arbitraging.
pub const DEFAULT_MULTIPLE_THRESHOLD: f64 = 1.5;
/// Booking platform host fee, charged on gross revenue.
pub const DEFAULT_SERVICE_FEE_RATE: f64 = 0.029;
/// Furnishing cost per square foot when buying outright.
pub const DEFAULT_FURNISHINGS_PRICE_PER_SQFT: f64 = 8.0;
pub const DEFAULT_PORT: u16 = 3030;

/// Tunables for the calculators. Read once at startup and shared read-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatorConfig {
    pub multiple_threshold: f64,
    pub service_fee_rate: f64,
    pub furnishings_price_per_sqft: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            multiple_threshold: DEFAULT_MULTIPLE_THRESHOLD,
            service_fee_rate: DEFAULT_SERVICE_FEE_RATE,
            furnishings_price_per_sqft: DEFAULT_FURNISHINGS_PRICE_PER_SQFT,
        }
    }
}

impl CalculatorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Missing or invalid values fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CalculatorConfig::default();
        let config = CalculatorConfig {
            multiple_threshold: read_non_negative(&lookup, "MULTIPLE_THRESHOLD", defaults.multiple_threshold),
            service_fee_rate: read_non_negative(&lookup, "SERVICE_FEE_RATE", defaults.service_fee_rate),
            furnishings_price_per_sqft: read_non_negative(
                &lookup,
                "FURNISHINGS_PRICE_PER_SQFT",
                defaults.furnishings_price_per_sqft,
            ),
        };
        info!("Calculator config: {:?}", config);
        config
    }
}

fn read_non_negative<F>(lookup: &F, key: &str, default: f64) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            _ => {
                warn!("${} has invalid value {:?}, defaulting to {}", key, raw, default);
                default
            }
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("PORT must be a number, got {:?}: {}", raw, e))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };
        Ok(ServerConfig { port })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = CalculatorConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.multiple_threshold, 1.5);
        assert_eq!(config.service_fee_rate, 0.029);
        assert_eq!(config.furnishings_price_per_sqft, 8.0);
    }

    #[test]
    fn test_overrides_are_read() {
        let config = CalculatorConfig::from_lookup(lookup_from(&[
            ("MULTIPLE_THRESHOLD", "2.0"),
            ("SERVICE_FEE_RATE", " 0.03 "),
            ("FURNISHINGS_PRICE_PER_SQFT", "10"),
        ]));
        assert_eq!(config.multiple_threshold, 2.0);
        assert_eq!(config.service_fee_rate, 0.03);
        assert_eq!(config.furnishings_price_per_sqft, 10.0);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = CalculatorConfig::from_lookup(lookup_from(&[
            ("MULTIPLE_THRESHOLD", "lots"),
            ("SERVICE_FEE_RATE", "-0.1"),
            ("FURNISHINGS_PRICE_PER_SQFT", "inf"),
        ]));
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_port() {
        assert_eq!(ServerConfig::from_lookup(lookup_from(&[])).unwrap().port, 3030);
        assert_eq!(ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap().port, 8080);
        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
    }
}
