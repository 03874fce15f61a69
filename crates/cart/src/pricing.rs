//! Pricing configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! Both are optional; defaults apply when unset.
//!
//! - `MERCATO_TAX_RATE` - fractional tax rate applied to the subtotal
//!   (default: `0.05`)
//! - `MERCATO_DELIVERY_FEE` - flat delivery fee charged on non-empty carts
//!   (default: `5.00`)

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use mercato_core::Money;

const TAX_RATE_VAR: &str = "MERCATO_TAX_RATE";
const DELIVERY_FEE_VAR: &str = "MERCATO_DELIVERY_FEE";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Pricing knobs for the cart engine.
///
/// One tax rate applies uniformly across the application - there is a single
/// source of truth here, not a per-screen constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Fractional tax rate applied to the subtotal.
    pub tax_rate: Decimal,
    /// Flat delivery fee, charged iff the cart is non-empty.
    pub delivery_fee: Money,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(5, 2),
            delivery_fee: Money::from_major(5),
        }
    }
}

impl PricingConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but does not parse, or is
    /// out of range (tax rate outside `[0, 1]`, negative delivery fee).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let tax_rate = match std::env::var(TAX_RATE_VAR) {
            Ok(raw) => parse_rate(TAX_RATE_VAR, &raw)?,
            Err(_) => defaults.tax_rate,
        };
        let delivery_fee = match std::env::var(DELIVERY_FEE_VAR) {
            Ok(raw) => parse_fee(DELIVERY_FEE_VAR, &raw)?,
            Err(_) => defaults.delivery_fee,
        };

        Ok(Self {
            tax_rate,
            delivery_fee,
        })
    }
}

fn parse_rate(key: &str, raw: &str) -> Result<Decimal, ConfigError> {
    let rate = Decimal::from_str(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("tax rate must be within [0, 1], got {rate}"),
        ));
    }
    Ok(rate)
}

fn parse_fee(key: &str, raw: &str) -> Result<Money, ConfigError> {
    let fee = Decimal::from_str(raw.trim())
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if fee < Decimal::ZERO {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("delivery fee must not be negative, got {fee}"),
        ));
    }
    Ok(Money::new(fee))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PricingConfig::default();
        assert_eq!(config.tax_rate, Decimal::new(5, 2));
        assert_eq!(config.delivery_fee, Money::from_major(5));
    }

    #[test]
    fn test_parse_rate_valid() {
        assert_eq!(parse_rate("TEST", "0.08").unwrap(), Decimal::new(8, 2));
    }

    #[test]
    fn test_parse_rate_out_of_range() {
        assert!(parse_rate("TEST", "1.5").is_err());
        assert!(parse_rate("TEST", "-0.05").is_err());
    }

    #[test]
    fn test_parse_rate_garbage() {
        let err = parse_rate("TEST", "five percent").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_parse_fee_valid() {
        assert_eq!(parse_fee("TEST", "4.50").unwrap(), Money::from_cents(450));
    }

    #[test]
    fn test_parse_fee_negative() {
        assert!(parse_fee("TEST", "-1").is_err());
    }
}
