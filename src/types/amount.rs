//! Base-unit amount type
//!
//! Chain amounts are integers denominated in an asset's smallest indivisible
//! unit. A [`BaseAmount`] pairs that integer with the decimal exponent it was
//! scaled by, so `2_000_000` at 8 decimals reads as `0.02` RUNE.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// An amount expressed in an asset's smallest indivisible unit.
///
/// Amounts are arbitrary-precision integers, never floats: a decimal input
/// such as `"0.02"` is scaled by `10^decimal` on construction and only ever
/// converted back to decimal form for display.
///
/// # Examples
///
/// ```
/// use bigdecimal::BigDecimal;
/// use std::str::FromStr;
/// use thorscan::BaseAmount;
///
/// // 0.02 RUNE in base units (8 decimals)
/// let fee = BaseAmount::from_asset_amount(&BigDecimal::from_str("0.02").unwrap(), 8);
/// assert_eq!(fee.amount().to_string(), "2000000");
/// assert_eq!(fee.decimal(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseAmount {
    #[serde(with = "bigint_string")]
    amount: BigInt,
    decimal: u8,
}

impl BaseAmount {
    /// Create a base amount from an already-scaled integer quantity.
    pub fn new(amount: impl Into<BigInt>, decimal: u8) -> Self {
        Self {
            amount: amount.into(),
            decimal,
        }
    }

    /// Zero base units at the given precision.
    pub fn zero(decimal: u8) -> Self {
        Self {
            amount: BigInt::zero(),
            decimal,
        }
    }

    /// Parse a base-unit integer string (e.g. the digits of `"2000000rune"`).
    ///
    /// Returns `None` if the string is not a plain decimal integer.
    pub fn from_base_str(digits: &str, decimal: u8) -> Option<Self> {
        let amount: BigInt = digits.parse().ok()?;
        Some(Self { amount, decimal })
    }

    /// Scale a decimal asset amount into base units: `value * 10^decimal`.
    ///
    /// Fractional remainder below one base unit is truncated.
    pub fn from_asset_amount(value: &BigDecimal, decimal: u8) -> Self {
        // 1 * 10^decimal, expressed as a BigDecimal with negative scale
        let factor = BigDecimal::new(BigInt::from(1), -(decimal as i64));
        let (amount, _) = (value * factor).with_scale(0).into_bigint_and_exponent();
        Self { amount, decimal }
    }

    /// The raw integer quantity in base units.
    pub fn amount(&self) -> &BigInt {
        &self.amount
    }

    /// The decimal exponent this amount was scaled by.
    pub fn decimal(&self) -> u8 {
        self.decimal
    }

    /// Convert back to a decimal asset amount: `amount / 10^decimal`.
    pub fn to_asset_amount(&self) -> BigDecimal {
        BigDecimal::new(self.amount.clone(), self.decimal as i64)
    }

    /// Whether the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl std::fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount)
    }
}

/// Serialize `BigInt` as a decimal string so amounts survive JSON without
/// precision loss.
mod bigint_string {
    use num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
