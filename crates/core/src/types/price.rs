//! Non-negative prices in Uzbek so'm.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price must be a number")]
    NotANumber,
    /// The amount is below zero.
    #[error("price cannot be negative")]
    Negative,
}

/// A non-negative amount in so'm.
///
/// Uses decimal arithmetic so that `price_per_unit * quantity` never picks up
/// binary floating point noise.
///
/// ```
/// use mars_paper_core::Price;
///
/// let price = Price::parse("1250000").unwrap();
/// assert_eq!(price.to_string(), "1 250 000");
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount.normalize()))
    }

    /// Parse a price from user input such as `"12500"` or `"12500.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotANumber`] for non-numeric input and
    /// [`PriceError::Negative`] for negative amounts.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| PriceError::NotANumber)?;
        Self::new(amount)
    }

    /// Returns the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Format for display with the currency suffix, e.g. `"1 250 000 so'm"`.
    #[must_use]
    pub fn display_som(&self) -> String {
        format!("{self} so'm")
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    /// Groups the integer part in threes with spaces, as prices are printed
    /// in Uzbekistan.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (text.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(ch);
        }

        match frac_part {
            Some(frac) => write!(f, "{grouped}.{frac}"),
            None => f.write_str(&grouped),
        }
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Price::parse("0").unwrap(), Price::ZERO);
        assert_eq!(
            Price::parse(" 12500.50 ").unwrap().amount(),
            Decimal::new(1_250_050, 2)
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Price::parse(""), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("abc"), Err(PriceError::NotANumber));
        assert_eq!(Price::parse("-0.01"), Err(PriceError::Negative));
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Price::parse("0").unwrap().to_string(), "0");
        assert_eq!(Price::parse("999").unwrap().to_string(), "999");
        assert_eq!(Price::parse("1000").unwrap().to_string(), "1 000");
        assert_eq!(Price::parse("1250000").unwrap().to_string(), "1 250 000");
        assert_eq!(Price::parse("12500.50").unwrap().to_string(), "12 500.5");
    }

    #[test]
    fn test_display_som() {
        assert_eq!(Price::parse("45000").unwrap().display_som(), "45 000 so'm");
    }

    #[test]
    fn test_deserialize_from_number_and_string() {
        let from_number: Price = serde_json::from_str("1500").unwrap();
        let from_string: Price = serde_json::from_str("\"1500\"").unwrap();
        assert_eq!(from_number, from_string);
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }
}
