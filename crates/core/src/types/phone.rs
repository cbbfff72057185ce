//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains something other than digits and a leading `+`.
    #[error("phone number may only contain digits and a leading +")]
    InvalidCharacter,
    /// Too few or too many digits.
    #[error("phone number must have between {min} and {max} digits")]
    DigitCount {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count.
        max: usize,
    },
}

/// A phone number as typed into the site's forms.
///
/// Accepts an optional leading `+` followed by 9 to 15 ASCII digits, the
/// same shape as `^\+?\d{9,15}$`. Surrounding whitespace is ignored; inner
/// spaces or dashes are rejected.
///
/// ## Examples
///
/// ```
/// use mars_paper_core::Phone;
///
/// assert!(Phone::parse("+998901234567").is_ok());
/// assert!(Phone::parse("901234567").is_ok());
///
/// assert!(Phone::parse("90123456").is_err());     // 8 digits
/// assert!(Phone::parse("+99890abc4567").is_err()); // letters
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 9;
    /// Maximum number of digits.
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`PhoneError`] if the input is empty, contains characters
    /// other than digits and one leading `+`, or has the wrong digit count.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PhoneError::InvalidCharacter);
        }

        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(PhoneError::DigitCount {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Phone {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Phone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
