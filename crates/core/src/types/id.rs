//! Store-assigned record identifiers.
//!
//! Every mutable collection item carries an id assigned by the resource
//! store. The application never invents one: create operations omit it and
//! update/delete operations must echo back an id the store handed out.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing a [`RecordId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordIdError {
    /// The id is empty after trimming.
    #[error("record id cannot be empty")]
    Empty,
}

/// An opaque record id.
///
/// The store may use UUIDs or integer sequences; both are carried as text.
/// When deserializing, JSON strings and integers are accepted.
///
/// ```
/// use mars_paper_core::RecordId;
///
/// let id: RecordId = serde_json::from_str("42").unwrap();
/// assert_eq!(id.as_str(), "42");
///
/// let id: RecordId = serde_json::from_str("\"7f9c\"").unwrap();
/// assert_eq!(id.as_str(), "7f9c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Parse a `RecordId` from a form value or path segment.
    ///
    /// # Errors
    ///
    /// Returns [`RecordIdError::Empty`] if the input is blank.
    pub fn parse(s: &str) -> Result<Self, RecordIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(RecordIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = RecordIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        let text = match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s,
            Raw::Signed(n) => n.to_string(),
            Raw::Unsigned(n) => n.to_string(),
        };

        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
