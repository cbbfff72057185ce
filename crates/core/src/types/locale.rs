//! Site locales.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A language the public site is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Uzbek (default).
    #[default]
    Uz,
    /// Russian.
    Ru,
    /// English.
    En,
}

impl Locale {
    /// All locales the site is rendered in.
    pub const ALL: [Self; 3] = [Self::Uz, Self::Ru, Self::En];

    /// Resolve a `lang` query value, falling back to the default for
    /// anything unrecognised.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("ru") => Self::Ru,
            Some(v) if v.eq_ignore_ascii_case("en") => Self::En,
            _ => Self::Uz,
        }
    }

    /// BCP 47 language tag.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Uz => "uz",
            Self::Ru => "ru",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
