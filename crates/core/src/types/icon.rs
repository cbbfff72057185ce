//! Gallery icon identifiers.
//!
//! Gallery cards show a small icon next to their title. The set of icons is
//! closed: an admin picks one of these names, and an unknown name is a
//! validation error rather than a blank space on the page.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for an icon name outside the supported set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown gallery icon: {0}")]
pub struct GalleryIconError(pub String);

/// An icon that can be attached to a gallery item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryIcon {
    Factory,
    Award,
    Users,
    Leaf,
    Truck,
    Camera,
}

impl GalleryIcon {
    /// Every supported icon, in the order the admin form lists them.
    pub const ALL: [Self; 6] = [
        Self::Factory,
        Self::Award,
        Self::Users,
        Self::Leaf,
        Self::Truck,
        Self::Camera,
    ];

    /// Parse an icon name, ignoring case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryIconError`] if the name is not one of [`Self::ALL`].
    pub fn parse(s: &str) -> Result<Self, GalleryIconError> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|icon| icon.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| GalleryIconError(name.to_owned()))
    }

    /// The stored identifier, e.g. `"factory"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Factory => "factory",
            Self::Award => "award",
            Self::Users => "users",
            Self::Leaf => "leaf",
            Self::Truck => "truck",
            Self::Camera => "camera",
        }
    }

    /// The glyph rendered for this icon on the public site.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Factory => "🏭",
            Self::Award => "🏆",
            Self::Users => "👥",
            Self::Leaf => "🌿",
            Self::Truck => "🚚",
            Self::Camera => "📷",
        }
    }
}

impl fmt::Display for GalleryIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GalleryIcon {
    type Err = GalleryIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(GalleryIcon::parse("Factory").unwrap(), GalleryIcon::Factory);
        assert_eq!(GalleryIcon::parse(" truck ").unwrap(), GalleryIcon::Truck);
        assert_eq!(GalleryIcon::parse("CAMERA").unwrap(), GalleryIcon::Camera);
    }

    #[test]
    fn test_parse_unknown() {
        let err = GalleryIcon::parse("Rocket").unwrap_err();
        assert_eq!(err, GalleryIconError("Rocket".to_string()));
    }

    #[test]
    fn test_names_round_trip() {
        for icon in GalleryIcon::ALL {
            assert_eq!(GalleryIcon::parse(icon.as_str()).unwrap(), icon);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&GalleryIcon::Leaf).unwrap();
        assert_eq!(json, "\"leaf\"");
        let parsed: GalleryIcon = serde_json::from_str("\"award\"").unwrap();
        assert_eq!(parsed, GalleryIcon::Award);
    }
}
