use mars_paper_core::GalleryIcon;
use serde::{Deserialize, Deserializer, Serialize};

/// A card in the gallery section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub title_key: String,
    pub description_key: String,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_icon")]
    pub icon_name: Option<GalleryIcon>,
}

impl GalleryItem {
    /// Whether this item shows `icon`.
    #[must_use]
    pub fn has_icon(&self, icon: &GalleryIcon) -> bool {
        self.icon_name.as_ref() == Some(icon)
    }
}

/// Rows written before icons were validated may hold any name (or a
/// capitalised one). Unknown names read back as no icon.
fn lenient_icon<'de, D>(deserializer: D) -> Result<Option<GalleryIcon>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| GalleryIcon::parse(&name).ok()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_capitalised_and_unknown_icons() {
        let item: GalleryItem = serde_json::from_value(serde_json::json!({
            "title_key": "gallery_factory",
            "description_key": "gallery_factory_desc",
            "category": "production",
            "icon_name": "Factory"
        }))
        .unwrap();
        assert_eq!(item.icon_name, Some(GalleryIcon::Factory));

        let item: GalleryItem = serde_json::from_value(serde_json::json!({
            "title_key": "gallery_x",
            "description_key": "gallery_x_desc",
            "category": "misc",
            "icon_name": "Sparkles"
        }))
        .unwrap();
        assert_eq!(item.icon_name, None);
    }

    #[test]
    fn test_writes_lowercase_icon() {
        let item = GalleryItem {
            title_key: "gallery_truck".to_string(),
            description_key: "gallery_truck_desc".to_string(),
            category: "delivery".to_string(),
            image_url: None,
            icon_name: Some(GalleryIcon::Truck),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["icon_name"], "truck");
        assert!(value["image_url"].is_null());
    }
}
