use mars_paper_core::Price;
use serde::{Deserialize, Serialize};

/// A product in the catalogue.
///
/// `title_key` and `description_key` are translation keys, not display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub slug: String,
    pub title_key: String,
    pub description_key: String,
    pub price_per_unit: Price,
    pub unit_type: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "super::nullable_list")]
    pub features: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
}
