use serde::{Deserialize, Serialize};

/// A member of the team section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "super::nullable_list")]
    pub achievements: Vec<String>,
}
