/// Artist domain type
use crate::types::ArtistId;
use serde::{Deserialize, Serialize};

/// Catalog artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub verified: bool,
}
