/// Album domain type
use crate::types::{AlbumId, ArtistId, Track};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog album with its tracks in disc order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    #[serde(default)]
    pub cover_url: String,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default, alias = "songs")]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub genre: String,
}

impl Album {
    /// Sum of all track durations
    pub fn total_duration(&self) -> Duration {
        self.tracks.iter().map(|t| t.duration).sum()
    }
}
