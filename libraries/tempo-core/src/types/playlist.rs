/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User or editorial playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Artwork reference
    #[serde(default)]
    pub cover_url: String,

    /// Tracks in playback order (duplicates allowed)
    #[serde(default, alias = "songs")]
    pub tracks: Vec<Track>,

    /// Owner
    pub created_by: UserId,

    /// Visible to other users
    #[serde(default)]
    pub is_public: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new empty, public playlist
    pub fn new(
        owner: UserId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description: description.into(),
            cover_url: String::new(),
            tracks: Vec::new(),
            created_by: owner,
            is_public: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a track is in the playlist
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }

    /// Mark the playlist as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
