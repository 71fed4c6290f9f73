/// User domain type
use crate::types::{ArtistId, PlaylistId, TrackId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account as reported by the authentication provider
///
/// `is_premium` is informational only; nothing in playback is gated on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub username: String,

    /// Contact email
    pub email: String,

    /// Avatar reference
    #[serde(default)]
    pub photo_url: String,

    /// Profile text
    #[serde(default)]
    pub bio: String,

    /// Elevated entitlement flag
    #[serde(default)]
    pub is_premium: bool,

    /// Owned playlists
    #[serde(default)]
    pub playlists: Vec<PlaylistId>,

    /// Liked tracks
    #[serde(default, alias = "likedSongs")]
    pub liked_tracks: Vec<TrackId>,

    /// Followed artists
    #[serde(default)]
    pub followed_artists: Vec<ArtistId>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a fresh, non-premium account
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: UserId::generate(),
            username: username.into(),
            email: email.into(),
            photo_url: String::new(),
            bio: String::new(),
            is_premium: false,
            playlists: Vec::new(),
            liked_tracks: Vec::new(),
            followed_artists: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
