/// Track domain type
use crate::types::{AlbumId, ArtistId, TrackId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A playable catalog item
///
/// Read-only from the playback session's point of view: the session stores
/// and hands back clones, it never edits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Display artist name
    pub artist: String,

    /// Artist reference
    #[serde(default)]
    pub artist_id: ArtistId,

    /// Display album title
    #[serde(default)]
    pub album: String,

    /// Album reference
    #[serde(default)]
    pub album_id: AlbumId,

    /// Track length (whole seconds on the wire)
    #[serde(with = "crate::serde_duration::secs")]
    pub duration: Duration,

    /// Artwork reference
    #[serde(default)]
    pub cover_url: String,

    /// Media reference
    #[serde(default)]
    pub audio_url: String,

    /// Genre label
    #[serde(default)]
    pub genre: String,

    /// Release date
    #[serde(default)]
    pub release_date: Option<NaiveDate>,

    /// Lifetime play count
    #[serde(default)]
    pub plays: u64,
}

impl Track {
    /// Create a track with the metadata the player views need
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            artist_id: ArtistId::default(),
            album: String::new(),
            album_id: AlbumId::default(),
            duration,
            cover_url: String::new(),
            audio_url: String::new(),
            genre: String::new(),
            release_date: None,
            plays: 0,
        }
    }

    /// Attach album metadata
    pub fn with_album(mut self, album_id: AlbumId, album: impl Into<String>) -> Self {
        self.album_id = album_id;
        self.album = album.into();
        self
    }

    /// Attach the artist reference
    pub fn with_artist_id(mut self, artist_id: ArtistId) -> Self {
        self.artist_id = artist_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_catalog_shape() {
        let json = r#"{
            "id": "song-1",
            "title": "Midnight Drive",
            "artist": "The Neon",
            "artistId": "artist-1",
            "album": "City Lights",
            "albumId": "album-1",
            "duration": 245,
            "coverUrl": "https://img/1.jpg",
            "audioUrl": "https://audio/1.mp3",
            "genre": "Synthwave",
            "releaseDate": "2023-05-12",
            "plays": 1200
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id.as_str(), "song-1");
        assert_eq!(track.duration, Duration::from_secs(245));
        assert_eq!(track.artist_id.as_str(), "artist-1");
        assert_eq!(
            track.release_date,
            NaiveDate::from_ymd_opt(2023, 5, 12)
        );
    }

    #[test]
    fn optional_metadata_defaults() {
        let json = r#"{"id":"x","title":"X","artist":"Y","duration":10}"#;
        let track: Track = serde_json::from_str(json).unwrap();

        assert!(track.album.is_empty());
        assert_eq!(track.plays, 0);
        assert_eq!(track.release_date, None);
    }

    #[test]
    fn builder_helpers_fill_references() {
        let track = Track::new(TrackId::new("t"), "T", "A", Duration::from_secs(1))
            .with_album(AlbumId::new("al"), "Album")
            .with_artist_id(ArtistId::new("ar"));

        assert_eq!(track.album, "Album");
        assert_eq!(track.album_id.as_str(), "al");
        assert_eq!(track.artist_id.as_str(), "ar");
    }
}
