//! Read-only music catalog
//!
//! Loaded once from a JSON document and queried by the listing views and the
//! CLI. Seeds for the playback queue come from here.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tempo_core::{Album, AlbumId, Artist, ArtistId, Playlist, PlaylistId, Track, TrackId};
use tracing::info;

/// Categories a search can be restricted to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchFilter {
    #[default]
    All,
    Tracks,
    Artists,
    Albums,
    Playlists,
}

impl SearchFilter {
    fn includes(self, other: SearchFilter) -> bool {
        self == SearchFilter::All || self == other
    }
}

/// Search hits grouped by category, each in catalog order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    pub tracks: Vec<&'a Track>,
    pub artists: Vec<&'a Artist>,
    pub albums: Vec<&'a Album>,
    pub playlists: Vec<&'a Playlist>,
}

impl SearchResults<'_> {
    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.artists.is_empty()
            && self.albums.is_empty()
            && self.playlists.is_empty()
    }

    /// Total number of hits across categories
    pub fn len(&self) -> usize {
        self.tracks.len() + self.artists.len() + self.albums.len() + self.playlists.len()
    }
}

/// Catalog document
///
/// JSON shape: `{ "tracks": [...], "artists": [...], "albums": [...], "playlists": [...] }`.
/// Missing sections default to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, alias = "songs")]
    tracks: Vec<Track>,
    #[serde(default)]
    artists: Vec<Artist>,
    #[serde(default)]
    albums: Vec<Album>,
    #[serde(default)]
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Build a catalog from already loaded entities
    pub fn new(
        tracks: Vec<Track>,
        artists: Vec<Artist>,
        albums: Vec<Album>,
        playlists: Vec<Playlist>,
    ) -> Self {
        Self {
            tracks,
            artists,
            albums,
            playlists,
        }
    }

    /// Parse a catalog document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;

        info!(
            path = %path.display(),
            tracks = catalog.tracks.len(),
            artists = catalog.artists.len(),
            albums = catalog.albums.len(),
            playlists = catalog.playlists.len(),
            "Loaded catalog"
        );

        Ok(catalog)
    }

    // ===== Lookups =====

    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    pub fn artist(&self, id: &ArtistId) -> Option<&Artist> {
        self.artists.iter().find(|a| &a.id == id)
    }

    pub fn album(&self, id: &AlbumId) -> Option<&Album> {
        self.albums.iter().find(|a| &a.id == id)
    }

    pub fn playlist(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Tracks credited to an artist, in catalog order
    pub fn tracks_by_artist(&self, artist_id: &ArtistId) -> Vec<&Track> {
        self.tracks
            .iter()
            .filter(|t| &t.artist_id == artist_id)
            .collect()
    }

    /// Albums credited to an artist, in catalog order
    pub fn albums_by_artist(&self, artist_id: &ArtistId) -> Vec<&Album> {
        self.albums
            .iter()
            .filter(|a| &a.artist_id == artist_id)
            .collect()
    }

    // ===== Search =====

    /// Case-insensitive substring search
    ///
    /// Tracks match on title or artist name, artists on name, albums on title
    /// or artist name, playlists on name. An empty query matches everything.
    pub fn search(&self, query: &str, filter: SearchFilter) -> SearchResults<'_> {
        let needle = query.to_lowercase();
        let hit = |text: &str| text.to_lowercase().contains(&needle);

        let mut results = SearchResults::default();

        if filter.includes(SearchFilter::Tracks) {
            results.tracks = self
                .tracks
                .iter()
                .filter(|t| hit(&t.title) || hit(&t.artist))
                .collect();
        }
        if filter.includes(SearchFilter::Artists) {
            results.artists = self.artists.iter().filter(|a| hit(&a.name)).collect();
        }
        if filter.includes(SearchFilter::Albums) {
            results.albums = self
                .albums
                .iter()
                .filter(|a| hit(&a.title) || hit(&a.artist_name))
                .collect();
        }
        if filter.includes(SearchFilter::Playlists) {
            results.playlists = self.playlists.iter().filter(|p| hit(&p.name)).collect();
        }

        results
    }
}
