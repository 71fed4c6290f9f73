//! Playlist store
//!
//! In-memory collection of user playlists. Every mutation bumps the
//! playlist's `updated_at`; unknown ids are reported as
//! `LibraryError::PlaylistNotFound`.

use crate::error::{LibraryError, Result};
use tempo_core::{Playlist, PlaylistId, Track, TrackId, UserId};
use tracing::debug;

/// Partial update applied by `PlaylistStore::update`
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
}

/// User playlists in creation order
#[derive(Debug, Clone, Default)]
pub struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing playlists (e.g. from the catalog)
    pub fn with_playlists(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    /// Create a new empty, public playlist and return its id
    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        owner: UserId,
    ) -> PlaylistId {
        let playlist = Playlist::new(owner, name, description);
        let id = playlist.id.clone();
        debug!(playlist_id = %id, name = %playlist.name, "Created playlist");
        self.playlists.push(playlist);
        id
    }

    /// Delete a playlist
    pub fn delete(&mut self, id: &PlaylistId) -> Result<Playlist> {
        let index = self
            .playlists
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(id.clone()))?;
        debug!(playlist_id = %id, "Deleted playlist");
        Ok(self.playlists.remove(index))
    }

    /// Apply a partial update
    pub fn update(&mut self, id: &PlaylistId, update: PlaylistUpdate) -> Result<()> {
        let playlist = self.get_mut(id)?;
        if let Some(name) = update.name {
            playlist.name = name;
        }
        if let Some(description) = update.description {
            playlist.description = description;
        }
        if let Some(is_public) = update.is_public {
            playlist.is_public = is_public;
        }
        playlist.touch();
        Ok(())
    }

    /// Append a track (duplicates allowed)
    pub fn add_track(&mut self, id: &PlaylistId, track: Track) -> Result<()> {
        let playlist = self.get_mut(id)?;
        debug!(playlist_id = %id, track_id = %track.id, "Added track to playlist");
        playlist.tracks.push(track);
        playlist.touch();
        Ok(())
    }

    /// Remove every entry of a track; returns how many were removed
    pub fn remove_track(&mut self, id: &PlaylistId, track_id: &TrackId) -> Result<usize> {
        let playlist = self.get_mut(id)?;
        let before = playlist.tracks.len();
        playlist.tracks.retain(|t| &t.id != track_id);
        playlist.touch();
        Ok(before - playlist.tracks.len())
    }

    /// Get playlist by ID
    pub fn get(&self, id: &PlaylistId) -> Option<&Playlist> {
        self.playlists.iter().find(|p| &p.id == id)
    }

    /// All playlists in creation order
    pub fn all(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Playlists owned by a user
    pub fn owned_by<'a>(&'a self, owner: &'a UserId) -> impl Iterator<Item = &'a Playlist> + 'a {
        self.playlists.iter().filter(move |p| &p.created_by == owner)
    }

    fn get_mut(&mut self, id: &PlaylistId) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(id.clone()))
    }
}
