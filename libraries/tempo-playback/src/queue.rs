//! Play queue
//!
//! Storage order is playback order. Shuffle never touches it; it only changes
//! how the session picks the next index.

use tempo_core::{Track, TrackId};

/// Ordered list of tracks eligible for next/previous traversal
///
/// Tracks are not de-duplicated: the same id may appear several times.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Replace the whole queue
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
    }

    /// Append track to the end
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove every entry with the given id
    ///
    /// Relative order of the remaining entries is kept. Returns the number of
    /// entries removed.
    pub fn remove_all(&mut self, track_id: &TrackId) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != track_id);
        before - self.tracks.len()
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Index of the first entry with the given id
    pub fn position_of(&self, track_id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == track_id)
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Entries after the first occurrence of `track_id`
    ///
    /// Returns the whole queue when the id is not queued.
    pub fn after(&self, track_id: &TrackId) -> &[Track] {
        match self.position_of(track_id) {
            Some(index) => &self.tracks[index + 1..],
            None => &self.tracks,
        }
    }

    /// All tracks in playback order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
