//! Personal library: likes, follows and listing sort orders

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tempo_core::{ArtistId, Track, TrackId, User};
use tracing::debug;

/// Sort orders offered by listing views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Keep the supplied order (most recent first)
    #[default]
    Recent,
    Title,
    Artist,
    Duration,
}

/// Sort tracks for display
///
/// Title and artist compare case-insensitively; the sort is stable so ties
/// keep their supplied order.
pub fn sort_tracks(tracks: &mut [Track], option: SortOption) {
    let by_text = |a: &str, b: &str| -> Ordering { a.to_lowercase().cmp(&b.to_lowercase()) };

    match option {
        SortOption::Recent => {}
        SortOption::Title => tracks.sort_by(|a, b| by_text(&a.title, &b.title)),
        SortOption::Artist => tracks.sort_by(|a, b| {
            by_text(&a.artist, &b.artist).then_with(|| by_text(&a.title, &b.title))
        }),
        SortOption::Duration => tracks.sort_by_key(|t| t.duration),
    }
}

/// A user's likes and follows
#[derive(Debug, Clone)]
pub struct UserLibrary {
    user: User,
}

impl UserLibrary {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn into_user(self) -> User {
        self.user
    }

    /// Like or unlike a track; returns the new liked state
    pub fn toggle_like(&mut self, track_id: &TrackId) -> bool {
        let liked = &mut self.user.liked_tracks;
        let now_liked = if let Some(index) = liked.iter().position(|id| id == track_id) {
            liked.remove(index);
            false
        } else {
            liked.push(track_id.clone());
            true
        };
        debug!(track_id = %track_id, liked = now_liked, "Toggled like");
        now_liked
    }

    pub fn is_liked(&self, track_id: &TrackId) -> bool {
        self.user.liked_tracks.contains(track_id)
    }

    /// Follow an artist; returns false if already followed
    pub fn follow_artist(&mut self, artist_id: &ArtistId) -> bool {
        if self.is_following(artist_id) {
            return false;
        }
        self.user.followed_artists.push(artist_id.clone());
        true
    }

    /// Unfollow an artist; returns false if not followed
    pub fn unfollow_artist(&mut self, artist_id: &ArtistId) -> bool {
        let before = self.user.followed_artists.len();
        self.user.followed_artists.retain(|id| id != artist_id);
        self.user.followed_artists.len() != before
    }

    pub fn is_following(&self, artist_id: &ArtistId) -> bool {
        self.user.followed_artists.contains(artist_id)
    }

    /// Liked tracks as they appear in the catalog
    ///
    /// Liked ids missing from the catalog are skipped.
    pub fn liked_tracks<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Track> {
        catalog
            .tracks()
            .iter()
            .filter(|t| self.is_liked(&t.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn track(id: &str, title: &str, artist: &str, secs: u64) -> Track {
        Track::new(TrackId::new(id), title, artist, Duration::from_secs(secs))
    }

    fn titles(tracks: &[Track]) -> Vec<&str> {
        tracks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn toggle_like_flips_state() {
        let mut library = UserLibrary::new(User::new("sam", "sam@example.com"));
        let id = TrackId::new("t1");

        assert!(library.toggle_like(&id));
        assert!(library.is_liked(&id));
        assert!(!library.toggle_like(&id));
        assert!(!library.is_liked(&id));
    }

    #[test]
    fn follow_is_idempotent() {
        let mut library = UserLibrary::new(User::new("sam", "sam@example.com"));
        let artist = ArtistId::new("a1");

        assert!(library.follow_artist(&artist));
        assert!(!library.follow_artist(&artist));
        assert_eq!(library.user().followed_artists.len(), 1);

        assert!(library.unfollow_artist(&artist));
        assert!(!library.unfollow_artist(&artist));
    }

    #[test]
    fn sort_by_title_ignores_case() {
        let mut tracks = vec![
            track("1", "zephyr", "A", 10),
            track("2", "Aurora", "B", 20),
            track("3", "meadow", "C", 30),
        ];
        sort_tracks(&mut tracks, SortOption::Title);
        assert_eq!(titles(&tracks), vec!["Aurora", "meadow", "zephyr"]);
    }

    #[test]
    fn sort_by_artist_then_title() {
        let mut tracks = vec![
            track("1", "Second", "Bay", 10),
            track("2", "First", "bay", 20),
            track("3", "Only", "Alder", 30),
        ];
        sort_tracks(&mut tracks, SortOption::Artist);
        assert_eq!(titles(&tracks), vec!["Only", "First", "Second"]);
    }

    #[test]
    fn sort_by_duration_and_recent() {
        let mut tracks = vec![
            track("1", "Long", "A", 300),
            track("2", "Short", "A", 90),
        ];

        sort_tracks(&mut tracks, SortOption::Recent);
        assert_eq!(titles(&tracks), vec!["Long", "Short"]);

        sort_tracks(&mut tracks, SortOption::Duration);
        assert_eq!(titles(&tracks), vec!["Short", "Long"]);
    }
}
