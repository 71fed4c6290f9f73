/// Command implementations shared by the binary and tests
use crate::error::{CliError, Result};
use crate::state::AppState;
use std::fmt::Write;
use std::time::Duration;
use tempo_core::{AlbumId, ArtistId, PlaylistId, Track};
use tempo_library::{Catalog, SearchFilter};
use tempo_playback::{format_time, RepeatMode};

/// Collection a play or queue command is seeded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    Album(AlbumId),
    Playlist(PlaylistId),
    Artist(ArtistId),
}

/// Options for `tempo play`
#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub collection: Collection,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub start: usize,
}

/// Track list for a collection, in the order its listing view shows it
pub fn resolve_tracks(catalog: &Catalog, collection: &Collection) -> Result<Vec<Track>> {
    match collection {
        Collection::Album(id) => catalog
            .album(id)
            .map(|album| album.tracks.clone())
            .ok_or_else(|| CliError::unknown("album", id.as_str())),
        Collection::Playlist(id) => catalog
            .playlist(id)
            .map(|playlist| playlist.tracks.clone())
            .ok_or_else(|| CliError::unknown("playlist", id.as_str())),
        Collection::Artist(id) => {
            if catalog.artist(id).is_none() {
                return Err(CliError::unknown("artist", id.as_str()));
            }
            Ok(catalog.tracks_by_artist(id).into_iter().cloned().collect())
        }
    }
}

/// Seed the session from a collection and start playback
///
/// Returns the number of queued tracks.
pub async fn start_playback(state: &AppState, options: &PlayOptions) -> Result<usize> {
    let tracks = resolve_tracks(&state.catalog, &options.collection)?;
    let count = tracks.len();

    let mut session = state.session.lock().await;
    session.set_repeat_mode(options.repeat);
    if options.shuffle != session.shuffle() {
        session.toggle_shuffle();
    }
    session.play_tracks(tracks, options.start);

    tracing::info!(
        tracks = count,
        start = options.start,
        shuffle = options.shuffle,
        repeat = %options.repeat,
        "Queue loaded"
    );

    if session.current_track().is_none() {
        tracing::warn!(start = options.start, "Start index out of range, nothing playing");
    }

    Ok(count)
}

/// Render search results as text
pub fn render_search(catalog: &Catalog, query: &str, filter: SearchFilter) -> String {
    let results = catalog.search(query, filter);
    let mut out = String::new();

    if results.is_empty() {
        let _ = writeln!(out, "No results for \"{}\"", query);
        return out;
    }

    if !results.tracks.is_empty() {
        let _ = writeln!(out, "Tracks:");
        for track in &results.tracks {
            let _ = writeln!(
                out,
                "  {}  {} - {}  {}",
                track.id,
                track.artist,
                track.title,
                format_time(track.duration)
            );
        }
    }
    if !results.artists.is_empty() {
        let _ = writeln!(out, "Artists:");
        for artist in &results.artists {
            let _ = writeln!(out, "  {}  {}", artist.id, artist.name);
        }
    }
    if !results.albums.is_empty() {
        let _ = writeln!(out, "Albums:");
        for album in &results.albums {
            let _ = writeln!(out, "  {}  {} - {}", album.id, album.artist_name, album.title);
        }
    }
    if !results.playlists.is_empty() {
        let _ = writeln!(out, "Playlists:");
        for playlist in &results.playlists {
            let _ = writeln!(
                out,
                "  {}  {} ({} tracks)",
                playlist.id,
                playlist.name,
                playlist.tracks.len()
            );
        }
    }

    out
}

/// Render a collection's queue with `m:ss` durations
pub fn render_queue(catalog: &Catalog, collection: &Collection) -> Result<String> {
    let tracks = resolve_tracks(catalog, collection)?;
    let mut out = String::new();

    for (index, track) in tracks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} - {}  {}",
            index + 1,
            track.artist,
            track.title,
            format_time(track.duration)
        );
    }

    let total: Duration = tracks.iter().map(|t| t.duration).sum();
    let _ = writeln!(out, "{} tracks, {}", tracks.len(), format_time(total));

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempo_core::TrackId;

    fn catalog() -> Catalog {
        Catalog::from_json_str(
            r#"{
                "tracks": [
                    { "id": "t1", "title": "Alpha", "artist": "Mira", "artistId": "a1", "duration": 65 },
                    { "id": "t2", "title": "Beta", "artist": "Mira", "artistId": "a1", "duration": 130 }
                ],
                "artists": [ { "id": "a1", "name": "Mira" } ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn artist_collection_uses_catalog_order() {
        let tracks = resolve_tracks(&catalog(), &Collection::Artist(ArtistId::new("a1"))).unwrap();
        let ids: Vec<&TrackId> = tracks.iter().map(|t| &t.id).collect();
        assert_eq!(ids, vec![&TrackId::new("t1"), &TrackId::new("t2")]);
    }

    #[test]
    fn unknown_album_is_reported() {
        let err = resolve_tracks(&catalog(), &Collection::Album(AlbumId::new("x"))).unwrap_err();
        assert_eq!(err.to_string(), "Unknown album: x");
    }

    #[test]
    fn queue_rendering_formats_durations() {
        let out = render_queue(&catalog(), &Collection::Artist(ArtistId::new("a1"))).unwrap();

        assert!(out.contains("  1. Mira - Alpha  1:05"));
        assert!(out.contains("  2. Mira - Beta  2:10"));
        assert!(out.ends_with("2 tracks, 3:15\n"));
    }

    #[test]
    fn search_rendering_reports_no_results() {
        let out = render_search(&catalog(), "nothing", SearchFilter::All);
        assert_eq!(out, "No results for \"nothing\"\n");
    }
}
