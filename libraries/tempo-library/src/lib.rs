//! Tempo Library
//!
//! Catalog, playlist and personal-library services that feed the playback
//! session with track lists.
//!
//! # Architecture
//!
//! - **Catalog**: read-only tracks, artists, albums and editorial playlists
//!   loaded from a JSON document, with lookups and search
//! - **Playlists**: in-memory store of user playlists
//! - **Library**: a user's likes and follows, plus listing sort orders
//!
//! # Example
//!
//! ```rust
//! use tempo_library::{Catalog, SearchFilter};
//!
//! let catalog = Catalog::from_json_str(r#"{
//!     "tracks": [
//!         { "id": "t1", "title": "Blue Hour", "artist": "Nadia Sol", "duration": 214 }
//!     ]
//! }"#)?;
//!
//! let results = catalog.search("blue", SearchFilter::Tracks);
//! assert_eq!(results.tracks.len(), 1);
//! # Ok::<(), tempo_library::LibraryError>(())
//! ```

mod error;

pub mod catalog;
pub mod library;
pub mod playlists;

pub use catalog::{Catalog, SearchFilter, SearchResults};
pub use error::{LibraryError, Result};
pub use library::{sort_tracks, SortOption, UserLibrary};
pub use playlists::{PlaylistStore, PlaylistUpdate};
