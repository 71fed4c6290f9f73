//! Tempo Core
//!
//! Platform-agnostic domain types and error handling shared by every Tempo crate.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Artist`, `Album`, `Playlist`, `User`, `Preferences`
//! - **Identifiers**: string newtypes (`TrackId`, `PlaylistId`, ...)
//! - **Error Handling**: unified `TempoError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tempo_core::types::{Track, TrackId, User};
//! use std::time::Duration;
//!
//! let user = User::new("alice", "alice@example.com");
//! assert!(!user.is_premium);
//!
//! let track = Track::new(TrackId::new("t1"), "Blue Hour", "Nadia Sol", Duration::from_secs(214));
//! assert_eq!(track.duration.as_secs(), 214);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod serde_duration;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TempoError};

pub use types::{
    Album, AlbumId, Artist, ArtistId, Language, Playlist, PlaylistId, Preferences, ThemeMode,
    Track, TrackId, User, UserId,
};
