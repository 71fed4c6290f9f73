//! Tempo - Playback Session
//!
//! Platform-agnostic queue and transport state machine for Tempo.
//!
//! This crate provides:
//! - Play queue (insertion order, duplicates allowed)
//! - Transport (current track, play/pause, position, media duration)
//! - Next/previous navigation under shuffle and repeat policies
//! - Volume (0-100, clamped)
//! - Observers and a typed event log for presentation surfaces
//!
//! # Architecture
//!
//! `tempo-playback` holds no audio code. The media clock (a browser audio
//! element, a CLI ticker) reports position and duration through
//! `set_current_time` / `set_duration` and asks for `play_next` when a track
//! ends. Every command is total: there are no error paths, only no-ops.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use tempo_core::{Track, TrackId};
//! use tempo_playback::{PlaybackSession, PlaybackState};
//! use std::time::Duration;
//!
//! let mut session = PlaybackSession::default();
//!
//! let tracks = vec![
//!     Track::new(TrackId::new("t1"), "Blue Hour", "Nadia Sol", Duration::from_secs(214)),
//!     Track::new(TrackId::new("t2"), "Tidewater", "Nadia Sol", Duration::from_secs(187)),
//! ];
//!
//! // Replace the queue and start at the first row
//! session.play_tracks(tracks, 0);
//! assert_eq!(session.playback_state(), PlaybackState::Playing);
//!
//! session.play_next();
//! assert_eq!(session.current_track().map(|t| t.id.as_str()), Some("t2"));
//! ```
//!
//! # Example: Shuffle and Repeat
//!
//! ```rust
//! use tempo_playback::{PlaybackConfig, PlaybackSession, RepeatMode};
//!
//! // Seeded shuffle gives reproducible picks
//! let mut session = PlaybackSession::new(PlaybackConfig {
//!     shuffle_seed: Some(42),
//!     ..Default::default()
//! });
//!
//! session.toggle_shuffle();
//! session.set_repeat_mode(RepeatMode::All);
//! ```
//!
//! # Example: Observing Changes
//!
//! ```rust
//! use tempo_playback::PlaybackSession;
//! use std::sync::{Arc, Mutex};
//!
//! let mut session = PlaybackSession::default();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! session.subscribe(Box::new(move |snapshot| {
//!     sink.lock().unwrap().push(snapshot.volume);
//! }));
//!
//! session.set_volume(150);
//! assert_eq!(*seen.lock().unwrap(), vec![100]);
//! ```

mod events;
mod progress;
mod queue;
mod session;
mod shuffle;
pub mod types;
mod volume;

#[cfg(feature = "wasm")]
pub mod wasm;

// Public exports
pub use events::{Observer, PlaybackEvent, SubscriptionId, MAX_PENDING_EVENTS};
pub use progress::{format_time, progress_percent};
pub use queue::Queue;
pub use session::PlaybackSession;
pub use shuffle::{pick_index, rng_from_seed, ShuffleRng};
pub use types::{PlaybackConfig, PlaybackState, RepeatMode, SessionSnapshot};
pub use volume::{Volume, DEFAULT_VOLUME, MAX_VOLUME};
