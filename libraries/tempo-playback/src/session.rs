//! Playback session - queue and transport state machine
//!
//! Owns the queue, the current track, transport flags and position. Every
//! command runs to completion before observers see the new snapshot, and no
//! command fails: missing preconditions resolve to a no-op, out-of-range
//! numbers are clamped.

use crate::{
    events::{EventLog, Observer, Observers, PlaybackEvent, SubscriptionId},
    progress::progress_percent,
    queue::Queue,
    shuffle::{pick_index, rng_from_seed, ShuffleRng},
    types::{PlaybackConfig, PlaybackState, RepeatMode, SessionSnapshot},
    volume::Volume,
};
use rand::RngCore;
use std::time::Duration;
use tempo_core::{Track, TrackId};
use tracing::debug;

/// Playback session
///
/// Holds:
/// - Queue (insertion order = playback order, duplicates allowed)
/// - Current track (may or may not be a queue member)
/// - Transport flags (playing, shuffle, repeat mode)
/// - Position and media duration reported by the clock
/// - Volume (0-100)
pub struct PlaybackSession {
    // State
    current_track: Option<Track>,
    is_playing: bool,
    position: Duration,
    duration: Duration,

    // Queue
    queue: Queue,

    // Settings
    volume: Volume,
    shuffle: bool,
    repeat: RepeatMode,
    restart_threshold: Duration,

    // Shuffle random source
    rng: ShuffleRng,

    // Subscribers and event log for UI synchronization
    observers: Observers,
    pending_events: EventLog,
}

impl PlaybackSession {
    /// Create new session, seeding shuffle from `config.shuffle_seed`
    pub fn new(config: PlaybackConfig) -> Self {
        let rng = rng_from_seed(config.shuffle_seed);
        Self::with_rng(config, rng)
    }

    /// Create new session with an explicit shuffle random source
    pub fn with_rng(config: PlaybackConfig, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            queue: Queue::new(),
            volume: Volume::new(i32::from(config.volume)),
            shuffle: config.shuffle,
            repeat: config.repeat,
            restart_threshold: config.restart_threshold,
            rng: Box::new(rng),
            observers: Observers::default(),
            pending_events: EventLog::default(),
        }
    }

    // ===== Transport =====

    /// Select a track and start playing it from the beginning
    ///
    /// The track does not have to be in the queue.
    pub fn set_current_track(&mut self, track: Track) {
        self.load_track(track);
        self.commit();
    }

    /// Flip the playing flag
    ///
    /// Allowed without a current track; the views hide the button in that case.
    pub fn toggle_play_pause(&mut self) {
        self.is_playing = !self.is_playing;
        debug!(is_playing = self.is_playing, "Toggled play/pause");
        self.emit(PlaybackEvent::StateChanged {
            is_playing: self.is_playing,
        });
        self.commit();
    }

    /// Advance to the next track under the active shuffle/repeat policy
    ///
    /// - Repeat One: restart the current track
    /// - Shuffle: uniformly random queue index (may pick the current one)
    /// - Otherwise: following index; at the end wrap (Repeat All) or stay
    ///
    /// Returns `true` if a track was loaded or restarted, `false` for a no-op.
    pub fn play_next(&mut self) -> bool {
        let Some(current_id) = self.current_track.as_ref().map(|t| t.id.clone()) else {
            return false;
        };
        if self.queue.is_empty() {
            return false;
        }

        let current_index = self.queue.position_of(&current_id);

        if self.repeat == RepeatMode::One {
            self.restart_current();
            self.commit();
            return true;
        }

        let len = self.queue.len();
        let next_index = if self.shuffle {
            match pick_index(self.rng.as_mut(), len) {
                Some(index) => index,
                None => return false,
            }
        } else {
            match current_index {
                Some(index) if index + 1 < len => index + 1,
                Some(_) if self.repeat == RepeatMode::All => 0,
                Some(index) => index,
                // Not queued: behaves as index -1, so the next one is the first
                None => 0,
            }
        };

        if Some(next_index) == current_index && self.repeat != RepeatMode::All {
            debug!(track_id = %current_id, "End of queue, staying on current track");
            return false;
        }

        let Some(track) = self.queue.get(next_index).cloned() else {
            return false;
        };
        self.load_track(track);
        self.commit();
        true
    }

    /// Go back to the previous track, or restart the current one
    ///
    /// Past the restart threshold (3s by default) only the position is reset.
    /// Otherwise the previous queue index is loaded, wrapping from the first
    /// entry to the last regardless of repeat mode.
    pub fn play_previous(&mut self) {
        let Some(current_id) = self.current_track.as_ref().map(|t| t.id.clone()) else {
            return;
        };
        if self.queue.is_empty() {
            return;
        }

        if self.position > self.restart_threshold {
            self.position = Duration::ZERO;
            debug!(track_id = %current_id, "Restarting current track");
            self.emit(PlaybackEvent::PositionReset);
            self.commit();
            return;
        }

        let len = self.queue.len();
        let prev_index = match self.queue.position_of(&current_id) {
            Some(index) if index > 0 => index - 1,
            _ => len - 1,
        };

        let Some(track) = self.queue.get(prev_index).cloned() else {
            return;
        };
        self.load_track(track);
        self.commit();
    }

    /// Replace the queue and start playing `tracks[start_index]`
    ///
    /// This is what listing views do when a row is clicked. If `start_index`
    /// is out of range only the queue is replaced.
    pub fn play_tracks(&mut self, tracks: Vec<Track>, start_index: usize) {
        let start = tracks.get(start_index).cloned();
        self.set_queue(tracks);
        if let Some(track) = start {
            self.set_current_track(track);
        }
    }

    // ===== Position =====

    /// Set playback position (driven by the media clock, not validated)
    pub fn set_current_time(&mut self, position: Duration) {
        self.position = position;
        self.emit(PlaybackEvent::PositionChanged {
            position_ms: position.as_millis() as u64,
        });
        self.commit();
    }

    /// Set media duration (reported by the media clock, not validated)
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.emit(PlaybackEvent::DurationChanged {
            duration_ms: duration.as_millis() as u64,
        });
        self.commit();
    }

    // ===== Volume =====

    /// Set volume, clamped to 0-100
    pub fn set_volume(&mut self, level: i32) {
        self.volume.set_level(level);
        self.emit(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
        });
        self.commit();
    }

    // ===== Shuffle & Repeat =====

    /// Flip shuffle
    ///
    /// Queue order is left alone so turning shuffle off returns to a
    /// predictable sequence.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        debug!(shuffle = self.shuffle, "Toggled shuffle");
        self.emit(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
        self.commit();
    }

    /// Set repeat mode
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat = mode;
        debug!(repeat = %mode, "Set repeat mode");
        self.emit(PlaybackEvent::RepeatModeChanged { mode });
        self.commit();
    }

    // ===== Queue Management =====

    /// Replace the queue
    ///
    /// Current track, playing flag and position are untouched; pair with
    /// `set_current_track` (or use `play_tracks`) to start playback.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue.replace(tracks);
        debug!(length = self.queue.len(), "Queue replaced");
        self.emit_queue_changed();
        self.commit();
    }

    /// Append track to the end of the queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
        self.emit_queue_changed();
        self.commit();
    }

    /// Remove every queue entry with the given id
    ///
    /// The current track stays selected even if it was one of the removed
    /// entries.
    pub fn remove_from_queue(&mut self, track_id: &TrackId) {
        let removed = self.queue.remove_all(track_id);
        debug!(track_id = %track_id, removed, "Removed from queue");
        self.emit_queue_changed();
        self.commit();
    }

    /// Empty the queue (current track and playing flag are kept)
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
        self.commit();
    }

    // ===== State Queries =====

    /// Get currently selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether the transport is running
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Derived transport state
    pub fn playback_state(&self) -> PlaybackState {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    /// Get current volume level (0-100)
    pub fn volume(&self) -> u8 {
        self.volume.level()
    }

    /// Whether shuffle is on
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    /// Get current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// Get current playback position
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Get media duration last reported by the clock
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get all tracks in queue order
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// Tracks after the current one (the whole queue if it is not queued)
    pub fn up_next(&self) -> &[Track] {
        match &self.current_track {
            Some(track) => self.queue.after(&track.id),
            None => self.queue.tracks(),
        }
    }

    /// Position as a percentage of the current track's length
    ///
    /// 0 without a track or for a zero-length track.
    pub fn progress_percent(&self) -> f64 {
        self.current_track
            .as_ref()
            .map(|t| progress_percent(self.position, t.duration))
            .unwrap_or(0.0)
    }

    /// Immutable copy of the whole state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            volume: self.volume.level(),
            shuffle: self.shuffle,
            repeat_mode: self.repeat,
            position: self.position,
            duration: self.duration,
            queue: self.queue.tracks().to_vec(),
        }
    }

    // ===== Observers & Events =====

    /// Register an observer, called synchronously after every committed command
    pub fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Drain all pending events
    ///
    /// Returns the events emitted since the last drain, oldest first. Runs of
    /// position or duration reports keep only the latest, and at most
    /// `MAX_PENDING_EVENTS` are retained.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.pending_events.drain()
    }

    /// Discard pending events without reading them
    pub fn clear_events(&mut self) {
        self.pending_events.clear();
    }

    /// Number of events waiting to be drained
    pub fn pending_event_count(&self) -> usize {
        self.pending_events.len()
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Select `track`, reset position and start playing (no notification)
    fn load_track(&mut self, track: Track) {
        let previous_track_id = self.current_track.as_ref().map(|t| t.id.to_string());
        let track_id = track.id.to_string();
        debug!(
            track_id = %track_id,
            previous = ?previous_track_id,
            "Track changed"
        );

        self.current_track = Some(track);
        self.position = Duration::ZERO;
        self.emit(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
        self.start_playing();
    }

    /// Restart the current track from 0 and make sure it plays
    fn restart_current(&mut self) {
        self.position = Duration::ZERO;
        debug!("Repeating current track");
        self.emit(PlaybackEvent::PositionReset);
        self.start_playing();
    }

    fn start_playing(&mut self) {
        if !self.is_playing {
            self.is_playing = true;
            self.emit(PlaybackEvent::StateChanged { is_playing: true });
        }
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    fn emit_queue_changed(&mut self) {
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    /// Publish the new state to observers
    fn commit(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&snapshot);
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}
