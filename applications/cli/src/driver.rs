/// Simulated media clock
///
/// Stands in for an audio element: advances the position while playing,
/// reports the media duration and asks for the next track when one ends.
use std::sync::Arc;
use std::time::Duration;
use tempo_playback::{format_time, PlaybackEvent, PlaybackSession};
use tokio::sync::Mutex;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or nothing loaded
    Idle,
    /// Position moved forward within the current track
    Advanced,
    /// The track ended and another one (or the same, repeated) was loaded
    TrackEnded,
    /// The track ended with nothing left to play; playback is paused
    QueueFinished,
}

pub struct SessionDriver {
    session: Arc<Mutex<PlaybackSession>>,
    speed: f64,
}

impl SessionDriver {
    /// `speed` is simulated seconds per wall-clock second
    pub fn new(session: Arc<Mutex<PlaybackSession>>, speed: f64) -> Self {
        Self { session, speed }
    }

    /// Advance the clock by `elapsed` wall-clock time
    pub async fn tick(&self, elapsed: Duration) -> TickOutcome {
        let mut session = self.session.lock().await;

        if !session.is_playing() {
            return TickOutcome::Idle;
        }
        let Some(track) = session.current_track() else {
            return TickOutcome::Idle;
        };
        let track_id = track.id.clone();
        let length = track.duration;

        if session.duration() != length {
            session.set_duration(length);
        }

        let position = session.position() + elapsed.mul_f64(self.speed);
        if position < length {
            session.set_current_time(position);
            return TickOutcome::Advanced;
        }

        session.set_current_time(length);
        if !session.play_next() {
            // End of queue without repeat
            session.toggle_play_pause();
            tracing::info!(track_id = %track_id, "Reached end of queue");
            return TickOutcome::QueueFinished;
        }

        if let Some(next) = session.current_track() {
            let next_length = next.duration;
            session.set_duration(next_length);
        }
        TickOutcome::TrackEnded
    }

    /// Run the clock for `wall` time, ticking every `interval`
    ///
    /// Stops early once the queue is finished.
    pub async fn run(&self, wall: Duration, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        // The first tick of a tokio interval completes immediately
        ticker.tick().await;

        let mut remaining = wall;
        while !remaining.is_zero() {
            ticker.tick().await;
            let step = interval.min(remaining);
            remaining = remaining.saturating_sub(step);

            let outcome = self.tick(step).await;
            self.log_events().await;

            if outcome == TickOutcome::QueueFinished {
                break;
            }
        }
    }

    /// Log and discard track-level events since the last call
    async fn log_events(&self) {
        let mut session = self.session.lock().await;
        for event in session.drain_events() {
            if let PlaybackEvent::TrackChanged { track_id, .. } = event {
                let title = session
                    .current_track()
                    .filter(|t| t.id.as_str() == track_id)
                    .map(|t| format!("{} - {} ({})", t.artist, t.title, format_time(t.duration)))
                    .unwrap_or_else(|| track_id.clone());
                tracing::info!(track_id = %track_id, "Now playing: {}", title);
            }
        }
    }
}
