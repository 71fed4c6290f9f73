//! Playback Events
//!
//! Two ways for presentation surfaces to follow the session:
//! - Observers: callbacks invoked synchronously with the new snapshot after
//!   every committed command
//! - Event log: typed `PlaybackEvent`s, drained by the caller when convenient

use crate::types::{RepeatMode, SessionSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of undrained events kept; older ones are dropped first
pub const MAX_PENDING_EVENTS: usize = 256;

/// Events emitted by the playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing flag flipped
    StateChanged {
        /// New value of the playing flag
        is_playing: bool,
    },

    /// A track was selected (also when the same track is selected again)
    ///
    /// Position is reset to 0, so this is a discontinuity for position observers.
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Current track restarted from 0 without changing track
    PositionReset,

    /// Position set by the media clock
    PositionChanged {
        /// New position
        position_ms: u64,
    },

    /// Media duration reported by the media clock
    DurationChanged {
        /// Reported duration
        duration_ms: u64,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// New shuffle flag
        enabled: bool,
    },

    /// Repeat mode changed
    RepeatModeChanged {
        /// New repeat mode
        mode: RepeatMode,
    },

    /// Queue changed (replaced, appended, removed, cleared)
    QueueChanged {
        /// New queue length
        length: usize,
    },
}

/// Callback invoked with the session snapshot after each committed command
pub type Observer = Box<dyn FnMut(&SessionSnapshot) + Send>;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers, notified in subscription order
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Returns false if the id was not registered
    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, snapshot: &SessionSnapshot) {
        for (_, observer) in &mut self.entries {
            observer(snapshot);
        }
    }
}

/// Pending events, bounded for callers that never drain
///
/// Consecutive clock reports collapse into the latest one, and once
/// `MAX_PENDING_EVENTS` is reached the oldest event is dropped.
#[derive(Debug, Default)]
pub(crate) struct EventLog {
    events: VecDeque<PlaybackEvent>,
}

impl EventLog {
    pub(crate) fn push(&mut self, event: PlaybackEvent) {
        if let Some(last) = self.events.back_mut() {
            let same_clock_report = matches!(
                (&*last, &event),
                (PlaybackEvent::PositionChanged { .. }, PlaybackEvent::PositionChanged { .. })
                    | (PlaybackEvent::DurationChanged { .. }, PlaybackEvent::DurationChanged { .. })
            );
            if same_clock_report {
                *last = event;
                return;
            }
        }

        if self.events.len() == MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn clear(&mut self) {
        self.events.clear();
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn empty_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            current_track: None,
            is_playing: false,
            volume: 70,
            shuffle: false,
            repeat_mode: RepeatMode::Off,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            queue: Vec::new(),
        }
    }

    fn counting_observer(counter: &Arc<AtomicUsize>) -> Observer {
        let counter = Arc::clone(counter);
        Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn notify_reaches_every_observer() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut observers = Observers::default();
        observers.subscribe(counting_observer(&count));
        observers.subscribe(counting_observer(&count));

        observers.notify(&empty_snapshot());

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribe_removes_only_that_observer() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut observers = Observers::default();
        let first = observers.subscribe(counting_observer(&count));
        observers.subscribe(counting_observer(&count));

        assert!(observers.unsubscribe(first));
        assert!(!observers.unsubscribe(first));
        assert_eq!(observers.len(), 1);

        observers.notify(&empty_snapshot());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn consecutive_positions_collapse_to_latest() {
        let mut log = EventLog::default();
        log.push(PlaybackEvent::PositionReset);
        for position_ms in 0..1000 {
            log.push(PlaybackEvent::PositionChanged { position_ms });
        }

        assert_eq!(
            log.drain(),
            vec![
                PlaybackEvent::PositionReset,
                PlaybackEvent::PositionChanged { position_ms: 999 },
            ]
        );
    }

    #[test]
    fn interleaved_events_are_not_collapsed() {
        let mut log = EventLog::default();
        log.push(PlaybackEvent::PositionChanged { position_ms: 1 });
        log.push(PlaybackEvent::DurationChanged { duration_ms: 5 });
        log.push(PlaybackEvent::PositionChanged { position_ms: 2 });

        assert_eq!(log.len(), 3);
    }

    #[test]
    fn log_drops_oldest_past_capacity() {
        let mut log = EventLog::default();
        for i in 0..(MAX_PENDING_EVENTS + 10) {
            log.push(PlaybackEvent::StateChanged { is_playing: i % 2 == 0 });
            log.push(PlaybackEvent::QueueChanged { length: i });
        }

        assert_eq!(log.len(), MAX_PENDING_EVENTS);
        let events = log.drain();
        assert_eq!(
            events.last(),
            Some(&PlaybackEvent::QueueChanged {
                length: MAX_PENDING_EVENTS + 9
            })
        );
        assert!(log.is_empty());
    }

    #[test]
    fn subscription_ids_are_not_reused() {
        let mut observers = Observers::default();
        let a = observers.subscribe(Box::new(|_| {}));
        observers.unsubscribe(a);
        let b = observers.subscribe(Box::new(|_| {}));

        assert_ne!(a, b);
    }
}
