//! Observer and event log tests
//!
//! Verifies presentation surfaces see each committed command exactly once
//! and that no-op commands stay silent.

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;
use tempo_core::{Track, TrackId};
use tempo_playback::{
    PlaybackConfig, PlaybackEvent, PlaybackSession, RepeatMode, SessionSnapshot,
    MAX_PENDING_EVENTS,
};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .init();
    });
}

fn create_test_track(id: &str) -> Track {
    Track::new(
        TrackId::new(id),
        format!("Track {}", id),
        "Test Artist",
        Duration::from_secs(200),
    )
}

fn recording_session() -> (PlaybackSession, Arc<Mutex<Vec<SessionSnapshot>>>) {
    init_tracing();

    let mut session = PlaybackSession::new(PlaybackConfig {
        shuffle_seed: Some(5),
        ..Default::default()
    });
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    session.subscribe(Box::new(move |snapshot| {
        sink.lock().unwrap().push(snapshot.clone());
    }));

    (session, seen)
}

#[test]
fn test_each_command_notifies_once() {
    let (mut session, seen) = recording_session();

    session.set_queue(vec![create_test_track("1"), create_test_track("2")]);
    session.set_current_track(create_test_track("1"));
    session.set_volume(40);
    session.toggle_shuffle();
    session.set_repeat_mode(RepeatMode::All);
    session.set_current_time(Duration::from_secs(10));
    session.set_duration(Duration::from_secs(200));
    session.toggle_play_pause();
    session.add_to_queue(create_test_track("3"));
    session.remove_from_queue(&TrackId::new("3"));
    session.clear_queue();

    assert_eq!(seen.lock().unwrap().len(), 11);
}

#[test]
fn test_observer_sees_post_command_state() {
    let (mut session, seen) = recording_session();

    session.play_tracks(vec![create_test_track("a"), create_test_track("b")], 0);
    session.play_next();

    let seen = seen.lock().unwrap();
    let last = seen.last().unwrap();
    assert_eq!(last.current_track.as_ref().unwrap().id.as_str(), "b");
    assert!(last.is_playing);
    assert_eq!(last.position, Duration::ZERO);
    assert_eq!(last, &session.snapshot());
}

#[test]
fn test_noop_navigation_notifies_nobody() {
    let (mut session, seen) = recording_session();

    session.play_next();
    session.play_previous();

    assert!(seen.lock().unwrap().is_empty());
    assert!(session.drain_events().is_empty());
}

#[test]
fn test_end_of_queue_noop_notifies_nobody() {
    let (mut session, seen) = recording_session();
    session.play_tracks(vec![create_test_track("a"), create_test_track("b")], 1);
    let count = seen.lock().unwrap().len();

    session.play_next();

    assert_eq!(seen.lock().unwrap().len(), count);
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let (mut session, seen) = recording_session();
    let extra = Arc::new(Mutex::new(0usize));
    let sink = Arc::clone(&extra);
    let id = session.subscribe(Box::new(move |_| {
        *sink.lock().unwrap() += 1;
    }));
    assert_eq!(session.observer_count(), 2);

    session.set_volume(10);
    assert!(session.unsubscribe(id));
    session.set_volume(20);

    assert_eq!(*extra.lock().unwrap(), 1);
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert!(!session.unsubscribe(id));
}

#[test]
fn test_event_log_for_next_track() {
    init_tracing();
    let mut session = PlaybackSession::default();
    session.play_tracks(vec![create_test_track("a"), create_test_track("b")], 0);
    session.toggle_play_pause();
    session.drain_events();

    session.play_next();

    assert_eq!(
        session.drain_events(),
        vec![
            PlaybackEvent::TrackChanged {
                track_id: "b".to_string(),
                previous_track_id: Some("a".to_string()),
            },
            PlaybackEvent::StateChanged { is_playing: true },
        ]
    );
}

#[test]
fn test_event_log_for_restart() {
    init_tracing();
    let mut session = PlaybackSession::default();
    session.play_tracks(vec![create_test_track("a")], 0);
    session.set_current_time(Duration::from_secs(60));
    session.drain_events();

    session.play_previous();

    assert_eq!(session.drain_events(), vec![PlaybackEvent::PositionReset]);
}

#[test]
fn test_event_log_for_settings() {
    init_tracing();
    let mut session = PlaybackSession::default();

    session.set_volume(-20);
    session.toggle_shuffle();
    session.set_repeat_mode(RepeatMode::One);
    session.add_to_queue(create_test_track("q"));

    assert_eq!(
        session.drain_events(),
        vec![
            PlaybackEvent::VolumeChanged { level: 0 },
            PlaybackEvent::ShuffleChanged { enabled: true },
            PlaybackEvent::RepeatModeChanged {
                mode: RepeatMode::One
            },
            PlaybackEvent::QueueChanged { length: 1 },
        ]
    );
}

#[test]
fn test_undrained_log_stays_bounded_with_observer_only() {
    let (mut session, seen) = recording_session();
    session.play_tracks(vec![create_test_track("a"), create_test_track("b")], 0);

    for ms in 0..100_000u64 {
        session.set_current_time(Duration::from_millis(ms));
    }
    assert!(session.pending_event_count() <= 4);

    for _ in 0..10_000 {
        session.toggle_play_pause();
        session.set_volume(30);
    }
    assert_eq!(session.pending_event_count(), MAX_PENDING_EVENTS);
    assert!(seen.lock().unwrap().len() > 100_000);
}

#[test]
fn test_clock_ticks_collapse_to_latest_position() {
    init_tracing();
    let mut session = PlaybackSession::default();
    session.play_tracks(vec![create_test_track("a")], 0);
    session.drain_events();

    for secs in 1..=50 {
        session.set_current_time(Duration::from_secs(secs));
    }

    assert_eq!(
        session.drain_events(),
        vec![PlaybackEvent::PositionChanged {
            position_ms: 50_000
        }]
    );
}

#[test]
fn test_snapshot_serializes_for_ui() {
    let mut session = PlaybackSession::default();
    session.play_tracks(vec![create_test_track("a")], 0);
    session.set_current_time(Duration::from_millis(1500));

    let json = serde_json::to_value(session.snapshot()).unwrap();

    assert_eq!(json["isPlaying"], true);
    assert_eq!(json["repeatMode"], "off");
    assert_eq!(json["position"], 1.5);
    assert_eq!(json["currentTrack"]["id"], "a");
    assert_eq!(json["queue"].as_array().unwrap().len(), 1);
}

#[test]
fn test_session_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<PlaybackSession>();
}
