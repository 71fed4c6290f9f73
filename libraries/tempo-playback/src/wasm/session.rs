//! WASM-compatible PlaybackSession wrapper

use crate::{PlaybackConfig, PlaybackSession, RepeatMode};
use js_sys::Function;
use std::time::Duration;
use tempo_core::{Track, TrackId};
use wasm_bindgen::prelude::*;

/// WASM-compatible playback session
///
/// Tracks cross the boundary as plain JS objects in the catalog's camelCase
/// shape. Durations and positions are seconds as `f64`.
#[wasm_bindgen]
pub struct WasmPlaybackSession {
    inner: PlaybackSession,

    // Called with the serialized snapshot after every command
    on_change: Option<Function>,
}

#[wasm_bindgen]
impl WasmPlaybackSession {
    /// Create a new playback session
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();

        Self {
            inner: PlaybackSession::new(PlaybackConfig::default()),
            on_change: None,
        }
    }

    // ===== Transport =====

    /// Select a track and start playing it
    #[wasm_bindgen(js_name = setCurrentTrack)]
    pub fn set_current_track(&mut self, track: JsValue) -> Result<(), JsValue> {
        let track: Track = parse_track(track)?;
        self.inner.set_current_track(track);
        self.emit_change();
        Ok(())
    }

    /// Flip play/pause
    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&mut self) {
        self.inner.toggle_play_pause();
        self.emit_change();
    }

    /// Skip to next track
    #[wasm_bindgen(js_name = playNext)]
    pub fn play_next(&mut self) {
        self.inner.play_next();
        self.emit_change();
    }

    /// Go to previous track (or restart the current one)
    #[wasm_bindgen(js_name = playPrevious)]
    pub fn play_previous(&mut self) {
        self.inner.play_previous();
        self.emit_change();
    }

    /// Replace the queue with `tracks` and play the one at `start_index`
    #[wasm_bindgen(js_name = playTracks)]
    pub fn play_tracks(&mut self, tracks: JsValue, start_index: usize) -> Result<(), JsValue> {
        let tracks = parse_tracks(tracks)?;
        self.inner.play_tracks(tracks, start_index);
        self.emit_change();
        Ok(())
    }

    // ===== Media Clock =====

    /// Set position in seconds
    #[wasm_bindgen(js_name = setCurrentTime)]
    pub fn set_current_time(&mut self, position_secs: f64) {
        self.inner
            .set_current_time(Duration::try_from_secs_f64(position_secs).unwrap_or_default());
        self.emit_change();
    }

    /// Set media duration in seconds
    #[wasm_bindgen(js_name = setDuration)]
    pub fn set_duration(&mut self, duration_secs: f64) {
        self.inner
            .set_duration(Duration::try_from_secs_f64(duration_secs).unwrap_or_default());
        self.emit_change();
    }

    // ===== Volume, Shuffle & Repeat =====

    /// Set volume (clamped to 0-100)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&mut self, level: i32) {
        self.inner.set_volume(level);
        self.emit_change();
    }

    /// Flip shuffle
    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&mut self) {
        self.inner.toggle_shuffle();
        self.emit_change();
    }

    /// Set repeat mode ("off" | "one" | "all")
    #[wasm_bindgen(js_name = setRepeatMode)]
    pub fn set_repeat_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let repeat: RepeatMode = mode
            .parse()
            .map_err(|e: tempo_core::TempoError| JsValue::from_str(&e.to_string()))?;
        self.inner.set_repeat_mode(repeat);
        self.emit_change();
        Ok(())
    }

    // ===== Queue Management =====

    /// Replace the queue
    #[wasm_bindgen(js_name = setQueue)]
    pub fn set_queue(&mut self, tracks: JsValue) -> Result<(), JsValue> {
        let tracks = parse_tracks(tracks)?;
        self.inner.set_queue(tracks);
        self.emit_change();
        Ok(())
    }

    /// Append track to the queue
    #[wasm_bindgen(js_name = addToQueue)]
    pub fn add_to_queue(&mut self, track: JsValue) -> Result<(), JsValue> {
        let track = parse_track(track)?;
        self.inner.add_to_queue(track);
        self.emit_change();
        Ok(())
    }

    /// Remove every queue entry with this id
    #[wasm_bindgen(js_name = removeFromQueue)]
    pub fn remove_from_queue(&mut self, track_id: &str) {
        self.inner.remove_from_queue(&TrackId::new(track_id));
        self.emit_change();
    }

    /// Clear entire queue
    #[wasm_bindgen(js_name = clearQueue)]
    pub fn clear_queue(&mut self) {
        self.inner.clear_queue();
        self.emit_change();
    }

    // ===== State Queries =====

    /// Full state as a plain JS object
    #[wasm_bindgen(js_name = getSnapshot)]
    pub fn get_snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Transport state ("stopped" | "paused" | "playing")
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_wasm_bindgen::to_value(&self.inner.playback_state())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default()
    }

    /// Progress through the current track (0-100, may overshoot)
    #[wasm_bindgen(js_name = getProgressPercent)]
    pub fn get_progress_percent(&self) -> f64 {
        self.inner.progress_percent()
    }

    /// Tracks after the current one
    #[wasm_bindgen(js_name = getUpNext)]
    pub fn get_up_next(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.inner.up_next()).unwrap_or(JsValue::NULL)
    }

    /// Format seconds as `m:ss`
    #[wasm_bindgen(js_name = formatTime)]
    pub fn format_time(secs: f64) -> String {
        crate::format_time(Duration::try_from_secs_f64(secs).unwrap_or_default())
    }

    // ===== Event Listeners =====

    /// Register change callback, called with the snapshot after each command
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: Function) {
        self.on_change = Some(callback);
    }

    /// Notify JS with the new snapshot; the typed event log is not exposed here
    fn emit_change(&mut self) {
        self.inner.clear_events();
        if let Some(ref cb) = self.on_change {
            if let Ok(snapshot) = serde_wasm_bindgen::to_value(&self.inner.snapshot()) {
                cb.call1(&JsValue::NULL, &snapshot).ok();
            }
        }
    }
}

impl Default for WasmPlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_track(value: JsValue) -> Result<Track, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse track: {}", e)))
}

fn parse_tracks(value: JsValue) -> Result<Vec<Track>, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse tracks: {}", e)))
}
