//! Core types for the playback session

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tempo_core::{TempoError, Track};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop advancing at the end of the queue
    #[default]
    Off,

    /// Loop current track only
    One,

    /// Loop entire queue
    All,
}

impl RepeatMode {
    /// Next mode in the repeat button's cycle: Off -> One -> All -> Off
    pub fn cycle(self) -> RepeatMode {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }

    /// Lowercase name used by the UI and config files
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::One => "one",
            RepeatMode::All => "all",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatMode {
    type Err = TempoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(RepeatMode::Off),
            "one" => Ok(RepeatMode::One),
            "all" => Ok(RepeatMode::All),
            other => Err(TempoError::invalid_input(format!(
                "Invalid repeat mode '{}'. Use 'off', 'one', or 'all'",
                other
            ))),
        }
    }
}

/// Transport state derived from `{has current track, is playing}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// No track selected (the playing flag is ignored)
    Stopped,

    /// Track selected, transport paused
    Paused,

    /// Track selected, transport running
    Playing,
}

/// Configuration for a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial volume (0-100, default: 70)
    pub volume: u8,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Past this position "previous" restarts the current track (default: 3s)
    #[serde(with = "tempo_core::serde_duration::secs_f64")]
    pub restart_threshold: Duration,

    /// Seed for shuffle selection; `None` seeds from OS entropy
    pub shuffle_seed: Option<u64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            volume: crate::volume::DEFAULT_VOLUME,
            shuffle: false,
            repeat: RepeatMode::Off,
            restart_threshold: Duration::from_secs(3),
            shuffle_seed: None,
        }
    }
}

/// Immutable view of the session handed to observers and UI bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub volume: u8,
    pub shuffle: bool,
    pub repeat_mode: RepeatMode,
    #[serde(with = "tempo_core::serde_duration::secs_f64")]
    pub position: Duration,
    #[serde(with = "tempo_core::serde_duration::secs_f64")]
    pub duration: Duration,
    pub queue: Vec<Track>,
}

impl SessionSnapshot {
    /// Derived transport state
    pub fn playback_state(&self) -> PlaybackState {
        match (&self.current_track, self.is_playing) {
            (None, _) => PlaybackState::Stopped,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.volume, 70);
        assert!(!config.shuffle);
        assert_eq!(config.repeat, RepeatMode::Off);
        assert_eq!(config.restart_threshold, Duration::from_secs(3));
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn repeat_cycle_order() {
        assert_eq!(RepeatMode::Off.cycle(), RepeatMode::One);
        assert_eq!(RepeatMode::One.cycle(), RepeatMode::All);
        assert_eq!(RepeatMode::All.cycle(), RepeatMode::Off);
    }

    #[test]
    fn repeat_mode_parses_ui_names() {
        assert_eq!("all".parse::<RepeatMode>().unwrap(), RepeatMode::All);
        assert!("shuffle".parse::<RepeatMode>().is_err());
        assert_eq!(RepeatMode::One.to_string(), "one");
    }

    #[test]
    fn repeat_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RepeatMode::All).unwrap(), "\"all\"");
    }
}
