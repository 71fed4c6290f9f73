/// CLI configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempo_core::Preferences;
use tempo_playback::PlaybackConfig;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tempo.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TempoConfig {
    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub clock: ClockSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_initial_volume")]
    pub initial_volume: i32,

    #[serde(default = "default_restart_threshold_secs")]
    pub restart_threshold_secs: f64,

    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ClockSettings {
    /// Interval between simulated clock ticks
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Simulated seconds per wall-clock second
    #[serde(default = "default_speed")]
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl TempoConfig {
    /// Load configuration from file and environment
    ///
    /// `path` defaults to `tempo.toml`; a missing file is not an error.
    /// Environment variables override file values, e.g.
    /// `TEMPO_PLAYBACK__INITIAL_VOLUME=40` or `TEMPO_CLOCK__SPEED=10`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as `load`, reading variables from `env` instead of the process
    /// environment when given
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        let config_path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), Path::to_path_buf);
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        } else if path.is_some() {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                config_path.display()
            )));
        }

        // Override with environment variables (prefixed with TEMPO_)
        settings = settings.add_source(
            config::Environment::with_prefix("TEMPO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config: TempoConfig = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.clock.tick_ms == 0 {
            return Err(CliError::Config(
                "clock.tick_ms must be greater than 0".to_string(),
            ));
        }

        if !(self.clock.speed.is_finite() && self.clock.speed > 0.0) {
            return Err(CliError::Config(format!(
                "clock.speed must be a positive number, got {}",
                self.clock.speed
            )));
        }

        if !(self.playback.restart_threshold_secs.is_finite()
            && self.playback.restart_threshold_secs >= 0.0)
        {
            return Err(CliError::Config(format!(
                "playback.restart_threshold_secs must be >= 0, got {}",
                self.playback.restart_threshold_secs
            )));
        }

        Ok(())
    }

    /// Session configuration derived from the `[playback]` section
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            volume: self.playback.initial_volume.clamp(0, 100) as u8,
            restart_threshold: Duration::try_from_secs_f64(self.playback.restart_threshold_secs)
                .unwrap_or(Duration::from_secs(3)),
            shuffle_seed: self.playback.shuffle_seed,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.clock.tick_ms)
    }
}

// Default values
fn default_initial_volume() -> i32 {
    i32::from(tempo_playback::DEFAULT_VOLUME)
}

fn default_restart_threshold_secs() -> f64 {
    3.0
}

fn default_tick_ms() -> u64 {
    250
}

fn default_speed() -> f64 {
    1.0
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("catalog.json")
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            initial_volume: default_initial_volume(),
            restart_threshold_secs: default_restart_threshold_secs(),
            shuffle_seed: None,
        }
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            speed: default_speed(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_defaults() {
        let config = TempoConfig::default();
        let playback = config.playback_config();

        assert_eq!(playback.volume, 70);
        assert_eq!(playback.restart_threshold, Duration::from_secs(3));
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_tick_is_rejected() {
        let mut config = TempoConfig::default();
        config.clock.tick_ms = 0;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        let mut config = TempoConfig::default();
        config.clock.speed = 0.0;
        assert!(config.validate().is_err());

        config.clock.speed = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn out_of_range_volume_is_clamped_for_session() {
        let mut config = TempoConfig::default();
        config.playback.initial_volume = 250;
        assert_eq!(config.playback_config().volume, 100);
    }
}
