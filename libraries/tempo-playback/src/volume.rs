//! Volume level
//!
//! The session only stores the level; applying gain is the media element's job.

/// Level a fresh session starts at
pub const DEFAULT_VOLUME: u8 = 70;

/// Loudest level
pub const MAX_VOLUME: u8 = 100;

/// Volume level clamped to 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Volume {
    level: u8,
}

impl Volume {
    /// Create a volume, clamping out-of-range input
    pub fn new(level: i32) -> Self {
        Self {
            level: Self::clamp(level),
        }
    }

    /// Set volume level, clamping out-of-range input
    ///
    /// The slider never sends values outside 0-100 but other callers may.
    pub fn set_level(&mut self, level: i32) {
        self.level = Self::clamp(level);
    }

    /// Get current volume level (0-100)
    pub fn level(&self) -> u8 {
        self.level
    }

    fn clamp(level: i32) -> u8 {
        level.clamp(0, i32::from(MAX_VOLUME)) as u8
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            level: DEFAULT_VOLUME,
        }
    }
}
