/// Interface preferences (theme and language)
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour scheme selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always light
    Light,

    /// Always dark
    #[default]
    Dark,

    /// Follow the operating system
    System,
}

impl ThemeMode {
    /// Resolve `System` against the host preference
    ///
    /// Always returns `Light` or `Dark`.
    pub fn effective(self, system_prefers_dark: bool) -> ThemeMode {
        match self {
            ThemeMode::System if system_prefers_dark => ThemeMode::Dark,
            ThemeMode::System => ThemeMode::Light,
            mode => mode,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemeMode {
    type Err = crate::TempoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            other => Err(crate::TempoError::invalid_input(format!(
                "unknown theme mode '{other}'"
            ))),
        }
    }
}

/// Interface language (BCP 47 primary tag, e.g. `en`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    /// Create a language code, normalized to lowercase
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_ascii_lowercase())
    }

    /// Get the language code
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self("en".to_string())
    }
}

/// Per-user interface preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default)]
    pub language: Language,
}
