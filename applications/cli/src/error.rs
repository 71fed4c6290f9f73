/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown {kind}: {id}")]
    UnknownCollection { kind: &'static str, id: String },

    #[error("Library error: {0}")]
    Library(#[from] tempo_library::LibraryError),
}

impl CliError {
    pub fn unknown(kind: &'static str, id: impl Into<String>) -> Self {
        Self::UnknownCollection {
            kind,
            id: id.into(),
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
