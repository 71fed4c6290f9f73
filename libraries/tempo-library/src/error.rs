/// Library-specific errors
use tempo_core::PlaylistId;
use thiserror::Error;

/// Result type alias using `LibraryError`
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Library error types
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Catalog file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid catalog JSON
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Core domain error
    #[error(transparent)]
    Core(#[from] tempo_core::TempoError),
}

impl From<LibraryError> for tempo_core::TempoError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::PlaylistNotFound(id) => {
                tempo_core::TempoError::not_found("Playlist", id.to_string())
            }
            LibraryError::Core(inner) => inner,
            other => tempo_core::TempoError::invalid_input(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_not_found_maps_to_core_not_found() {
        let err = LibraryError::PlaylistNotFound(PlaylistId::new("p-9"));
        assert_eq!(err.to_string(), "Playlist not found: p-9");

        let core: tempo_core::TempoError = err.into();
        assert!(matches!(core, tempo_core::TempoError::NotFound { .. }));
    }
}
