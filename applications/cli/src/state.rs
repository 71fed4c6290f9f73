/// Shared application state
use crate::config::TempoConfig;
use std::sync::Arc;
use tempo_library::Catalog;
use tempo_playback::PlaybackSession;
use tokio::sync::Mutex;

/// State shared between the command loop and the clock task
///
/// There is exactly one session per process; everything that mutates it goes
/// through the mutex.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<PlaybackSession>>,
    pub catalog: Arc<Catalog>,
    pub config: Arc<TempoConfig>,
}

impl AppState {
    pub fn new(config: TempoConfig, catalog: Catalog) -> Self {
        let session = PlaybackSession::new(config.playback_config());
        Self {
            session: Arc::new(Mutex::new(session)),
            catalog: Arc::new(catalog),
            config: Arc::new(config),
        }
    }
}
