/// Tempo - terminal player with a simulated media clock
use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tempo_cli::{
    commands::{self, Collection, PlayOptions},
    AppState, SessionDriver, TempoConfig,
};
use tempo_core::{AlbumId, ArtistId, PlaylistId};
use tempo_library::{Catalog, SearchFilter};
use tempo_playback::{format_time, RepeatMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "Tempo terminal player", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./tempo.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file path (overrides catalog.path)
    #[arg(long, global = true, env = "TEMPO_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a collection with the simulated clock
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// Enable shuffle
        #[arg(long)]
        shuffle: bool,

        /// Repeat mode (off, one, all)
        #[arg(long, default_value = "off")]
        repeat: RepeatMode,

        /// Queue index to start at
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Wall-clock seconds to run for
        #[arg(long, default_value_t = 30)]
        seconds: u64,
    },
    /// Search the catalog
    Search {
        /// Case-insensitive search text
        query: String,

        /// Restrict results to one category
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Print a collection as a queue
    Queue {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Album id
    #[arg(long)]
    album: Option<String>,

    /// Playlist id
    #[arg(long)]
    playlist: Option<String>,

    /// Artist id
    #[arg(long)]
    artist: Option<String>,
}

impl SourceArgs {
    fn collection(self) -> anyhow::Result<Collection> {
        match (self.album, self.playlist, self.artist) {
            (Some(id), _, _) => Ok(Collection::Album(AlbumId::new(id))),
            (_, Some(id), _) => Ok(Collection::Playlist(PlaylistId::new(id))),
            (_, _, Some(id)) => Ok(Collection::Artist(ArtistId::new(id))),
            _ => anyhow::bail!("one of --album, --playlist or --artist is required"),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FilterArg {
    All,
    Tracks,
    Artists,
    Albums,
    Playlists,
}

impl From<FilterArg> for SearchFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => SearchFilter::All,
            FilterArg::Tracks => SearchFilter::Tracks,
            FilterArg::Artists => SearchFilter::Artists,
            FilterArg::Albums => SearchFilter::Albums,
            FilterArg::Playlists => SearchFilter::Playlists,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tempo_cli=info,tempo_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = TempoConfig::load(cli.config.as_deref())?;
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }

    let catalog = Catalog::load(&config.catalog.path)
        .with_context(|| format!("loading catalog {}", config.catalog.path.display()))?;

    match cli.command {
        Commands::Play {
            source,
            shuffle,
            repeat,
            start,
            seconds,
        } => {
            let options = PlayOptions {
                collection: source.collection()?,
                shuffle,
                repeat,
                start,
            };
            play(config, catalog, options, Duration::from_secs(seconds)).await?;
        }
        Commands::Search { query, filter } => {
            print!("{}", commands::render_search(&catalog, &query, filter.into()));
        }
        Commands::Queue { source } => {
            print!("{}", commands::render_queue(&catalog, &source.collection()?)?);
        }
    }

    Ok(())
}

async fn play(
    config: TempoConfig,
    catalog: Catalog,
    options: PlayOptions,
    wall: Duration,
) -> anyhow::Result<()> {
    tracing::info!(
        theme = %config.preferences.theme,
        language = config.preferences.language.code(),
        speed = config.clock.speed,
        "Starting Tempo"
    );

    let state = AppState::new(config, catalog);
    commands::start_playback(&state, &options).await?;

    let driver = SessionDriver::new(state.session.clone(), state.config.clock.speed);
    let clock = tokio::spawn(async move {
        driver.run(wall, state.config.tick_interval()).await;
        state
    });

    let state = clock.await?;
    let session = state.session.lock().await;
    match session.current_track() {
        Some(track) => tracing::info!(
            "Stopped at {} / {} in {} - {} ({:?})",
            format_time(session.position()),
            format_time(track.duration),
            track.artist,
            track.title,
            session.playback_state()
        ),
        None => tracing::info!("Nothing was played"),
    }

    Ok(())
}
