//! Tempo CLI Library
//!
//! Terminal player that seeds a playback session from the catalog and drives
//! it with a simulated media clock.
//!
//! This library exposes the components the `tempo` binary wires together so
//! they can be tested without a terminal.

pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use commands::{Collection, PlayOptions};
pub use config::TempoConfig;
pub use driver::{SessionDriver, TickOutcome};
pub use error::{CliError, Result};
pub use state::AppState;
