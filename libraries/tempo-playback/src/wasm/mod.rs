//! WASM bindings for tempo-playback
//!
//! Exposes `PlaybackSession` to the browser player bar and views.

pub mod session;

pub use session::WasmPlaybackSession;
