mod album;
mod artist;
mod ids;
mod playlist;
mod preferences;
mod track;
mod user;

pub use album::Album;
pub use artist::Artist;
pub use ids::{AlbumId, ArtistId, PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use preferences::{Language, Preferences, ThemeMode};
pub use track::Track;
pub use user::User;
