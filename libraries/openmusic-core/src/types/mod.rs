mod album;
mod collaboration;
mod ids;
mod playlist;
mod song;
mod user;

pub use album::{Album, AlbumView, NewAlbum};
pub use collaboration::Collaboration;
pub use ids::{AlbumId, CollaborationId, PlaylistId, SongId, UserId};
pub use playlist::{Playlist, PlaylistSongsView, PlaylistSummary};
pub use song::{NewSong, Song, SongSummary};
pub use user::{NewUser, User, UserCredentials};
