//! Store adapter traits, one per resource type
//!
//! Implementations report absence as [`CatalogError::NotFound`] and a write
//! that touched no rows as `NotFound` (update/delete) or
//! [`CatalogError::Invariant`] (create). Any other backend failure is passed
//! through unchanged; services never reinterpret it.
//!
//! [`CatalogError::NotFound`]: crate::CatalogError::NotFound
//! [`CatalogError::Invariant`]: crate::CatalogError::Invariant

use crate::error::Result;
use crate::types::{
    Album, AlbumId, Collaboration, CollaborationId, NewAlbum, NewSong, NewUser, Playlist,
    PlaylistId, Song, SongId, User, UserCredentials, UserId,
};
use async_trait::async_trait;

// ============================================================================
// Albums
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// Insert an album under a pre-generated id
    async fn create_album(&self, id: AlbumId, album: NewAlbum) -> Result<AlbumId>;

    /// Get album by ID
    async fn get_album(&self, id: AlbumId) -> Result<Album>;

    /// Replace name and year, bumping `updated_at`
    async fn update_album(&self, id: AlbumId, album: NewAlbum) -> Result<()>;

    /// Set the cover image URL
    async fn set_album_cover(&self, id: AlbumId, cover_url: String) -> Result<()>;

    /// Delete permanently. Songs referencing the album are left unattached.
    async fn delete_album(&self, id: AlbumId) -> Result<()>;
}

// ============================================================================
// Songs
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SongStore: Send + Sync {
    /// Insert a song under a pre-generated id
    async fn create_song(&self, id: SongId, song: NewSong) -> Result<SongId>;

    /// Get all songs, unfiltered
    async fn list_songs(&self) -> Result<Vec<Song>>;

    /// Get song by ID
    async fn get_song(&self, id: SongId) -> Result<Song>;

    /// Get songs attached to an album, in insertion order
    async fn list_songs_by_album(&self, album_id: AlbumId) -> Result<Vec<Song>>;

    /// Replace every field of a song
    async fn update_song(&self, id: SongId, song: NewSong) -> Result<()>;

    /// Delete permanently
    async fn delete_song(&self, id: SongId) -> Result<()>;
}

// ============================================================================
// Playlists
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaylistStore: Send + Sync {
    /// Insert a playlist owned by `owner_id`
    async fn create_playlist(
        &self,
        id: PlaylistId,
        name: String,
        owner_id: UserId,
    ) -> Result<PlaylistId>;

    /// Get playlist by ID
    async fn get_playlist(&self, id: PlaylistId) -> Result<Playlist>;

    /// Get the owner of a playlist
    async fn get_playlist_owner(&self, id: PlaylistId) -> Result<UserId>;

    /// Get playlists the user owns or collaborates on
    async fn list_playlists_for_user(&self, user_id: UserId) -> Result<Vec<Playlist>>;

    /// Rename a playlist
    async fn rename_playlist(&self, id: PlaylistId, name: String) -> Result<()>;

    /// Delete a playlist together with its song entries and collaborations
    async fn delete_playlist(&self, id: PlaylistId) -> Result<()>;

    /// Add a song to a playlist. A song already present is a conflict.
    async fn add_playlist_song(&self, id: PlaylistId, song_id: SongId) -> Result<()>;

    /// Get the songs of a playlist, in the order they were added
    async fn list_playlist_songs(&self, id: PlaylistId) -> Result<Vec<Song>>;

    /// Remove a song from a playlist
    async fn remove_playlist_song(&self, id: PlaylistId, song_id: SongId) -> Result<()>;
}

// ============================================================================
// Collaborations
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollaborationStore: Send + Sync {
    /// Grant `user_id` collaboration on a playlist. A duplicate pair is a conflict.
    async fn add_collaboration(
        &self,
        id: CollaborationId,
        playlist_id: PlaylistId,
        user_id: UserId,
    ) -> Result<Collaboration>;

    /// Revoke a collaboration
    async fn delete_collaboration(&self, playlist_id: PlaylistId, user_id: UserId) -> Result<()>;

    /// Check whether a collaboration row exists for the pair
    async fn is_collaborator(&self, playlist_id: PlaylistId, user_id: UserId) -> Result<bool>;
}

// ============================================================================
// Users
// ============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. A taken username is a conflict.
    async fn create_user(&self, id: UserId, user: NewUser) -> Result<UserId>;

    /// Check whether a user exists
    async fn user_exists(&self, id: UserId) -> Result<bool>;

    /// Look up login material by username
    async fn find_credentials(&self, username: String) -> Result<Option<UserCredentials>>;

    /// Get all users
    async fn list_users(&self) -> Result<Vec<User>>;
}
