use crate::{albums, collaborations, playlists, songs, users};
use async_trait::async_trait;
use openmusic_core::{
    error::Result,
    storage::{AlbumStore, CollaborationStore, PlaylistStore, SongStore, UserStore},
    types::{
        Album, AlbumId, Collaboration, CollaborationId, NewAlbum, NewSong, NewUser, Playlist,
        PlaylistId, Song, SongId, User, UserCredentials, UserId,
    },
};
use sqlx::SqlitePool;

/// Catalog backed by a single `SQLite` pool
#[derive(Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl AlbumStore for SqliteCatalog {
    async fn create_album(&self, id: AlbumId, album: NewAlbum) -> Result<AlbumId> {
        albums::create(&self.pool, id, album).await
    }

    async fn get_album(&self, id: AlbumId) -> Result<Album> {
        albums::get_by_id(&self.pool, id).await
    }

    async fn update_album(&self, id: AlbumId, album: NewAlbum) -> Result<()> {
        albums::update(&self.pool, id, album).await
    }

    async fn set_album_cover(&self, id: AlbumId, cover_url: String) -> Result<()> {
        albums::set_cover(&self.pool, id, cover_url).await
    }

    async fn delete_album(&self, id: AlbumId) -> Result<()> {
        albums::delete(&self.pool, id).await
    }
}

#[async_trait]
impl SongStore for SqliteCatalog {
    async fn create_song(&self, id: SongId, song: NewSong) -> Result<SongId> {
        songs::create(&self.pool, id, song).await
    }

    async fn list_songs(&self) -> Result<Vec<Song>> {
        songs::get_all(&self.pool).await
    }

    async fn get_song(&self, id: SongId) -> Result<Song> {
        songs::get_by_id(&self.pool, id).await
    }

    async fn list_songs_by_album(&self, album_id: AlbumId) -> Result<Vec<Song>> {
        songs::get_by_album(&self.pool, album_id).await
    }

    async fn update_song(&self, id: SongId, song: NewSong) -> Result<()> {
        songs::update(&self.pool, id, song).await
    }

    async fn delete_song(&self, id: SongId) -> Result<()> {
        songs::delete(&self.pool, id).await
    }
}

#[async_trait]
impl PlaylistStore for SqliteCatalog {
    async fn create_playlist(
        &self,
        id: PlaylistId,
        name: String,
        owner_id: UserId,
    ) -> Result<PlaylistId> {
        playlists::create(&self.pool, id, name, owner_id).await
    }

    async fn get_playlist(&self, id: PlaylistId) -> Result<Playlist> {
        playlists::get_by_id(&self.pool, id).await
    }

    async fn get_playlist_owner(&self, id: PlaylistId) -> Result<UserId> {
        playlists::get_owner(&self.pool, id).await
    }

    async fn list_playlists_for_user(&self, user_id: UserId) -> Result<Vec<Playlist>> {
        playlists::get_for_user(&self.pool, user_id).await
    }

    async fn rename_playlist(&self, id: PlaylistId, name: String) -> Result<()> {
        playlists::rename(&self.pool, id, name).await
    }

    async fn delete_playlist(&self, id: PlaylistId) -> Result<()> {
        playlists::delete(&self.pool, id).await
    }

    async fn add_playlist_song(&self, id: PlaylistId, song_id: SongId) -> Result<()> {
        playlists::add_song(&self.pool, id, song_id).await
    }

    async fn list_playlist_songs(&self, id: PlaylistId) -> Result<Vec<Song>> {
        playlists::get_songs(&self.pool, id).await
    }

    async fn remove_playlist_song(&self, id: PlaylistId, song_id: SongId) -> Result<()> {
        playlists::remove_song(&self.pool, id, song_id).await
    }
}

#[async_trait]
impl CollaborationStore for SqliteCatalog {
    async fn add_collaboration(
        &self,
        id: CollaborationId,
        playlist_id: PlaylistId,
        user_id: UserId,
    ) -> Result<Collaboration> {
        collaborations::create(&self.pool, id, playlist_id, user_id).await
    }

    async fn delete_collaboration(&self, playlist_id: PlaylistId, user_id: UserId) -> Result<()> {
        collaborations::delete(&self.pool, playlist_id, user_id).await
    }

    async fn is_collaborator(&self, playlist_id: PlaylistId, user_id: UserId) -> Result<bool> {
        collaborations::exists(&self.pool, playlist_id, user_id).await
    }
}

#[async_trait]
impl UserStore for SqliteCatalog {
    async fn create_user(&self, id: UserId, user: NewUser) -> Result<UserId> {
        users::create(&self.pool, id, user).await
    }

    async fn user_exists(&self, id: UserId) -> Result<bool> {
        users::exists(&self.pool, id).await
    }

    async fn find_credentials(&self, username: String) -> Result<Option<UserCredentials>> {
        users::find_credentials(&self.pool, &username).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }
}
