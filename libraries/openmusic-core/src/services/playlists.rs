use crate::aggregate::aggregate_playlist;
use crate::authorizer::PlaylistAuthorizer;
use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::storage::{PlaylistStore, SongStore};
use crate::types::{PlaylistId, PlaylistSongsView, PlaylistSummary, UserId};
use crate::validation::{PlaylistPayload, PlaylistSongPayload, Validate};
use std::sync::Arc;

/// Playlist operations.
///
/// Renaming, deleting and managing collaborators belong to the owner.
/// Viewing and editing the song list is also open to collaborators.
#[derive(Clone)]
pub struct PlaylistService {
    playlists: Arc<dyn PlaylistStore>,
    songs: Arc<dyn SongStore>,
    authorizer: PlaylistAuthorizer,
    ids: Arc<dyn IdGenerator>,
}

impl PlaylistService {
    pub fn new(
        playlists: Arc<dyn PlaylistStore>,
        songs: Arc<dyn SongStore>,
        authorizer: PlaylistAuthorizer,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            playlists,
            songs,
            authorizer,
            ids,
        }
    }

    /// Create a playlist owned by `owner_id`
    pub async fn add_playlist(
        &self,
        owner_id: &UserId,
        payload: PlaylistPayload,
    ) -> Result<PlaylistId> {
        payload.validate()?;

        let id = PlaylistId::generate(self.ids.as_ref());
        self.playlists
            .create_playlist(id, payload.name, owner_id.clone())
            .await
    }

    /// Playlists the user owns or collaborates on
    pub async fn get_playlists(&self, user_id: &UserId) -> Result<Vec<PlaylistSummary>> {
        let playlists = self
            .playlists
            .list_playlists_for_user(user_id.clone())
            .await?;

        Ok(playlists.into_iter().map(PlaylistSummary::from).collect())
    }

    pub async fn rename_playlist(
        &self,
        id: &PlaylistId,
        user_id: &UserId,
        payload: PlaylistPayload,
    ) -> Result<()> {
        payload.validate()?;
        self.authorizer.verify_owner(id, user_id).await?;

        self.playlists.rename_playlist(id.clone(), payload.name).await
    }

    pub async fn delete_playlist(&self, id: &PlaylistId, user_id: &UserId) -> Result<()> {
        self.authorizer.verify_owner(id, user_id).await?;
        self.playlists.delete_playlist(id.clone()).await
    }

    pub async fn add_playlist_song(
        &self,
        id: &PlaylistId,
        user_id: &UserId,
        payload: PlaylistSongPayload,
    ) -> Result<()> {
        payload.validate()?;
        self.authorizer.verify_owner_or_collaborator(id, user_id).await?;

        // The song must exist before it can be referenced
        self.songs.get_song(payload.song_id.clone()).await?;
        self.playlists
            .add_playlist_song(id.clone(), payload.song_id)
            .await
    }

    pub async fn get_playlist_songs(
        &self,
        id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<PlaylistSongsView> {
        self.authorizer.verify_owner_or_collaborator(id, user_id).await?;

        let playlist = self.playlists.get_playlist(id.clone()).await?;
        let songs = self.playlists.list_playlist_songs(id.clone()).await?;

        Ok(aggregate_playlist(playlist, songs))
    }

    pub async fn delete_playlist_song(
        &self,
        id: &PlaylistId,
        user_id: &UserId,
        payload: PlaylistSongPayload,
    ) -> Result<()> {
        payload.validate()?;
        self.authorizer.verify_owner_or_collaborator(id, user_id).await?;

        self.playlists
            .remove_playlist_song(id.clone(), payload.song_id)
            .await
    }
}
