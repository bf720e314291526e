use crate::error::Result;
use crate::filter::SongFilter;
use crate::id_gen::IdGenerator;
use crate::storage::{AlbumStore, SongStore};
use crate::types::{AlbumId, Song, SongId, SongSummary};
use crate::validation::{SongPayload, Validate};
use std::sync::Arc;

#[derive(Clone)]
pub struct SongService {
    songs: Arc<dyn SongStore>,
    albums: Arc<dyn AlbumStore>,
    ids: Arc<dyn IdGenerator>,
}

impl SongService {
    pub fn new(
        songs: Arc<dyn SongStore>,
        albums: Arc<dyn AlbumStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { songs, albums, ids }
    }

    /// Create a song, returning its fresh id
    pub async fn add_song(&self, payload: SongPayload) -> Result<SongId> {
        payload.validate()?;
        self.ensure_album_exists(payload.album_id.as_ref()).await?;

        let id = SongId::generate(self.ids.as_ref());
        self.songs.create_song(id, payload.into()).await
    }

    /// List songs as summaries, filtered in memory
    pub async fn get_songs(&self, filter: &SongFilter) -> Result<Vec<SongSummary>> {
        let songs = self.songs.list_songs().await?;

        Ok(filter
            .apply(songs)
            .into_iter()
            .map(SongSummary::from)
            .collect())
    }

    pub async fn get_song_by_id(&self, id: &SongId) -> Result<Song> {
        self.songs.get_song(id.clone()).await
    }

    pub async fn edit_song_by_id(&self, id: &SongId, payload: SongPayload) -> Result<()> {
        payload.validate()?;
        self.ensure_album_exists(payload.album_id.as_ref()).await?;

        self.songs.update_song(id.clone(), payload.into()).await
    }

    pub async fn delete_song_by_id(&self, id: &SongId) -> Result<()> {
        self.songs.delete_song(id.clone()).await
    }

    async fn ensure_album_exists(&self, album_id: Option<&AlbumId>) -> Result<()> {
        if let Some(album_id) = album_id {
            self.albums.get_album(album_id.clone()).await?;
        }
        Ok(())
    }
}
