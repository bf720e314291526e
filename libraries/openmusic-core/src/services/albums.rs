use crate::aggregate::aggregate_album;
use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::storage::{AlbumStore, SongStore};
use crate::types::{AlbumId, AlbumView};
use crate::validation::{AlbumCoverPayload, AlbumPayload, Validate};
use std::sync::Arc;

#[derive(Clone)]
pub struct AlbumService {
    albums: Arc<dyn AlbumStore>,
    songs: Arc<dyn SongStore>,
    ids: Arc<dyn IdGenerator>,
}

impl AlbumService {
    pub fn new(
        albums: Arc<dyn AlbumStore>,
        songs: Arc<dyn SongStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self { albums, songs, ids }
    }

    /// Create an album, returning its fresh id
    pub async fn add_album(&self, payload: AlbumPayload) -> Result<AlbumId> {
        payload.validate()?;

        let id = AlbumId::generate(self.ids.as_ref());
        self.albums.create_album(id, payload.into()).await
    }

    /// Get an album with its songs embedded
    pub async fn get_album_by_id(&self, id: &AlbumId) -> Result<AlbumView> {
        let album = self.albums.get_album(id.clone()).await?;
        let songs = self.songs.list_songs_by_album(id.clone()).await?;

        Ok(aggregate_album(album, songs))
    }

    pub async fn edit_album_by_id(&self, id: &AlbumId, payload: AlbumPayload) -> Result<()> {
        payload.validate()?;
        self.albums.update_album(id.clone(), payload.into()).await
    }

    pub async fn edit_album_cover(&self, id: &AlbumId, payload: AlbumCoverPayload) -> Result<()> {
        payload.validate()?;
        self.albums.set_album_cover(id.clone(), payload.cover_url).await
    }

    /// Delete an album. Its songs stay, detached.
    pub async fn delete_album_by_id(&self, id: &AlbumId) -> Result<()> {
        self.albums.delete_album(id.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::id_gen::SequentialIdGenerator;
    use crate::storage::{MockAlbumStore, MockSongStore};
    use crate::types::{Album, NewAlbum};
    use mockall::predicate::eq;

    fn service(albums: MockAlbumStore, songs: MockSongStore) -> AlbumService {
        AlbumService::new(
            Arc::new(albums),
            Arc::new(songs),
            Arc::new(SequentialIdGenerator::new()),
        )
    }

    #[tokio::test]
    async fn add_album_generates_tagged_id() {
        let mut albums = MockAlbumStore::new();
        albums
            .expect_create_album()
            .with(
                eq(AlbumId::new("album-1")),
                eq(NewAlbum {
                    name: "A Night at the Opera".to_string(),
                    year: 1975,
                }),
            )
            .times(1)
            .returning(|id, _| Ok(id));

        let id = service(albums, MockSongStore::new())
            .add_album(AlbumPayload {
                name: "A Night at the Opera".to_string(),
                year: 1975,
            })
            .await
            .unwrap();

        assert_eq!(id, AlbumId::new("album-1"));
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_any_store_call() {
        // Mocks without expectations panic if touched
        let result = service(MockAlbumStore::new(), MockSongStore::new())
            .add_album(AlbumPayload {
                name: String::new(),
                year: 1975,
            })
            .await;

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[tokio::test]
    async fn missing_album_is_not_found_without_fetching_songs() {
        let mut albums = MockAlbumStore::new();
        albums
            .expect_get_album()
            .returning(|id| Err(CatalogError::not_found("Album", id.as_str())));

        let result = service(albums, MockSongStore::new())
            .get_album_by_id(&AlbumId::new("album-missing"))
            .await;

        assert_eq!(
            result,
            Err(CatalogError::not_found("Album", "album-missing"))
        );
    }

    #[tokio::test]
    async fn get_album_embeds_album_songs() {
        let mut albums = MockAlbumStore::new();
        albums.expect_get_album().returning(|id| {
            Ok(Album {
                id,
                name: "A Night at the Opera".to_string(),
                year: 1975,
                cover_url: None,
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
                updated_at: "2024-01-01T00:00:00+00:00".to_string(),
            })
        });
        let mut songs = MockSongStore::new();
        songs
            .expect_list_songs_by_album()
            .with(eq(AlbumId::new("album-1")))
            .returning(|_| Ok(Vec::new()));

        let view = service(albums, songs)
            .get_album_by_id(&AlbumId::new("album-1"))
            .await
            .unwrap();

        assert_eq!(view.album.id, AlbumId::new("album-1"));
        assert!(view.songs.is_empty());
    }

    #[tokio::test]
    async fn delete_propagates_not_found() {
        let mut albums = MockAlbumStore::new();
        albums
            .expect_delete_album()
            .returning(|id| Err(CatalogError::not_found("Album", id.as_str())));

        let result = service(albums, MockSongStore::new())
            .delete_album_by_id(&AlbumId::new("album-gone"))
            .await;

        assert!(matches!(result, Err(CatalogError::NotFound { .. })));
    }
}
