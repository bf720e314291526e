//! Resource service facades
//!
//! One service per resource family. Every operation follows the same order:
//! validate the payload, authorize (playlist-scoped operations only), call
//! the store, shape the result. Store and authorizer errors propagate
//! unchanged.

mod albums;
mod collaborations;
mod playlists;
mod songs;
mod users;

pub use albums::AlbumService;
pub use collaborations::CollaborationService;
pub use playlists::PlaylistService;
pub use songs::SongService;
pub use users::UserService;

use crate::authorizer::PlaylistAuthorizer;
use crate::id_gen::IdGenerator;
use crate::storage::{AlbumStore, CollaborationStore, PlaylistStore, SongStore, UserStore};
use std::sync::Arc;

/// All services, wired to a single backing store
#[derive(Clone)]
pub struct CatalogServices {
    pub albums: AlbumService,
    pub songs: SongService,
    pub playlists: PlaylistService,
    pub collaborations: CollaborationService,
    pub users: UserService,
}

impl CatalogServices {
    /// Wire every service to `store`, which implements all store traits
    pub fn new<S>(store: Arc<S>, ids: Arc<dyn IdGenerator>) -> Self
    where
        S: AlbumStore + SongStore + PlaylistStore + CollaborationStore + UserStore + 'static,
    {
        let albums: Arc<dyn AlbumStore> = store.clone();
        let songs: Arc<dyn SongStore> = store.clone();
        let playlists: Arc<dyn PlaylistStore> = store.clone();
        let collaborations: Arc<dyn CollaborationStore> = store.clone();
        let users: Arc<dyn UserStore> = store;

        let authorizer = PlaylistAuthorizer::new(
            Arc::clone(&playlists),
            Arc::clone(&collaborations),
            Arc::clone(&users),
        );

        Self {
            albums: AlbumService::new(Arc::clone(&albums), Arc::clone(&songs), Arc::clone(&ids)),
            songs: SongService::new(Arc::clone(&songs), albums, Arc::clone(&ids)),
            playlists: PlaylistService::new(
                playlists,
                songs,
                authorizer.clone(),
                Arc::clone(&ids),
            ),
            collaborations: CollaborationService::new(collaborations, authorizer, Arc::clone(&ids)),
            users: UserService::new(users, ids),
        }
    }
}
