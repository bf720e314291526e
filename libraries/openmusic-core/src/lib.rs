//! OpenMusic Core
//!
//! Storage-agnostic catalog logic for the OpenMusic service.
//!
//! This crate owns every rule about who may read, change or delete an album,
//! song, playlist or collaboration. It performs no I/O itself: persistence is
//! reached through the store traits in [`storage`], which the
//! `openmusic-storage` crate implements on top of `SQLite`.
//!
//! # Architecture
//!
//! - **Domain Types**: `Album`, `Song`, `Playlist`, `Collaboration`, `User`
//! - **Store Traits**: one per resource type (`AlbumStore`, `SongStore`, ...)
//! - **Authorizer**: owner / collaborator checks for playlists
//! - **Services**: one facade per resource family, validation first
//! - **Error Handling**: the closed `CatalogError` taxonomy
//!
//! # Example
//!
//! ```rust
//! use openmusic_core::aggregate::aggregate_album;
//! use openmusic_core::types::{Album, AlbumId};
//!
//! let album = Album {
//!     id: AlbumId::new("album-1"),
//!     name: "A Night at the Opera".to_string(),
//!     year: 1975,
//!     cover_url: None,
//!     created_at: "2024-01-01T00:00:00Z".to_string(),
//!     updated_at: "2024-01-01T00:00:00Z".to_string(),
//! };
//!
//! let view = aggregate_album(album, Vec::new());
//! assert!(view.songs.is_empty());
//! ```

#![forbid(unsafe_code)]

pub mod aggregate;
pub mod authorizer;
pub mod error;
pub mod filter;
pub mod id_gen;
pub mod services;
pub mod storage;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use authorizer::PlaylistAuthorizer;
pub use error::{CatalogError, Result};
pub use id_gen::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use services::CatalogServices;
pub use storage::{AlbumStore, CollaborationStore, PlaylistStore, SongStore, UserStore};
pub use validation::Validate;

pub use types::{
    Album, AlbumId, AlbumView, Collaboration, CollaborationId, NewAlbum, NewSong, NewUser,
    Playlist, PlaylistId, PlaylistSongsView, PlaylistSummary, Song, SongId, SongSummary, User,
    UserCredentials, UserId,
};
