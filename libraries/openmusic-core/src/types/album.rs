//! Album types

use super::{AlbumId, SongSummary};
use serde::{Deserialize, Serialize};

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub year: i32,
    pub cover_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Data for creating or replacing an album's editable fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAlbum {
    pub name: String,
    pub year: i32,
}

/// An album together with the songs that reference it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumView {
    #[serde(flatten)]
    pub album: Album,
    pub songs: Vec<SongSummary>,
}
