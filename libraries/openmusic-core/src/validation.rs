//! Request payloads and their shape rules
//!
//! Every service method validates its payload before touching a store, so a
//! rejected request never causes I/O.

use crate::error::{CatalogError, Result};
use crate::types::{AlbumId, NewAlbum, NewSong, PlaylistId, SongId, UserId};
use chrono::{Datelike, Utc};
use serde::Deserialize;

/// Earliest release year accepted for albums and songs
pub const MIN_YEAR: i32 = 1900;

/// Longest accepted username
pub const MAX_USERNAME_LEN: usize = 50;

/// Shape check for an incoming payload
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AlbumPayload {
    pub name: String,
    pub year: i32,
}

impl Validate for AlbumPayload {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_year(self.year)
    }
}

impl From<AlbumPayload> for NewAlbum {
    fn from(payload: AlbumPayload) -> Self {
        Self {
            name: payload.name,
            year: payload.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumCoverPayload {
    pub cover_url: String,
}

impl Validate for AlbumCoverPayload {
    fn validate(&self) -> Result<()> {
        require_text("coverUrl", &self.cover_url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    pub title: String,
    pub year: i32,
    pub performer: String,
    pub genre: String,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<AlbumId>,
}

impl Validate for SongPayload {
    fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_year(self.year)?;
        require_text("performer", &self.performer)?;
        require_text("genre", &self.genre)?;
        if let Some(duration) = self.duration {
            if duration < 0 {
                return Err(CatalogError::validation(
                    "\"duration\" must be greater than or equal to 0",
                ));
            }
        }
        if let Some(album_id) = &self.album_id {
            require_text("albumId", album_id.as_str())?;
        }
        Ok(())
    }
}

impl From<SongPayload> for NewSong {
    fn from(payload: SongPayload) -> Self {
        Self {
            title: payload.title,
            year: payload.year,
            performer: payload.performer,
            genre: payload.genre,
            duration: payload.duration,
            album_id: payload.album_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaylistPayload {
    pub name: String,
}

impl Validate for PlaylistPayload {
    fn validate(&self) -> Result<()> {
        require_text("name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSongPayload {
    pub song_id: SongId,
}

impl Validate for PlaylistSongPayload {
    fn validate(&self) -> Result<()> {
        require_text("songId", self.song_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationPayload {
    pub playlist_id: PlaylistId,
    pub user_id: UserId,
}

impl Validate for CollaborationPayload {
    fn validate(&self) -> Result<()> {
        require_text("playlistId", self.playlist_id.as_str())?;
        require_text("userId", self.user_id.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl Validate for UserPayload {
    fn validate(&self) -> Result<()> {
        require_text("username", &self.username)?;
        if self.username.chars().count() > MAX_USERNAME_LEN {
            return Err(CatalogError::validation(format!(
                "\"username\" must be at most {MAX_USERNAME_LEN} characters long"
            )));
        }
        require_text("password", &self.password)?;
        require_text("fullname", &self.fullname)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

impl Validate for LoginPayload {
    fn validate(&self) -> Result<()> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenPayload {
    pub refresh_token: String,
}

impl Validate for RefreshTokenPayload {
    fn validate(&self) -> Result<()> {
        require_text("refreshToken", &self.refresh_token)
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::validation(format!(
            "\"{field}\" is not allowed to be empty"
        )));
    }
    Ok(())
}

fn require_year(year: i32) -> Result<()> {
    let current = Utc::now().year();
    if !(MIN_YEAR..=current).contains(&year) {
        return Err(CatalogError::validation(format!(
            "\"year\" must be between {MIN_YEAR} and {current}"
        )));
    }
    Ok(())
}
