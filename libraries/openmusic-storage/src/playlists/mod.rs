use crate::rows::{conflict_on_duplicate, expect_affected, expect_inserted};
use crate::songs::map_song;
use chrono::Utc;
use openmusic_core::{
    error::Result,
    types::{Playlist, PlaylistId, Song, SongId, UserId},
    CatalogError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const ENTITY: &str = "Playlist";

fn map_playlist(row: &SqliteRow) -> Playlist {
    Playlist {
        id: row.get("id"),
        name: row.get("name"),
        owner_id: row.get("owner_id"),
        username: row.get("username"),
    }
}

/// Create new playlist
pub async fn create(
    pool: &SqlitePool,
    id: PlaylistId,
    name: String,
    owner_id: UserId,
) -> Result<PlaylistId> {
    let result = sqlx::query(
        "INSERT INTO playlists (id, name, owner_id, created_at)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&name)
    .bind(&owner_id)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await?;

    expect_inserted(&result, ENTITY)?;
    Ok(id)
}

/// Get playlist by ID, with the owner's username
pub async fn get_by_id(pool: &SqlitePool, id: PlaylistId) -> Result<Playlist> {
    let row = sqlx::query(
        "SELECT p.id, p.name, p.owner_id, u.username
         FROM playlists p
         INNER JOIN users u ON u.id = p.owner_id
         WHERE p.id = ?",
    )
    .bind(&id)
    .fetch_optional(pool)
    .await?;

    row.as_ref()
        .map(map_playlist)
        .ok_or_else(|| CatalogError::not_found(ENTITY, id.into_inner()))
}

/// Get only the owner. Used by the authorizer before every gated operation.
pub async fn get_owner(pool: &SqlitePool, id: PlaylistId) -> Result<UserId> {
    let row = sqlx::query("SELECT owner_id FROM playlists WHERE id = ?")
        .bind(&id)
        .fetch_optional(pool)
        .await?;

    row.map(|row| row.get("owner_id"))
        .ok_or_else(|| CatalogError::not_found(ENTITY, id.into_inner()))
}

/// Get user's playlists (owned + collaborating)
pub async fn get_for_user(pool: &SqlitePool, user_id: UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        "SELECT p.id, p.name, p.owner_id, u.username
         FROM playlists p
         INNER JOIN users u ON u.id = p.owner_id
         WHERE p.owner_id = ?
            OR p.id IN (SELECT playlist_id FROM collaborations WHERE user_id = ?)
         ORDER BY p.created_at, p.rowid",
    )
    .bind(&user_id)
    .bind(&user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_playlist).collect())
}

pub async fn rename(pool: &SqlitePool, id: PlaylistId, name: String) -> Result<()> {
    let result = sqlx::query("UPDATE playlists SET name = ? WHERE id = ?")
        .bind(&name)
        .bind(&id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}

/// Delete playlist. Song entries and collaborations cascade.
pub async fn delete(pool: &SqlitePool, id: PlaylistId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(&id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}

/// Add song to playlist
pub async fn add_song(pool: &SqlitePool, id: PlaylistId, song_id: SongId) -> Result<()> {
    let result = sqlx::query(
        "INSERT INTO playlist_songs (playlist_id, song_id, added_at)
         VALUES (?, ?, ?)",
    )
    .bind(&id)
    .bind(&song_id)
    .bind(Utc::now().to_rfc3339())
    .execute(pool)
    .await
    .map_err(|e| conflict_on_duplicate(e, "Song is already in the playlist"))?;

    expect_inserted(&result, "playlist song")
}

/// Get playlist songs in the order they were added
pub async fn get_songs(pool: &SqlitePool, id: PlaylistId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT s.id, s.title, s.year, s.performer, s.genre, s.duration, s.album_id
         FROM playlist_songs ps
         INNER JOIN songs s ON s.id = ps.song_id
         WHERE ps.playlist_id = ?
         ORDER BY ps.rowid",
    )
    .bind(&id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_song).collect())
}

/// Remove song from playlist
pub async fn remove_song(pool: &SqlitePool, id: PlaylistId, song_id: SongId) -> Result<()> {
    let result = sqlx::query("DELETE FROM playlist_songs WHERE playlist_id = ? AND song_id = ?")
        .bind(&id)
        .bind(&song_id)
        .execute(pool)
        .await?;

    expect_affected(&result, "Playlist song", format!("{id}/{song_id}"))
}
