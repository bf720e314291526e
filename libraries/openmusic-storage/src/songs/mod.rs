use crate::rows::{expect_affected, expect_inserted};
use openmusic_core::{
    error::Result,
    types::{AlbumId, NewSong, Song, SongId},
    CatalogError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const ENTITY: &str = "Song";

pub(crate) fn map_song(row: &SqliteRow) -> Song {
    Song {
        id: row.get("id"),
        title: row.get("title"),
        year: row.get("year"),
        performer: row.get("performer"),
        genre: row.get("genre"),
        duration: row.get("duration"),
        album_id: row.get("album_id"),
    }
}

pub async fn create(pool: &SqlitePool, id: SongId, song: NewSong) -> Result<SongId> {
    let result = sqlx::query(
        "INSERT INTO songs (id, title, year, performer, genre, duration, album_id)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.performer)
    .bind(&song.genre)
    .bind(song.duration)
    .bind(&song.album_id)
    .execute(pool)
    .await?;

    expect_inserted(&result, ENTITY)?;
    Ok(id)
}

/// Get every song in insertion order. Filtering happens in the caller.
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, year, performer, genre, duration, album_id
         FROM songs
         ORDER BY rowid",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_song).collect())
}

pub async fn get_by_id(pool: &SqlitePool, id: SongId) -> Result<Song> {
    let row = sqlx::query(
        "SELECT id, title, year, performer, genre, duration, album_id
         FROM songs
         WHERE id = ?",
    )
    .bind(&id)
    .fetch_optional(pool)
    .await?;

    row.as_ref()
        .map(map_song)
        .ok_or_else(|| CatalogError::not_found(ENTITY, id.into_inner()))
}

pub async fn get_by_album(pool: &SqlitePool, album_id: AlbumId) -> Result<Vec<Song>> {
    let rows = sqlx::query(
        "SELECT id, title, year, performer, genre, duration, album_id
         FROM songs
         WHERE album_id = ?
         ORDER BY rowid",
    )
    .bind(&album_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(map_song).collect())
}

pub async fn update(pool: &SqlitePool, id: SongId, song: NewSong) -> Result<()> {
    let result = sqlx::query(
        "UPDATE songs
         SET title = ?, year = ?, performer = ?, genre = ?, duration = ?, album_id = ?
         WHERE id = ?",
    )
    .bind(&song.title)
    .bind(song.year)
    .bind(&song.performer)
    .bind(&song.genre)
    .bind(song.duration)
    .bind(&song.album_id)
    .bind(&id)
    .execute(pool)
    .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}

pub async fn delete(pool: &SqlitePool, id: SongId) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(&id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}
