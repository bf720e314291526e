use crate::rows::{expect_affected, expect_inserted};
use chrono::Utc;
use openmusic_core::{
    error::Result,
    types::{Album, AlbumId, NewAlbum},
    CatalogError,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const ENTITY: &str = "Album";

fn map_album(row: &SqliteRow) -> Album {
    Album {
        id: row.get("id"),
        name: row.get("name"),
        year: row.get("year"),
        cover_url: row.get("cover_url"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

pub async fn create(pool: &SqlitePool, id: AlbumId, album: NewAlbum) -> Result<AlbumId> {
    let now = Utc::now().to_rfc3339();

    let result = sqlx::query(
        "INSERT INTO albums (id, name, year, cover_url, created_at, updated_at)
         VALUES (?, ?, ?, NULL, ?, ?)",
    )
    .bind(&id)
    .bind(&album.name)
    .bind(album.year)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    expect_inserted(&result, ENTITY)?;
    Ok(id)
}

pub async fn get_by_id(pool: &SqlitePool, id: AlbumId) -> Result<Album> {
    let row = sqlx::query(
        "SELECT id, name, year, cover_url, created_at, updated_at
         FROM albums
         WHERE id = ?",
    )
    .bind(&id)
    .fetch_optional(pool)
    .await?;

    row.as_ref()
        .map(map_album)
        .ok_or_else(|| CatalogError::not_found(ENTITY, id.into_inner()))
}

pub async fn update(pool: &SqlitePool, id: AlbumId, album: NewAlbum) -> Result<()> {
    let result = sqlx::query("UPDATE albums SET name = ?, year = ?, updated_at = ? WHERE id = ?")
        .bind(&album.name)
        .bind(album.year)
        .bind(Utc::now().to_rfc3339())
        .bind(&id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}

pub async fn set_cover(pool: &SqlitePool, id: AlbumId, cover_url: String) -> Result<()> {
    let result = sqlx::query("UPDATE albums SET cover_url = ?, updated_at = ? WHERE id = ?")
        .bind(&cover_url)
        .bind(Utc::now().to_rfc3339())
        .bind(&id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}

/// Delete an album. The schema nulls `songs.album_id` for its songs.
pub async fn delete(pool: &SqlitePool, id: AlbumId) -> Result<()> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(&id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, id.into_inner())
}
