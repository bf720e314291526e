use crate::rows::{conflict_on_duplicate, expect_affected, expect_inserted};
use openmusic_core::{
    error::Result,
    types::{Collaboration, CollaborationId, PlaylistId, UserId},
};
use sqlx::{Row, SqlitePool};

const ENTITY: &str = "Collaboration";

/// Insert a collaboration and return the stored row. The
/// `(playlist_id, user_id)` unique constraint rejects duplicates, including
/// concurrent ones.
pub async fn create(
    pool: &SqlitePool,
    id: CollaborationId,
    playlist_id: PlaylistId,
    user_id: UserId,
) -> Result<Collaboration> {
    let result = sqlx::query(
        "INSERT INTO collaborations (id, playlist_id, user_id)
         VALUES (?, ?, ?)",
    )
    .bind(&id)
    .bind(&playlist_id)
    .bind(&user_id)
    .execute(pool)
    .await
    .map_err(|e| conflict_on_duplicate(e, "User is already a collaborator on this playlist"))?;

    expect_inserted(&result, ENTITY)?;
    Ok(Collaboration {
        id,
        playlist_id,
        user_id,
    })
}

pub async fn delete(pool: &SqlitePool, playlist_id: PlaylistId, user_id: UserId) -> Result<()> {
    let result = sqlx::query("DELETE FROM collaborations WHERE playlist_id = ? AND user_id = ?")
        .bind(&playlist_id)
        .bind(&user_id)
        .execute(pool)
        .await?;

    expect_affected(&result, ENTITY, format!("{playlist_id}/{user_id}"))
}

pub async fn exists(pool: &SqlitePool, playlist_id: PlaylistId, user_id: UserId) -> Result<bool> {
    let row = sqlx::query(
        "SELECT EXISTS(
             SELECT 1 FROM collaborations WHERE playlist_id = ? AND user_id = ?
         ) AS found",
    )
    .bind(&playlist_id)
    .bind(&user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("found") != 0)
}
