//! User accounts and login material

use crate::rows::{conflict_on_duplicate, expect_inserted};
use openmusic_core::{
    error::Result,
    types::{NewUser, User, UserCredentials, UserId},
};
use sqlx::{Row, SqlitePool};

/// Create a user
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `id` - Pre-generated user ID
/// * `user` - Username, display name and an already hashed password
pub async fn create(pool: &SqlitePool, id: UserId, user: NewUser) -> Result<UserId> {
    let result = sqlx::query(
        "INSERT INTO users (id, username, password_hash, fullname)
         VALUES (?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(&user.username)
    .bind(&user.password_hash)
    .bind(&user.fullname)
    .execute(pool)
    .await
    .map_err(|e| conflict_on_duplicate(e, "Username is already taken"))?;

    expect_inserted(&result, "user")?;
    Ok(id)
}

/// Check if a user exists
pub async fn exists(pool: &SqlitePool, id: UserId) -> Result<bool> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?) AS found")
        .bind(&id)
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("found") != 0)
}

/// Get a user's id and password hash for authentication
///
/// # Returns
///
/// Returns `None` if no user has this username
pub async fn find_credentials(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<UserCredentials>> {
    let row = sqlx::query("SELECT id, password_hash FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|row| UserCredentials {
        id: row.get("id"),
        password_hash: row.get("password_hash"),
    }))
}

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, username, fullname FROM users ORDER BY username")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| User {
            id: row.get("id"),
            username: row.get("username"),
            fullname: row.get("fullname"),
        })
        .collect())
}
