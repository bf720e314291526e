/// Songs API routes
use super::{extract::Payload, response};
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, Query, State},
    response::Response,
};
use openmusic_core::{filter::SongFilter, types::SongId, validation::SongPayload};
use serde_json::json;

/// POST /songs
pub async fn add_song(
    State(app_state): State<AppState>,
    Payload(payload): Payload<SongPayload>,
) -> Result<Response> {
    let song_id = app_state.catalog.songs.add_song(payload).await?;

    Ok(response::created("Song added", json!({ "songId": song_id })))
}

/// GET /songs?title=&performer=
/// Song summaries, optionally filtered by case-insensitive substring
pub async fn list_songs(
    State(app_state): State<AppState>,
    Query(filter): Query<SongFilter>,
) -> Result<Response> {
    let songs = app_state.catalog.songs.get_songs(&filter).await?;

    Ok(response::ok(json!({ "songs": songs })))
}

/// GET /songs/:id
pub async fn get_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    let song = app_state.catalog.songs.get_song_by_id(&id).await?;

    Ok(response::ok(json!({ "song": song })))
}

/// PUT /songs/:id
pub async fn edit_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
    Payload(payload): Payload<SongPayload>,
) -> Result<Response> {
    app_state.catalog.songs.edit_song_by_id(&id, payload).await?;

    Ok(response::message("Song updated"))
}

/// DELETE /songs/:id
pub async fn delete_song(
    Path(id): Path<SongId>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    app_state.catalog.songs.delete_song_by_id(&id).await?;

    Ok(response::message("Song deleted"))
}
