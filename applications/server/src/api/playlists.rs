/// Playlists API routes
///
/// Every route here sits behind the auth middleware; the acting user comes
/// from the access token.
use super::{extract::Payload, response};
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{
    extract::{Path, State},
    response::Response,
};
use openmusic_core::{
    types::PlaylistId,
    validation::{PlaylistPayload, PlaylistSongPayload},
};
use serde_json::json;

/// POST /playlists
pub async fn add_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(payload): Payload<PlaylistPayload>,
) -> Result<Response> {
    let playlist_id = app_state
        .catalog
        .playlists
        .add_playlist(auth.user_id(), payload)
        .await?;

    Ok(response::created(
        "Playlist added",
        json!({ "playlistId": playlist_id }),
    ))
}

/// GET /playlists
/// Playlists the caller owns or collaborates on
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Response> {
    let playlists = app_state
        .catalog
        .playlists
        .get_playlists(auth.user_id())
        .await?;

    Ok(response::ok(json!({ "playlists": playlists })))
}

/// PUT /playlists/:id
pub async fn rename_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(payload): Payload<PlaylistPayload>,
) -> Result<Response> {
    app_state
        .catalog
        .playlists
        .rename_playlist(&id, auth.user_id(), payload)
        .await?;

    Ok(response::message("Playlist renamed"))
}

/// DELETE /playlists/:id
pub async fn delete_playlist(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Response> {
    app_state
        .catalog
        .playlists
        .delete_playlist(&id, auth.user_id())
        .await?;

    Ok(response::message("Playlist deleted"))
}

/// POST /playlists/:id/songs
pub async fn add_playlist_song(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(payload): Payload<PlaylistSongPayload>,
) -> Result<Response> {
    app_state
        .catalog
        .playlists
        .add_playlist_song(&id, auth.user_id(), payload)
        .await?;

    Ok(response::created("Song added to playlist", json!({})))
}

/// GET /playlists/:id/songs
pub async fn get_playlist_songs(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Response> {
    let playlist = app_state
        .catalog
        .playlists
        .get_playlist_songs(&id, auth.user_id())
        .await?;

    Ok(response::ok(json!({ "playlist": playlist })))
}

/// DELETE /playlists/:id/songs
pub async fn delete_playlist_song(
    Path(id): Path<PlaylistId>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(payload): Payload<PlaylistSongPayload>,
) -> Result<Response> {
    app_state
        .catalog
        .playlists
        .delete_playlist_song(&id, auth.user_id(), payload)
        .await?;

    Ok(response::message("Song removed from playlist"))
}
