/// Albums API routes
use super::{extract::Payload, response};
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Path, State},
    response::Response,
};
use openmusic_core::{
    types::AlbumId,
    validation::{AlbumCoverPayload, AlbumPayload},
};
use serde_json::json;

/// POST /albums
pub async fn add_album(
    State(app_state): State<AppState>,
    Payload(payload): Payload<AlbumPayload>,
) -> Result<Response> {
    let album_id = app_state.catalog.albums.add_album(payload).await?;

    Ok(response::created(
        "Album added",
        json!({ "albumId": album_id }),
    ))
}

/// GET /albums/:id
/// Album details with the songs attached to it
pub async fn get_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    let album = app_state.catalog.albums.get_album_by_id(&id).await?;

    Ok(response::ok(json!({ "album": album })))
}

/// PUT /albums/:id
pub async fn edit_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
    Payload(payload): Payload<AlbumPayload>,
) -> Result<Response> {
    app_state.catalog.albums.edit_album_by_id(&id, payload).await?;

    Ok(response::message("Album updated"))
}

/// PUT /albums/:id/cover
pub async fn edit_album_cover(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
    Payload(payload): Payload<AlbumCoverPayload>,
) -> Result<Response> {
    app_state.catalog.albums.edit_album_cover(&id, payload).await?;

    Ok(response::message("Album cover updated"))
}

/// DELETE /albums/:id
pub async fn delete_album(
    Path(id): Path<AlbumId>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    app_state.catalog.albums.delete_album_by_id(&id).await?;

    Ok(response::message("Album deleted"))
}
