/// Collaborations API routes
use super::{extract::Payload, response};
use crate::{error::Result, middleware::AuthenticatedUser, state::AppState};
use axum::{extract::State, response::Response};
use openmusic_core::validation::CollaborationPayload;
use serde_json::json;

/// POST /collaborations
/// Only the playlist owner may grant collaboration
pub async fn add_collaboration(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(payload): Payload<CollaborationPayload>,
) -> Result<Response> {
    let collaboration = app_state
        .catalog
        .collaborations
        .add_collaboration(auth.user_id(), payload)
        .await?;

    Ok(response::created(
        "Collaboration added",
        json!({ "collaborationId": collaboration.id }),
    ))
}

/// DELETE /collaborations
pub async fn delete_collaboration(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Payload(payload): Payload<CollaborationPayload>,
) -> Result<Response> {
    app_state
        .catalog
        .collaborations
        .delete_collaboration(auth.user_id(), payload)
        .await?;

    Ok(response::message("Collaboration deleted"))
}
