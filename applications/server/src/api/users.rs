/// User registration
use super::{extract::Payload, response};
use crate::{error::Result, state::AppState};
use axum::{extract::State, response::Response};
use openmusic_core::{validation::UserPayload, CatalogError};
use serde_json::json;

/// POST /users
pub async fn add_user(
    State(app_state): State<AppState>,
    Payload(payload): Payload<UserPayload>,
) -> Result<Response> {
    let auth_service = &app_state.auth_service;
    let user_id = app_state
        .catalog
        .users
        .add_user(payload, |password| {
            auth_service
                .hash_password(password)
                .map_err(|e| CatalogError::internal(e.to_string()))
        })
        .await?;

    Ok(response::created("User added", json!({ "userId": user_id })))
}
