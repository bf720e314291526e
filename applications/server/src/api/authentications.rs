/// Authentication API routes
use super::{extract::Payload, response};
use crate::{error::Result, state::AppState};
use axum::{extract::State, response::Response};
use openmusic_core::validation::{LoginPayload, RefreshTokenPayload, Validate};
use serde_json::json;

/// POST /authentications
pub async fn login(
    State(app_state): State<AppState>,
    Payload(payload): Payload<LoginPayload>,
) -> Result<Response> {
    payload.validate()?;

    let credentials = app_state
        .catalog
        .users
        .find_credentials(&payload.username)
        .await?;
    let tokens = app_state
        .auth_service
        .login(credentials, &payload.password)?;

    Ok(response::created(
        "Authentication succeeded",
        json!({
            "accessToken": tokens.access_token,
            "refreshToken": tokens.refresh_token,
        }),
    ))
}

/// PUT /authentications
/// Exchange a refresh token for a new access token
pub async fn refresh(
    State(app_state): State<AppState>,
    Payload(payload): Payload<RefreshTokenPayload>,
) -> Result<Response> {
    payload.validate()?;

    let user_id = app_state
        .auth_service
        .verify_refresh_token(&payload.refresh_token)?;
    let access_token = app_state.auth_service.create_access_token(&user_id)?;

    Ok(response::ok(json!({ "accessToken": access_token })))
}
