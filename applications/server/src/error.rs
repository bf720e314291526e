/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use openmusic_core::CatalogError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl ServerError {
    /// HTTP status for this error. Anything not caused by the client is a 500.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::Catalog(err) => match err {
                CatalogError::Validation(_) | CatalogError::Invariant(_) => {
                    StatusCode::BAD_REQUEST
                }
                CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
                CatalogError::Forbidden(_) => StatusCode::FORBIDDEN,
                CatalogError::Conflict(_) => StatusCode::CONFLICT,
                CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::Auth(_) | ServerError::Jwt(_) => StatusCode::UNAUTHORIZED,
            ServerError::Config(_) | ServerError::Io(_) | ServerError::Bcrypt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
            let body = Json(json!({
                "status": "error",
                "message": "internal server error",
            }));
            return (status, body).into_response();
        }

        let message = match self {
            ServerError::Jwt(ref e) => {
                tracing::warn!("Token rejected: {}", e);
                "Invalid token".to_string()
            }
            ServerError::Auth(msg) => msg,
            other => other.to_string(),
        };

        let body = Json(json!({
            "status": "fail",
            "message": message,
        }));

        (status, body).into_response()
    }
}
