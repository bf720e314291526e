/// JSON body extractor that reports bad bodies as validation failures
use crate::error::ServerError;
use axum::{
    extract::{FromRequest, Request},
    Json,
};
use openmusic_core::CatalogError;
use serde::de::DeserializeOwned;

/// Like [`Json`], but a body that is missing, not JSON, or the wrong shape is
/// rejected with a 400 in the usual failure envelope
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => {
                tracing::debug!(%rejection, "rejected request body");
                Err(CatalogError::validation(rejection.body_text()).into())
            }
        }
    }
}
