/// Shared application state
use crate::services::AuthService;
use openmusic_core::CatalogServices;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogServices>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogServices>, auth_service: Arc<AuthService>) -> Self {
        Self {
            catalog,
            auth_service,
        }
    }
}
