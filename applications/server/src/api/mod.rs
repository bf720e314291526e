/// API route modules
pub mod albums;
pub mod authentications;
pub mod collaborations;
pub mod extract;
pub mod health;
pub mod playlists;
pub mod response;
pub mod songs;
pub mod users;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router
pub fn router(app_state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/users", post(users::add_user))
        .route(
            "/authentications",
            post(authentications::login).put(authentications::refresh),
        )
        // Albums
        .route("/albums", post(albums::add_album))
        .route(
            "/albums/:id",
            get(albums::get_album)
                .put(albums::edit_album)
                .delete(albums::delete_album),
        )
        .route("/albums/:id/cover", put(albums::edit_album_cover))
        // Songs
        .route("/songs", post(songs::add_song).get(songs::list_songs))
        .route(
            "/songs/:id",
            get(songs::get_song)
                .put(songs::edit_song)
                .delete(songs::delete_song),
        );

    // Protected routes (auth required)
    let protected_routes = Router::new()
        // Playlists
        .route(
            "/playlists",
            post(playlists::add_playlist).get(playlists::list_playlists),
        )
        .route(
            "/playlists/:id",
            put(playlists::rename_playlist).delete(playlists::delete_playlist),
        )
        .route(
            "/playlists/:id/songs",
            post(playlists::add_playlist_song)
                .get(playlists::get_playlist_songs)
                .delete(playlists::delete_playlist_song),
        )
        // Collaborations
        .route(
            "/collaborations",
            post(collaborations::add_collaboration).delete(collaborations::delete_collaboration),
        )
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
