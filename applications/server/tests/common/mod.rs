//! Common test utilities and fixtures
//!
//! Each test gets its own router over a REAL temporary SQLite file.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use openmusic_core::{CatalogServices, RandomIdGenerator};
use openmusic_server::{router, AppState, AuthService};
use openmusic_storage::SqliteCatalog;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";
pub const TEST_PASSWORD: &str = "TestPassword123!";

/// Router plus the temp dir holding its database
pub struct TestApp {
    pub router: Router,
    pub auth_service: Arc<AuthService>,
    _temp_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

        let pool = openmusic_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");
        openmusic_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        let catalog = CatalogServices::new(
            Arc::new(SqliteCatalog::new(pool)),
            Arc::new(RandomIdGenerator),
        );

        // Minimum bcrypt cost keeps registration fast
        let auth_service =
            Arc::new(AuthService::new(TEST_SECRET.to_string(), 1, 1).with_bcrypt_cost(4));

        let router = router(AppState::new(Arc::new(catalog), Arc::clone(&auth_service)));

        Self {
            router,
            auth_service,
            _temp_dir: temp_dir,
        }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, body).await
    }

    /// Register a user, returning its id
    pub async fn register(&self, username: &str) -> String {
        let (status, body) = self
            .post(
                "/users",
                None,
                json!({
                    "username": username,
                    "password": TEST_PASSWORD,
                    "fullname": format!("{username} Tester"),
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

        body["data"]["userId"].as_str().unwrap().to_string()
    }

    /// Log in, returning the access token
    pub async fn login(&self, username: &str) -> String {
        let (status, body) = self
            .post(
                "/authentications",
                None,
                json!({ "username": username, "password": TEST_PASSWORD }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "login failed: {body}");

        body["data"]["accessToken"].as_str().unwrap().to_string()
    }

    /// Register and log in, returning `(user_id, access_token)`
    pub async fn user(&self, username: &str) -> (String, String) {
        let id = self.register(username).await;
        let token = self.login(username).await;
        (id, token)
    }

    /// Create an album, returning its id
    pub async fn album(&self, name: &str, year: i32) -> String {
        let (status, body) = self
            .post("/albums", None, json!({ "name": name, "year": year }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "album failed: {body}");

        body["data"]["albumId"].as_str().unwrap().to_string()
    }

    /// Create a song, returning its id
    pub async fn song(&self, title: &str, performer: &str, album_id: Option<&str>) -> String {
        let (status, body) = self
            .post(
                "/songs",
                None,
                json!({
                    "title": title,
                    "year": 2008,
                    "performer": performer,
                    "genre": "Pop",
                    "duration": 240,
                    "albumId": album_id,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "song failed: {body}");

        body["data"]["songId"].as_str().unwrap().to_string()
    }

    /// Create a playlist owned by the token's user, returning its id
    pub async fn playlist(&self, token: &str, name: &str) -> String {
        let (status, body) = self
            .post("/playlists", Some(token), json!({ "name": name }))
            .await;
        assert_eq!(status, StatusCode::CREATED, "playlist failed: {body}");

        body["data"]["playlistId"].as_str().unwrap().to_string()
    }
}
