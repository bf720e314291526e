//! Ownership and collaboration checks for playlists
//!
//! Authorization is always its own step, run before the mutating store call.
//! A missing playlist is reported as `NotFound` before ownership is looked at,
//! so absence never shows up as `Forbidden`.

use crate::error::{CatalogError, Result};
use crate::storage::{CollaborationStore, PlaylistStore, UserStore};
use crate::types::{PlaylistId, UserId};
use std::sync::Arc;

const FORBIDDEN_MESSAGE: &str = "You are not entitled to access this resource";

#[derive(Clone)]
pub struct PlaylistAuthorizer {
    playlists: Arc<dyn PlaylistStore>,
    collaborations: Arc<dyn CollaborationStore>,
    users: Arc<dyn UserStore>,
}

impl PlaylistAuthorizer {
    pub fn new(
        playlists: Arc<dyn PlaylistStore>,
        collaborations: Arc<dyn CollaborationStore>,
        users: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            playlists,
            collaborations,
            users,
        }
    }

    /// `Ok` only when `user_id` owns the playlist
    pub async fn verify_owner(&self, playlist_id: &PlaylistId, user_id: &UserId) -> Result<()> {
        let owner = self.playlists.get_playlist_owner(playlist_id.clone()).await?;
        if &owner != user_id {
            tracing::debug!(%playlist_id, %user_id, "rejected non-owner");
            return Err(CatalogError::forbidden(FORBIDDEN_MESSAGE));
        }
        Ok(())
    }

    /// `Ok` when `user_id` owns the playlist or collaborates on it
    pub async fn verify_owner_or_collaborator(
        &self,
        playlist_id: &PlaylistId,
        user_id: &UserId,
    ) -> Result<()> {
        let owner = self.playlists.get_playlist_owner(playlist_id.clone()).await?;
        if &owner == user_id {
            return Ok(());
        }

        let is_collaborator = self
            .collaborations
            .is_collaborator(playlist_id.clone(), user_id.clone())
            .await?;
        if !is_collaborator {
            tracing::debug!(%playlist_id, %user_id, "rejected non-owner non-collaborator");
            return Err(CatalogError::forbidden(FORBIDDEN_MESSAGE));
        }
        Ok(())
    }

    /// `Ok` when the user exists
    pub async fn verify_user_exists(&self, user_id: &UserId) -> Result<()> {
        if !self.users.user_exists(user_id.clone()).await? {
            return Err(CatalogError::not_found("User", user_id.as_str()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MockCollaborationStore, MockPlaylistStore, MockUserStore};
    use mockall::predicate::eq;

    fn owned_by(owner: &'static str) -> MockPlaylistStore {
        let mut playlists = MockPlaylistStore::new();
        playlists
            .expect_get_playlist_owner()
            .returning(move |_| Ok(UserId::new(owner)));
        playlists
    }

    fn missing_playlist() -> MockPlaylistStore {
        let mut playlists = MockPlaylistStore::new();
        playlists
            .expect_get_playlist_owner()
            .returning(|id| Err(CatalogError::not_found("Playlist", id.as_str())));
        playlists
    }

    fn authorizer(
        playlists: MockPlaylistStore,
        collaborations: MockCollaborationStore,
        users: MockUserStore,
    ) -> PlaylistAuthorizer {
        PlaylistAuthorizer::new(Arc::new(playlists), Arc::new(collaborations), Arc::new(users))
    }

    #[tokio::test]
    async fn owner_passes_owner_check() {
        let auth = authorizer(
            owned_by("user-owner"),
            MockCollaborationStore::new(),
            MockUserStore::new(),
        );

        let result = auth
            .verify_owner(&PlaylistId::new("playlist-1"), &UserId::new("user-owner"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn stranger_is_forbidden_by_owner_check() {
        let auth = authorizer(
            owned_by("user-owner"),
            MockCollaborationStore::new(),
            MockUserStore::new(),
        );

        let result = auth
            .verify_owner(&PlaylistId::new("playlist-1"), &UserId::new("user-other"))
            .await;
        assert!(matches!(result, Err(CatalogError::Forbidden(_))));
    }

    #[tokio::test]
    async fn missing_playlist_is_not_found_not_forbidden() {
        let auth = authorizer(
            missing_playlist(),
            MockCollaborationStore::new(),
            MockUserStore::new(),
        );

        let owner_check = auth
            .verify_owner(&PlaylistId::new("playlist-x"), &UserId::new("user-1"))
            .await;
        assert!(matches!(owner_check, Err(CatalogError::NotFound { .. })));

        let access_check = auth
            .verify_owner_or_collaborator(&PlaylistId::new("playlist-x"), &UserId::new("user-1"))
            .await;
        assert!(matches!(access_check, Err(CatalogError::NotFound { .. })));
    }

    #[tokio::test]
    async fn owner_skips_collaboration_lookup() {
        // No expectations on the collaboration mock: any call would panic
        let auth = authorizer(
            owned_by("user-owner"),
            MockCollaborationStore::new(),
            MockUserStore::new(),
        );

        let result = auth
            .verify_owner_or_collaborator(
                &PlaylistId::new("playlist-1"),
                &UserId::new("user-owner"),
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn collaborator_passes_access_check() {
        let mut collaborations = MockCollaborationStore::new();
        collaborations
            .expect_is_collaborator()
            .with(eq(PlaylistId::new("playlist-1")), eq(UserId::new("user-collab")))
            .times(1)
            .returning(|_, _| Ok(true));

        let auth = authorizer(owned_by("user-owner"), collaborations, MockUserStore::new());

        let result = auth
            .verify_owner_or_collaborator(
                &PlaylistId::new("playlist-1"),
                &UserId::new("user-collab"),
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn stranger_is_forbidden_by_access_check() {
        let mut collaborations = MockCollaborationStore::new();
        collaborations
            .expect_is_collaborator()
            .returning(|_, _| Ok(false));

        let auth = authorizer(owned_by("user-owner"), collaborations, MockUserStore::new());

        let result = auth
            .verify_owner_or_collaborator(
                &PlaylistId::new("playlist-1"),
                &UserId::new("user-other"),
            )
            .await;
        assert!(matches!(result, Err(CatalogError::Forbidden(_))));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let mut users = MockUserStore::new();
        users
            .expect_user_exists()
            .with(eq(UserId::new("user-ghost")))
            .returning(|_| Ok(false));

        let auth = authorizer(MockPlaylistStore::new(), MockCollaborationStore::new(), users);

        let result = auth.verify_user_exists(&UserId::new("user-ghost")).await;
        assert_eq!(result, Err(CatalogError::not_found("User", "user-ghost")));
    }
}
