use crate::authorizer::PlaylistAuthorizer;
use crate::error::Result;
use crate::id_gen::IdGenerator;
use crate::storage::CollaborationStore;
use crate::types::{Collaboration, CollaborationId, UserId};
use crate::validation::{CollaborationPayload, Validate};
use std::sync::Arc;

/// Granting and revoking playlist collaboration. Owner only.
#[derive(Clone)]
pub struct CollaborationService {
    collaborations: Arc<dyn CollaborationStore>,
    authorizer: PlaylistAuthorizer,
    ids: Arc<dyn IdGenerator>,
}

impl CollaborationService {
    pub fn new(
        collaborations: Arc<dyn CollaborationStore>,
        authorizer: PlaylistAuthorizer,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            collaborations,
            authorizer,
            ids,
        }
    }

    /// Grant `payload.user_id` collaboration on `payload.playlist_id`.
    ///
    /// Order: payload, target user exists, acting user owns the playlist,
    /// insert. A duplicate pair fails with `Conflict` from the store.
    pub async fn add_collaboration(
        &self,
        acting_user: &UserId,
        payload: CollaborationPayload,
    ) -> Result<Collaboration> {
        payload.validate()?;
        self.authorizer.verify_user_exists(&payload.user_id).await?;
        self.authorizer
            .verify_owner(&payload.playlist_id, acting_user)
            .await?;

        let id = CollaborationId::generate(self.ids.as_ref());
        self.collaborations
            .add_collaboration(id, payload.playlist_id, payload.user_id)
            .await
    }

    /// Revoke a collaboration. `NotFound` if the pair was never granted.
    pub async fn delete_collaboration(
        &self,
        acting_user: &UserId,
        payload: CollaborationPayload,
    ) -> Result<()> {
        payload.validate()?;
        self.authorizer
            .verify_owner(&payload.playlist_id, acting_user)
            .await?;

        self.collaborations
            .delete_collaboration(payload.playlist_id, payload.user_id)
            .await
    }
}
