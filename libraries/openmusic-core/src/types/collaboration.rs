//! Collaboration types

use super::{CollaborationId, PlaylistId, UserId};
use serde::{Deserialize, Serialize};

/// Write access on a playlist granted by its owner to another user.
///
/// At most one row exists per `(playlist_id, user_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collaboration {
    pub id: CollaborationId,
    pub playlist_id: PlaylistId,
    pub user_id: UserId,
}
