/// Core error types for OpenMusic
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Every failure the catalog core can report.
///
/// The set is closed: callers match on the variant instead of inspecting
/// messages, and the transport layer owns the mapping to status codes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Malformed or missing payload fields, reported before any I/O
    #[error("{0}")]
    Validation(String),

    /// Referenced resource does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Acting identity lacks the owner or collaborator right
    #[error("{0}")]
    Forbidden(String),

    /// Uniqueness violation, e.g. a duplicate collaboration pair
    #[error("{0}")]
    Conflict(String),

    /// A write that should have affected rows affected none
    #[error("{0}")]
    Invariant(String),

    /// Anything unclassified. The message is for diagnostics only.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Create a forbidden error
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an invariant error
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::Conflict(format!("duplicate entry: {}", db_err.message()));
            }
            if db_err.is_foreign_key_violation() {
                return Self::Invariant(format!(
                    "referenced resource does not exist: {}",
                    db_err.message()
                ));
            }
        }
        Self::Internal(format!("database error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CatalogError::not_found("Album", "album-xyz");
        assert_eq!(err.to_string(), "Album not found: album-xyz");
        assert!(err.is_not_found());
    }

    #[test]
    fn client_facing_variants_display_message_verbatim() {
        assert_eq!(
            CatalogError::forbidden("not the owner").to_string(),
            "not the owner"
        );
        assert_eq!(
            CatalogError::validation("\"name\" is required").to_string(),
            "\"name\" is required"
        );
    }
}
