//! Helpers shared by the slices for turning row counts and constraint
//! failures into catalog errors

use openmusic_core::{error::Result, CatalogError};
use sqlx::sqlite::SqliteQueryResult;

/// Zero affected rows on an update or delete means the target did not exist
pub(crate) fn expect_affected(
    result: &SqliteQueryResult,
    entity: &str,
    id: impl Into<String>,
) -> Result<()> {
    if result.rows_affected() == 0 {
        return Err(CatalogError::not_found(entity, id));
    }
    Ok(())
}

/// Zero affected rows on an insert is an invariant violation
pub(crate) fn expect_inserted(result: &SqliteQueryResult, entity: &str) -> Result<()> {
    if result.rows_affected() == 0 {
        return Err(CatalogError::invariant(format!("Failed to add {entity}")));
    }
    Ok(())
}

/// Report a unique-constraint failure with a caller-facing message, keeping
/// the generic classification for every other error
pub(crate) fn conflict_on_duplicate(err: sqlx::Error, message: &str) -> CatalogError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            CatalogError::conflict(message)
        }
        _ => err.into(),
    }
}
