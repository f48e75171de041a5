//! Store error types

use thiserror::Error;

/// Errors reported by [`Store`](crate::store::Store) operations.
///
/// The variants map onto the phases of a unit of work: begin, statements,
/// commit, rollback. Statement errors from inside a unit of work propagate
/// unchanged; only the executor adds the begin/commit/rollback distinction.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to begin transaction: {0}")]
    Begin(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Statement(#[from] sqlx::Error),

    #[error("failed to commit transaction: {0}")]
    Commit(#[source] sqlx::Error),

    /// A statement failed and the subsequent rollback failed too. Neither
    /// cause is dropped.
    #[error("tx err: {source}, rb err: {rollback}")]
    Rollback {
        source: Box<StoreError>,
        rollback: sqlx::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_from_sqlx() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Statement(_)));
    }

    #[test]
    fn test_rollback_display_names_both_causes() {
        let source = Box::new(StoreError::Statement(sqlx::Error::RowNotFound));
        let err = StoreError::Rollback {
            source,
            rollback: sqlx::Error::PoolClosed,
        };
        let msg = err.to_string();
        assert!(msg.contains("tx err:"), "missing original cause: {}", msg);
        assert!(msg.contains("rb err:"), "missing rollback cause: {}", msg);
    }

    #[test]
    fn test_begin_and_commit_display() {
        let begin = StoreError::Begin(sqlx::Error::PoolTimedOut);
        assert!(begin.to_string().starts_with("failed to begin"));

        let commit = StoreError::Commit(sqlx::Error::PoolTimedOut);
        assert!(commit.to_string().starts_with("failed to commit"));
    }
}
