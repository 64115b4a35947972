//! Classification of Diesel failures for the catalogue adapters.
//!
//! Repositories translate pool and Diesel errors into their port error enums.
//! Constraint violations are surfaced separately so the admin adapter can
//! report duplicate or missing donut types.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Outcome of inspecting a Diesel error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DieselFailure {
    /// The connection dropped or could not be used.
    Connection(String),
    /// A unique constraint rejected the write.
    UniqueViolation,
    /// A foreign key rejected the write.
    ForeignKeyViolation,
    /// Anything else.
    Query(String),
}

/// Inspect `error`, logging the database detail at debug level.
pub(crate) fn classify(error: DieselError, operation: &'static str) -> DieselFailure {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        other => debug!(error = %other, operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            DieselFailure::Connection(format!("{operation}: database connection lost"))
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DieselFailure::ForeignKeyViolation
        }
        DieselError::NotFound => DieselFailure::Query(format!("{operation}: record not found")),
        _ => DieselFailure::Query(format!("{operation}: database error")),
    }
}

/// Extract the detail of a pool failure.
pub(crate) fn pool_message(error: PoolError) -> String {
    error.into_message()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug)]
    struct Info(&'static str);

    impl diesel::result::DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info("boom")))
    }

    #[rstest]
    #[case(database_error(DatabaseErrorKind::UniqueViolation), DieselFailure::UniqueViolation)]
    #[case(
        database_error(DatabaseErrorKind::ForeignKeyViolation),
        DieselFailure::ForeignKeyViolation
    )]
    #[case(
        database_error(DatabaseErrorKind::ClosedConnection),
        DieselFailure::Connection("insert donut: database connection lost".to_owned())
    )]
    #[case(
        DieselError::NotFound,
        DieselFailure::Query("insert donut: record not found".to_owned())
    )]
    #[case(
        database_error(DatabaseErrorKind::CheckViolation),
        DieselFailure::Query("insert donut: database error".to_owned())
    )]
    fn classifies_diesel_errors(#[case] error: DieselError, #[case] expected: DieselFailure) {
        assert_eq!(classify(error, "insert donut"), expected);
    }

    #[rstest]
    fn pool_message_strips_the_variant_prefix() {
        assert_eq!(pool_message(PoolError::checkout("timed out")), "timed out");
    }
}
