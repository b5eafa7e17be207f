/// Repository layer errors
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection pool error: {0}")]
    PoolError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<diesel::result::Error> for RepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error};

        match err {
            Error::NotFound => RepositoryError::NotFound("Record not found".to_string()),
            Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                RepositoryError::UniqueViolation(info.message().to_string())
            }
            Error::DatabaseError(_, info) => RepositoryError::DatabaseError(info.message().to_string()),
            _ => RepositoryError::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        RepositoryError::PoolError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diesel_not_found_maps_to_not_found() {
        let err = RepositoryError::from(diesel::result::Error::NotFound);
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn other_diesel_errors_map_to_database_error() {
        let err = RepositoryError::from(diesel::result::Error::RollbackTransaction);
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }
}
