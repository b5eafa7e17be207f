use super::{DbConnection, DbPool};
use anyhow::{Result, anyhow};
use diesel::PgConnection;
use diesel::r2d2::ConnectionManager;

use crate::db::error::RepositoryError;

/// Builds the r2d2 pool shared by every repository.
///
/// Connections are opened lazily, so this succeeds even if the database is
/// not reachable yet; the first checkout will report the failure.
pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);

    diesel::r2d2::Pool::builder()
        .max_size(max_size)
        .min_idle(Some(0))
        .build(manager)
        .map_err(|e| anyhow!("Failed to create database pool: {e}"))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection, RepositoryError> {
    pool.get().map_err(Into::into)
}

/// Runs a blocking store call on tokio's blocking pool so the request task
/// yields while diesel (or bcrypt) works.
pub async fn run_blocking<T, E, F>(f: F) -> Result<T, crate::error::AppError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<crate::error::AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| crate::error::AppError::internal(format!("blocking task failed: {e}")))?
        .map_err(Into::into)
}
