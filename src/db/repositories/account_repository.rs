use crate::db::DbPool;
use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::schema::user;
use diesel::prelude::*;

/// Credential store: username → account record.
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account. A taken username yields
    /// `RepositoryError::UniqueViolation` and leaves nothing behind.
    fn create(&self, new_account: &NewAccount) -> Result<Account, RepositoryError>;

    fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgAccountRepository {
    pool: DbPool,
}

impl PgAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl AccountRepository for PgAccountRepository {
    fn create(&self, new_account: &NewAccount) -> Result<Account, RepositoryError> {
        let mut conn = get_connection(&self.pool)?;

        // The unique index on username rejects duplicates; the transaction is
        // rolled back before the error is reported.
        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(user::table)
                .values(new_account)
                .returning(Account::as_returning())
                .get_result(conn)
        })
        .map_err(Into::into)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
        let mut conn = get_connection(&self.pool)?;

        user::table
            .filter(user::username.eq(username))
            .select(Account::as_select())
            .first(&mut conn)
            .optional()
            .map_err(Into::into)
    }
}
