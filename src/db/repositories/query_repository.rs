use crate::db::DbPool;
use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::query::{NewQuery, Query};
use crate::db::schema::query;
use diesel::prelude::*;

/// Query store: id → cadastre lookup and its optional result.
pub trait QueryRepository: Send + Sync {
    fn create(&self, new_query: &NewQuery) -> Result<Query, RepositoryError>;

    fn find_by_id(&self, id: i32) -> Result<Option<Query>, RepositoryError>;

    /// Sets `result` only if the query is still unresolved, then returns the
    /// row as stored. Losing a race returns the winner's value.
    fn resolve(&self, id: i32, result: bool) -> Result<Query, RepositoryError>;

    /// All queries in insertion order, optionally restricted to one
    /// cadastre number.
    fn list(&self, cadastre_number: Option<&str>) -> Result<Vec<Query>, RepositoryError>;
}

#[derive(Clone)]
pub struct PgQueryRepository {
    pool: DbPool,
}

impl PgQueryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl QueryRepository for PgQueryRepository {
    fn create(&self, new_query: &NewQuery) -> Result<Query, RepositoryError> {
        let mut conn = get_connection(&self.pool)?;

        diesel::insert_into(query::table)
            .values(new_query)
            .returning(Query::as_returning())
            .get_result(&mut conn)
            .map_err(Into::into)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Query>, RepositoryError> {
        let mut conn = get_connection(&self.pool)?;

        query::table
            .find(id)
            .select(Query::as_select())
            .first(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    fn resolve(&self, id: i32, result: bool) -> Result<Query, RepositoryError> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let updated = diesel::update(
                query::table
                    .filter(query::id.eq(id))
                    .filter(query::result.is_null()),
            )
            .set(query::result.eq(Some(result)))
            .returning(Query::as_returning())
            .get_result(conn)
            .optional()?;

            match updated {
                Some(row) => Ok(row),
                None => query::table.find(id).select(Query::as_select()).first(conn),
            }
        })
        .map_err(Into::into)
    }

    fn list(&self, cadastre_number: Option<&str>) -> Result<Vec<Query>, RepositoryError> {
        let mut conn = get_connection(&self.pool)?;

        let rows = match cadastre_number {
            Some(number) => query::table
                .filter(query::cadastre_number.eq(number))
                .order(query::id.asc())
                .select(Query::as_select())
                .load(&mut conn),
            None => query::table
                .order(query::id.asc())
                .select(Query::as_select())
                .load(&mut conn),
        };

        rows.map_err(Into::into)
    }
}
