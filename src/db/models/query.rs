use cadastre_api_types::QueryRecord;
use diesel::{Insertable, Queryable, Selectable};

use crate::db::schema::query;

/// A lookup request as first persisted: always unresolved.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = query)]
pub struct NewQuery {
    pub cadastre_number: String,
    pub latitude: String,
    pub longitude: String,
}

#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = query)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Query {
    pub id: i32,
    pub cadastre_number: String,
    pub latitude: String,
    pub longitude: String,
    pub result: Option<bool>,
}

impl From<Query> for QueryRecord {
    fn from(query: Query) -> Self {
        QueryRecord {
            id: query.id,
            cadastre_number: query.cadastre_number,
            latitude: query.latitude,
            longitude: query.longitude,
            result: query.result,
        }
    }
}
