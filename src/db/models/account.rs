use cadastre_api_types::UserResponse;
use diesel::{Insertable, Queryable, Selectable};

use crate::db::schema::user;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = user)]
pub struct NewAccount {
    pub username: String,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub hashed_password: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = user)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
    pub hashed_password: String,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        UserResponse {
            id: account.id,
            username: account.username,
            email: account.email,
            is_admin: account.is_admin.unwrap_or(false),
        }
    }
}
