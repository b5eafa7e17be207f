//! In-memory implementation of the repository traits, used by service and
//! router tests so they run without a database.

use std::sync::Mutex;

use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::models::query::{NewQuery, Query};
use crate::db::repositories::{AccountRepository, QueryRepository};

#[derive(Default)]
pub struct InMemoryStore {
    accounts: Mutex<Vec<Account>>,
    queries: Mutex<Vec<Query>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query_count(&self) -> usize {
        self.queries.lock().expect("queries lock").len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().expect("accounts lock").len()
    }
}

fn next_id(len: usize) -> i32 {
    i32::try_from(len + 1).expect("test store stays small")
}

impl AccountRepository for InMemoryStore {
    fn create(&self, new_account: &NewAccount) -> Result<Account, RepositoryError> {
        let mut accounts = self.accounts.lock().expect("accounts lock");
        if accounts.iter().any(|a| a.username == new_account.username) {
            return Err(RepositoryError::UniqueViolation(format!(
                "duplicate key value violates unique constraint \"uq_user_username\" ({})",
                new_account.username
            )));
        }

        let account = Account {
            id: next_id(accounts.len()),
            username: new_account.username.clone(),
            email: new_account.email.clone(),
            is_admin: new_account.is_admin,
            hashed_password: new_account.hashed_password.clone(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
        let accounts = self.accounts.lock().expect("accounts lock");
        Ok(accounts.iter().find(|a| a.username == username).cloned())
    }
}

impl QueryRepository for InMemoryStore {
    fn create(&self, new_query: &NewQuery) -> Result<Query, RepositoryError> {
        let mut queries = self.queries.lock().expect("queries lock");
        let query = Query {
            id: next_id(queries.len()),
            cadastre_number: new_query.cadastre_number.clone(),
            latitude: new_query.latitude.clone(),
            longitude: new_query.longitude.clone(),
            result: None,
        };
        queries.push(query.clone());
        Ok(query)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Query>, RepositoryError> {
        let queries = self.queries.lock().expect("queries lock");
        Ok(queries.iter().find(|q| q.id == id).cloned())
    }

    fn resolve(&self, id: i32, result: bool) -> Result<Query, RepositoryError> {
        let mut queries = self.queries.lock().expect("queries lock");
        let query = queries
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| RepositoryError::NotFound("Record not found".to_string()))?;
        if query.result.is_none() {
            query.result = Some(result);
        }
        Ok(query.clone())
    }

    fn list(&self, cadastre_number: Option<&str>) -> Result<Vec<Query>, RepositoryError> {
        let queries = self.queries.lock().expect("queries lock");
        Ok(queries
            .iter()
            .filter(|q| cadastre_number.is_none_or(|n| q.cadastre_number == n))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_query(number: &str) -> NewQuery {
        NewQuery {
            cadastre_number: number.to_string(),
            latitude: "55.7".to_string(),
            longitude: "37.6".to_string(),
        }
    }

    #[test]
    fn resolve_keeps_first_value() {
        let store = InMemoryStore::new();
        let query = QueryRepository::create(&store, &new_query("1:2:3:4")).unwrap();

        assert_eq!(store.resolve(query.id, false).unwrap().result, Some(false));
        assert_eq!(store.resolve(query.id, true).unwrap().result, Some(false));
    }

    #[test]
    fn list_filters_by_cadastre_number() {
        let store = InMemoryStore::new();
        QueryRepository::create(&store, &new_query("1:2:3:4")).unwrap();
        QueryRepository::create(&store, &new_query("5:6:7:8")).unwrap();
        QueryRepository::create(&store, &new_query("1:2:3:4")).unwrap();

        let ids: Vec<i32> = store
            .list(Some("1:2:3:4"))
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(store.list(None).unwrap().len(), 3);
    }
}
