pub mod account_repository;
pub mod query_repository;

pub use account_repository::{AccountRepository, PgAccountRepository};
pub use query_repository::{PgQueryRepository, QueryRepository};
