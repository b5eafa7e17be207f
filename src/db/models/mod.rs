pub mod account;
pub mod query;
