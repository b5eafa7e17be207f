// src/app.rs

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use chrono::Duration;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::auth::jwt::JwtManager;
use crate::auth::password::BcryptHasher;
use crate::auth::services::AuthService;
use crate::auth::tokens::TokenService;
use crate::config::Config;
use crate::db::connection::create_pool;
use crate::db::repositories::{
    AccountRepository, PgAccountRepository, PgQueryRepository, QueryRepository,
};
use crate::handlers::auth::{create_user, issue_token, refresh_token};
use crate::handlers::health::ping;
use crate::handlers::query::{get_history, get_result, submit_query};
use crate::queries::resolver::SimulatedLookup;
use crate::queries::services::QueryService;

/// Everything a request may need, passed explicitly to handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub queries: Arc<QueryService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        queries: Arc<dyn QueryRepository>,
        tokens: Arc<TokenService>,
        hasher: BcryptHasher,
        lookup: SimulatedLookup,
    ) -> Self {
        Self {
            auth: Arc::new(AuthService::new(
                accounts,
                Arc::new(hasher),
                Arc::clone(&tokens),
            )),
            queries: Arc::new(QueryService::new(queries, lookup)),
            tokens,
        }
    }

    /// Wires the Postgres-backed stores and the crypto capabilities.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let pool = create_pool(&config.database_url, config.database_pool_size)?;

        let signer = Arc::new(JwtManager::new(&config.jwt_secret, config.jwt_algorithm));
        let tokens = Arc::new(TokenService::new(
            signer,
            Duration::minutes(config.access_token_minutes),
            Duration::minutes(config.refresh_token_minutes),
        ));

        Ok(Self::new(
            Arc::new(PgAccountRepository::new(pool.clone())),
            Arc::new(PgQueryRepository::new(pool)),
            tokens,
            BcryptHasher::new(config.bcrypt_cost),
            SimulatedLookup::new(
                config.lookup_delay_min,
                config.lookup_delay_max,
                config.lookup_delay_unit,
            ),
        ))
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.auth)
    }
}

impl FromRef<AppState> for Arc<QueryService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.queries)
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        Arc::clone(&state.tokens)
    }
}

/// Query routes: submit, resolve, history (bearer token required)
pub fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping))
        .route("/query", post(submit_query))
        .route("/result", get(get_result))
        .route("/history", get(get_history))
}

/// Account routes, nested under `/user`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/token", post(issue_token))
        .route("/token/refresh", post(refresh_token))
}

/// Builds the complete application
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(query_routes())
        .nest("/user", user_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
