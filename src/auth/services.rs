// src/auth/services.rs

use std::future::Future;
use std::sync::{Arc, LazyLock};

use cadastre_api_types::{
    CreateUserRequest, RefreshTokenRequest, TokenRequest, TokenResponse, UserResponse,
};
use regex::Regex;

use crate::auth::jwt::TokenKind;
use crate::auth::password::PasswordHasher;
use crate::auth::tokens::TokenService;
use crate::db::connection::run_blocking;
use crate::db::error::RepositoryError;
use crate::db::models::account::{Account, NewAccount};
use crate::db::repositories::AccountRepository;
use crate::error::AppError;

const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex is valid"));

pub struct AuthService {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }

    /// Registers a regular (non-admin) account.
    pub async fn create_account(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        Self::validate_new_account(&request)?;

        let hasher = Arc::clone(&self.hasher);
        let password = request.password;
        let hashed_password = run_blocking(move || hasher.hash(&password)).await?;

        let new_account = NewAccount {
            username: request.username,
            email: request.email,
            is_admin: Some(false),
            hashed_password,
        };

        let accounts = Arc::clone(&self.accounts);
        let account = run_blocking(move || {
            accounts.create(&new_account).map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => AppError::conflict("User already exists"),
                other => AppError::from(other),
            })
        })
        .await?;

        tracing::info!(account_id = account.id, username = %account.username, "Account created");
        Ok(account.into())
    }

    pub async fn find_account_by_username(&self, username: String) -> Result<Account, AppError> {
        let accounts = Arc::clone(&self.accounts);
        run_blocking(move || accounts.find_by_username(&username))
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Resolves `id` through `lookup` and checks `password` against the
    /// stored hash. `Ok(None)` means "not authenticated": unknown account or
    /// wrong password. Other lookup failures are returned as errors.
    pub async fn authenticate<F, Fut>(
        &self,
        lookup: F,
        id: &str,
        password: &str,
    ) -> Result<Option<Account>, AppError>
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Account, AppError>>,
    {
        let account = match lookup(id.to_string()).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = account.hashed_password.clone();
        let verified = run_blocking(move || hasher.verify(&password, &hash)).await?;

        Ok(verified.then_some(account))
    }

    /// Password login: returns a fresh access token and a refresh token.
    pub async fn login(&self, request: TokenRequest) -> Result<TokenResponse, AppError> {
        let account = self
            .authenticate(
                |username| self.find_account_by_username(username),
                &request.username,
                &request.password,
            )
            .await?
            .ok_or_else(|| {
                tracing::debug!(username = %request.username, "Rejected login");
                AppError::InvalidCredentials
            })?;

        self.tokens.issue_pair(&account.username, true)
    }

    /// Trades a valid refresh token for a new (non-fresh) pair.
    pub async fn refresh(&self, request: RefreshTokenRequest) -> Result<TokenResponse, AppError> {
        let username = self
            .tokens
            .decode_and_validate(&request.refresh_token, TokenKind::Refresh)?;

        let account = match self.find_account_by_username(username).await {
            Ok(account) => account,
            Err(AppError::NotFound(_)) => {
                return Err(AppError::unauthorized("Could not validate credentials"));
            }
            Err(e) => return Err(e),
        };

        self.tokens.issue_pair(&account.username, false)
    }

    // === Validation helpers ===

    fn validate_new_account(request: &CreateUserRequest) -> Result<(), AppError> {
        if request.username.trim().is_empty() {
            return Err(AppError::validation("username", "username must not be empty"));
        }
        if request.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::validation(
                "password",
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
            ));
        }
        if let Some(email) = &request.email
            && !EMAIL_RE.is_match(email)
        {
            return Err(AppError::validation("email", "email is not a valid address"));
        }
        Ok(())
    }
}
