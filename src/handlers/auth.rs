// src/handlers/auth.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use cadastre_api_types::{
    CreateUserRequest, RefreshTokenRequest, TokenRequest, TokenResponse, UserResponse,
};

use crate::auth::services::AuthService;
use crate::error::AppError;
use crate::response::AppResponse;

/// POST /user/create
/// Registers a new account
pub async fn create_user(
    State(auth_service): State<Arc<AuthService>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<AppResponse<UserResponse>, AppError> {
    let Json(payload) = payload?;
    let user = auth_service.create_account(payload).await?;
    Ok(AppResponse::ok(user))
}

/// POST /user/token
/// Exchanges username and password for an access/refresh token pair
pub async fn issue_token(
    State(auth_service): State<Arc<AuthService>>,
    payload: Result<Json<TokenRequest>, JsonRejection>,
) -> Result<AppResponse<TokenResponse>, AppError> {
    let Json(payload) = payload?;
    let tokens = auth_service.login(payload).await?;
    Ok(AppResponse::ok(tokens))
}

/// POST /user/token/refresh
/// Exchanges a refresh token for a new pair
pub async fn refresh_token(
    State(auth_service): State<Arc<AuthService>>,
    payload: Result<Json<RefreshTokenRequest>, JsonRejection>,
) -> Result<AppResponse<TokenResponse>, AppError> {
    let Json(payload) = payload?;
    let tokens = auth_service.refresh(payload).await?;
    Ok(AppResponse::ok(tokens))
}
