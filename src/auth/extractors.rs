use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header, request::Parts};

use crate::auth::jwt::TokenKind;
use crate::auth::tokens::TokenService;
use crate::error::AppError;

/// Authentication extractor for protected routes.
/// Requires `Authorization: Bearer <access token>` and exposes the subject.
#[derive(Debug, Clone)]
pub struct BearerSubject {
    pub username: String,
}

impl<S> FromRequestParts<S> for BearerSubject
where
    Arc<TokenService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth_str = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let tokens = Arc::<TokenService>::from_ref(state);
        let username = tokens.decode_and_validate(token, TokenKind::Access)?;

        Ok(BearerSubject { username })
    }
}
