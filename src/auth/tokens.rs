use std::sync::Arc;

use cadastre_api_types::TokenResponse;
use chrono::{Duration, Utc};

use crate::auth::jwt::{Claims, TokenKind, TokenSigner};
use crate::error::AppError;

pub const DEFAULT_ACCESS_TOKEN_MINUTES: i64 = 10;
pub const DEFAULT_REFRESH_TOKEN_MINUTES: i64 = 30;

/// Issues and validates access/refresh token pairs.
///
/// Tokens are never stored: there is no revocation, a leaked token stays
/// valid until it expires.
pub struct TokenService {
    signer: Arc<dyn TokenSigner>,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(signer: Arc<dyn TokenSigner>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            signer,
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn with_default_lifetimes(signer: Arc<dyn TokenSigner>) -> Self {
        Self::new(
            signer,
            Duration::minutes(DEFAULT_ACCESS_TOKEN_MINUTES),
            Duration::minutes(DEFAULT_REFRESH_TOKEN_MINUTES),
        )
    }

    pub fn issue_access_token(&self, subject: &str, fresh: bool) -> Result<String, AppError> {
        self.issue_access_token_for(subject, fresh, self.access_ttl)
    }

    pub fn issue_access_token_for(
        &self,
        subject: &str,
        fresh: bool,
        ttl: Duration,
    ) -> Result<String, AppError> {
        self.issue(subject, Some(fresh), TokenKind::Access, ttl)
    }

    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, AppError> {
        self.issue_refresh_token_for(subject, self.refresh_ttl)
    }

    pub fn issue_refresh_token_for(&self, subject: &str, ttl: Duration) -> Result<String, AppError> {
        self.issue(subject, None, TokenKind::Refresh, ttl)
    }

    /// Access + refresh token for `subject`, as returned by the token endpoints.
    pub fn issue_pair(&self, subject: &str, fresh: bool) -> Result<TokenResponse, AppError> {
        let access_token = self.issue_access_token(subject, fresh)?;
        let refresh_token = self.issue_refresh_token(subject)?;
        Ok(TokenResponse::bearer(access_token, refresh_token))
    }

    /// Verifies signature, expiry and token kind, returning the subject.
    pub fn decode_and_validate(&self, token: &str, expected: TokenKind) -> Result<String, AppError> {
        let claims = self.signer.verify(token)?;

        if claims.kind != expected {
            tracing::debug!(?expected, actual = ?claims.kind, "Token kind mismatch");
            return Err(AppError::unauthorized("Could not validate credentials"));
        }
        if claims.sub.is_empty() {
            return Err(AppError::unauthorized("Could not validate credentials"));
        }

        Ok(claims.sub)
    }

    fn issue(
        &self,
        subject: &str,
        fresh: Option<bool>,
        kind: TokenKind,
        ttl: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            fresh,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            kind,
        };

        self.signer.sign(&claims).map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::JwtManager;
    use jsonwebtoken::Algorithm;

    fn signer() -> Arc<JwtManager> {
        Arc::new(JwtManager::new("token_service_test_secret", Algorithm::HS256))
    }

    fn service() -> TokenService {
        TokenService::with_default_lifetimes(signer())
    }

    #[test]
    fn access_token_validates_immediately() {
        let tokens = service();
        let token = tokens.issue_access_token("alice", true).unwrap();

        assert_eq!(
            tokens.decode_and_validate(&token, TokenKind::Access).unwrap(),
            "alice"
        );
    }

    #[test]
    fn expired_access_token_is_rejected() {
        let tokens = service();
        let token = tokens
            .issue_access_token_for("alice", true, Duration::minutes(-10))
            .unwrap();

        let err = tokens
            .decode_and_validate(&token, TokenKind::Access)
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn default_lifetimes_are_ten_and_thirty_minutes() {
        let signer = signer();
        let tokens = TokenService::with_default_lifetimes(signer.clone());
        let now = Utc::now().timestamp();

        let access = signer
            .verify(&tokens.issue_access_token("alice", true).unwrap())
            .unwrap();
        let refresh = signer
            .verify(&tokens.issue_refresh_token("alice").unwrap())
            .unwrap();

        assert!((access.exp - now - 10 * 60).abs() <= 2);
        assert!((refresh.exp - now - 30 * 60).abs() <= 2);
        assert_eq!(refresh.fresh, None);
    }

    #[test]
    fn refresh_token_is_not_accepted_as_access_token() {
        let tokens = service();
        let refresh = tokens.issue_refresh_token("alice").unwrap();

        assert!(tokens.decode_and_validate(&refresh, TokenKind::Access).is_err());
        assert!(tokens.decode_and_validate(&refresh, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn issue_pair_marks_bearer_type() {
        let pair = service().issue_pair("alice", true).unwrap();
        assert_eq!(pair.token_type, "Bearer");
        assert_ne!(pair.access_token, pair.refresh_token);
    }

    #[test]
    fn misconfigured_algorithm_surfaces_token_creation_error() {
        let tokens = TokenService::with_default_lifetimes(Arc::new(JwtManager::new(
            "secret",
            Algorithm::ES256,
        )));

        let err = tokens.issue_access_token("alice", true).unwrap_err();
        assert!(matches!(err, AppError::TokenCreationFailed(_)));
    }
}
