use serde::{Deserialize, Serialize};

pub const BEARER_TOKEN_TYPE: &str = "Bearer";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PingResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryIdResponse {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultResponse {
    pub result: bool,
}

/// A stored cadastre lookup, as returned by `/history`.
/// `result` is `None` while the lookup is unresolved.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryRecord {
    pub id: i32,
    pub cadastre_number: String,
    pub latitude: String,
    pub longitude: String,
    pub result: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}
