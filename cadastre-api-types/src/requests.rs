use serde::{Deserialize, Serialize};

// -------- QUERY DTOs --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubmitQueryRequest {
    pub cadastre_number: String,
    pub latitude: String,
    pub longitude: String,
}

/// `GET /result?query_id=`
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ResultParams {
    pub query_id: i32,
}

/// `GET /history?number=`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HistoryParams {
    pub number: Option<String>,
}

// -------- USER DTOs --------
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenRequest {
    pub username: String,
    pub password: String, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}
