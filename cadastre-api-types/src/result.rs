use serde::{Deserialize, Serialize};

/// HTTP status codes emitted by the cadastre API.
/// Kept framework-free so clients don't need an HTTP crate to match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Ok = 200,
    BadRequest = 400,
    Unauthorized = 401,
    NotFound = 404,
    Conflict = 409,
    UnprocessableEntity = 422,
    InternalServerError = 500,
}

impl StatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    pub fn is_success(self) -> bool {
        self.as_u16() < 300
    }

    /// Maps a raw status back to the enum, if the API can emit it.
    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            200 => Some(Self::Ok),
            400 => Some(Self::BadRequest),
            401 => Some(Self::Unauthorized),
            404 => Some(Self::NotFound),
            409 => Some(Self::Conflict),
            422 => Some(Self::UnprocessableEntity),
            500 => Some(Self::InternalServerError),
            _ => None,
        }
    }
}

/// Generic API response wrapper
///
/// The backend wraps this in a type that implements Axum's `IntoResponse`.
///
/// ```rust
/// use cadastre_api_types::{AppResponse, QueryIdResponse, StatusCode};
///
/// let response = AppResponse::ok(QueryIdResponse { id: 1 });
/// assert_eq!(response.status, StatusCode::Ok);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub status: StatusCode,
}

impl<T> AppResponse<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self {
            status,
            data: Some(data),
        }
    }

    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::Ok, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_round_trips_through_u16() {
        for status in [
            StatusCode::Ok,
            StatusCode::NotFound,
            StatusCode::Conflict,
            StatusCode::UnprocessableEntity,
        ] {
            assert_eq!(StatusCode::from_u16(status.as_u16()), Some(status));
        }
        assert_eq!(StatusCode::from_u16(418), None);
    }

    #[test]
    fn only_ok_is_success() {
        assert!(StatusCode::Ok.is_success());
        assert!(!StatusCode::Unauthorized.is_success());
    }

    #[test]
    fn ok_response_serializes_data_and_status() {
        let response = AppResponse::ok(crate::ResultResponse { result: true });
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"Ok\""));
        assert!(json.contains("\"result\":true"));
    }
}
