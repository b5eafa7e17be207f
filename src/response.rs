use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cadastre_api_types::{AppResponse as ApiResponse, StatusCode as ApiStatusCode};
use serde::Serialize;

/// Axum-facing wrapper around the shared `AppResponse` from
/// `cadastre-api-types`. Handlers return `Result<AppResponse<T>, AppError>`.
pub struct AppResponse<T> {
    inner: ApiResponse<T>,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    /// 200 OK with data
    pub fn ok(data: T) -> Self {
        Self {
            inner: ApiResponse::ok(data),
        }
    }
}

fn convert_status(api_status: ApiStatusCode) -> StatusCode {
    match api_status {
        ApiStatusCode::Ok => StatusCode::OK,
        ApiStatusCode::BadRequest => StatusCode::BAD_REQUEST,
        ApiStatusCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ApiStatusCode::NotFound => StatusCode::NOT_FOUND,
        ApiStatusCode::Conflict => StatusCode::CONFLICT,
        ApiStatusCode::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        ApiStatusCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status = convert_status(self.inner.status);

        match self.inner.data {
            Some(data) => (status, Json(data)).into_response(),
            None => status.into_response(),
        }
    }
}
