use cadastre_api_types::PingResponse;

use crate::response::AppResponse;

/// GET /ping
/// Liveness check
pub async fn ping() -> AppResponse<PingResponse> {
    AppResponse::ok(PingResponse {
        message: "Server is up!".to_string(),
    })
}
