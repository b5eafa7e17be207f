use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use cadastre_api_types::{
    HistoryParams, QueryIdResponse, QueryRecord, ResultParams, ResultResponse, SubmitQueryRequest,
};

use crate::auth::extractors::BearerSubject;
use crate::error::AppError;
use crate::queries::services::QueryService;
use crate::response::AppResponse;

/// POST /query
/// Stores a cadastre lookup and returns its id
pub async fn submit_query(
    State(service): State<Arc<QueryService>>,
    payload: Result<Json<SubmitQueryRequest>, JsonRejection>,
) -> Result<AppResponse<QueryIdResponse>, AppError> {
    let Json(payload) = payload?;
    let created = service.submit_query(payload).await?;
    Ok(AppResponse::ok(created))
}

/// GET /result?query_id=
/// Emulates the external registry call and returns its verdict
pub async fn get_result(
    State(service): State<Arc<QueryService>>,
    params: Result<Query<ResultParams>, QueryRejection>,
) -> Result<AppResponse<ResultResponse>, AppError> {
    let Query(params) = params?;
    let result = service.fetch_result(params.query_id).await?;
    Ok(AppResponse::ok(ResultResponse { result }))
}

/// GET /history?number=
/// Lookup history, optionally for a single cadastre number
pub async fn get_history(
    subject: BearerSubject,
    State(service): State<Arc<QueryService>>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<AppResponse<Vec<QueryRecord>>, AppError> {
    let Query(params) = params?;
    tracing::debug!(username = %subject.username, filter = ?params.number, "History requested");
    let history = service.list_history(params.number).await?;
    Ok(AppResponse::ok(history))
}
