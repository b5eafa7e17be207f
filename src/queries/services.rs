use std::sync::Arc;

use cadastre_api_types::{QueryIdResponse, QueryRecord, SubmitQueryRequest};

use crate::db::connection::run_blocking;
use crate::db::models::query::NewQuery;
use crate::db::repositories::QueryRepository;
use crate::error::AppError;
use crate::queries::resolver::SimulatedLookup;
use crate::queries::validation::validate_query;

/// Submit / resolve / history workflow for cadastre lookups.
pub struct QueryService {
    queries: Arc<dyn QueryRepository>,
    lookup: SimulatedLookup,
}

impl QueryService {
    pub fn new(queries: Arc<dyn QueryRepository>, lookup: SimulatedLookup) -> Self {
        Self { queries, lookup }
    }

    /// Validates and stores an unresolved lookup, returning its id.
    pub async fn submit_query(
        &self,
        request: SubmitQueryRequest,
    ) -> Result<QueryIdResponse, AppError> {
        validate_query(&request)?;

        let new_query = NewQuery {
            cadastre_number: request.cadastre_number,
            latitude: request.latitude,
            longitude: request.longitude,
        };
        let queries = Arc::clone(&self.queries);
        let created = run_blocking(move || queries.create(&new_query)).await?;

        tracing::info!(
            query_id = created.id,
            cadastre_number = %created.cadastre_number,
            "Query submitted"
        );
        Ok(QueryIdResponse { id: created.id })
    }

    /// Returns the stored verdict, asking the simulated registry first if
    /// the query is still unresolved. Once started, the lookup completes and
    /// is stored even if this future is dropped.
    pub async fn fetch_result(&self, query_id: i32) -> Result<bool, AppError> {
        let queries = Arc::clone(&self.queries);
        let query = run_blocking(move || queries.find_by_id(query_id))
            .await?
            .ok_or_else(|| AppError::not_found("Query not found"))?;

        if let Some(result) = query.result {
            return Ok(result);
        }

        // The lookup and the write run on their own task so a client that
        // disconnects mid-wait does not cancel the write.
        let queries = Arc::clone(&self.queries);
        let lookup = self.lookup;
        tokio::spawn(async move {
            let verdict = lookup.lookup(&query).await;
            // Another request may have resolved the query while we slept; the
            // conditional update keeps whichever value landed first.
            let stored = run_blocking(move || queries.resolve(query_id, verdict)).await?;
            let result = stored
                .result
                .ok_or_else(|| AppError::internal(format!("query {query_id} still unresolved")))?;

            if result == verdict {
                tracing::info!(query_id, result, "Query resolved");
            } else {
                tracing::debug!(query_id, result, "Query was resolved concurrently");
            }
            Ok(result)
        })
        .await
        .map_err(|e| AppError::internal(format!("lookup task for query {query_id} failed: {e}")))?
    }

    /// All lookups in insertion order, or only those for `cadastre_number`.
    /// A filter that matches nothing is a not-found error.
    pub async fn list_history(
        &self,
        cadastre_number: Option<String>,
    ) -> Result<Vec<QueryRecord>, AppError> {
        let queries = Arc::clone(&self.queries);
        let filter = cadastre_number.clone();
        let history = run_blocking(move || queries.list(filter.as_deref())).await?;

        if cadastre_number.is_some() && history.is_empty() {
            return Err(AppError::not_found(
                "History not found for the given cadastre number",
            ));
        }

        Ok(history.into_iter().map(QueryRecord::from).collect())
    }
}
