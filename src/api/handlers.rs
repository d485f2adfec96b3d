use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{CatalogStats, RecommendationRequest, RecommendationResponse, SuggestionResponse},
};

use super::AppState;

/// Longest title accepted from clients
const MAX_TITLE_LEN: usize = 512;

const INDEX_PAGE: &str = include_str!("../../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    #[serde(default)]
    q: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Serves the recommendation page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Recommends movies with similar plots to the requested title
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    check_length(&request.title)?;

    let response = state.engine.handle(&request.title);

    let outcome = match &response {
        RecommendationResponse::Recommendations { .. } => "found",
        RecommendationResponse::NotFound { .. } => "not_found",
        RecommendationResponse::EmptyInput { .. } => "empty_input",
    };
    tracing::info!(
        request_id = %request_id,
        title = %request.title,
        outcome,
        "Recommendation request handled"
    );

    Ok(Json(response))
}

/// "Did you mean" suggestions for a partial title
pub async fn suggest(
    State(state): State<AppState>,
    Query(params): Query<SuggestQuery>,
) -> AppResult<Json<SuggestionResponse>> {
    check_length(&params.q)?;

    let suggestions = state.engine.suggest(&params.q);
    Ok(Json(SuggestionResponse {
        query: params.q,
        suggestions,
    }))
}

/// Catalog and index statistics
pub async fn stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.engine.stats())
}

fn check_length(title: &str) -> AppResult<()> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::InvalidInput(format!(
            "title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }
    Ok(())
}
