//! Sentiment route handler.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use sentra_core::sentiment::model::SentimentAnalysis;

use super::{api_error, AnalysisParams, ApiError};
use crate::state::AppState;

/// GET /sentimentanalysis?text=...
pub async fn analyze(
    State(state): State<AppState>,
    query: Result<Query<AnalysisParams>, QueryRejection>,
) -> Result<Json<SentimentAnalysis>, ApiError> {
    let text = AnalysisParams::require_text(query)?;

    let analysis = sentra_core::analyze_sentiment(state.sentiment.as_ref(), &text)
        .map_err(api_error)?;

    Ok(Json(analysis))
}
