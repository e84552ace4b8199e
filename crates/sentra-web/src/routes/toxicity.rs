//! Toxicity route handler.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use sentra_core::toxicity::ToxicityResult;

use super::{api_error, AnalysisParams, ApiError};
use crate::state::AppState;

/// GET /toxicity?text=...
pub async fn classify(
    State(state): State<AppState>,
    query: Result<Query<AnalysisParams>, QueryRejection>,
) -> Result<Json<ToxicityResult>, ApiError> {
    let text = AnalysisParams::require_text(query)?;

    let result = sentra_core::analyze_toxicity(state.toxicity.as_ref(), &text)
        .map_err(api_error)?;

    Ok(Json(result))
}
