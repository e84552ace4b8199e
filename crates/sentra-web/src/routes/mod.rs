//! Route handlers.

pub mod health;
pub mod sentiment;
pub mod toxicity;

use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    Json,
};
use sentra_core::SentraError;
use serde::{Deserialize, Serialize};
use tracing::error;

/// Query string accepted by the analysis endpoints.
#[derive(Debug, Deserialize)]
pub struct AnalysisParams {
    pub text: Option<String>,
}

impl AnalysisParams {
    /// The `text` parameter from a decoded query string.
    ///
    /// Undecodable query strings and an absent `text` both become a JSON 400.
    pub fn require_text(query: Result<Query<Self>, QueryRejection>) -> Result<String, ApiError> {
        let Query(params) = query.map_err(|e| bad_request(&e.body_text()))?;
        params
            .text
            .ok_or_else(|| bad_request("missing required query parameter 'text'"))
    }
}

/// JSON error body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorBody>);

fn bad_request(msg: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
}

/// Map a core error onto an HTTP status and JSON body.
pub fn api_error(e: SentraError) -> ApiError {
    let status = if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        error!(error = %e, "Analysis failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorBody { error: e.to_string() }))
}
