//! Solver endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use perc_explain::ProblemContext;
use tracing::{info, warn};

use crate::types::{AppState, ErrorResponse, SolveRequest, SolveResponse};

/// POST /solve - Count arrangements, sample them, and explain the result.
pub async fn solve_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SolveRequest>,
) -> Response {
    let calculation_type = request.calculation_type.clone();
    let selection = match request.into_selection() {
        Ok(selection) => selection,
        Err(err) => {
            warn!(calculation_type = %calculation_type, "Rejected solve request: {err}");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(err))).into_response();
        }
    };

    info!(
        n = selection.items.len(),
        r = selection.r,
        mode = %selection.mode,
        style = %selection.style,
        "Solve request"
    );

    let computation = selection.compute();
    let explanation = state
        .explainer
        .explain(
            selection.style,
            &ProblemContext::new(&selection.items, &computation),
        )
        .await;

    info!(
        total = %computation.total_count,
        samples = computation.sample.len(),
        "Solve completed"
    );

    let result = computation.with_explanation(explanation);
    (StatusCode::OK, Json(SolveResponse::new(selection.items, result))).into_response()
}
