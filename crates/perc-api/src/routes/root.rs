//! Welcome endpoint.

use axum::Json;

use crate::types::WelcomeResponse;

pub const WELCOME_MESSAGE: &str = "Welcome to PerC AI - Permutation & Combination Solver";

/// Handler for GET /
pub async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}
