//! REST API service for PerC.
//!
//! ## Endpoints
//!
//! - `GET /` - Welcome message
//! - `POST /solve` - Count and sample permutations or combinations of the
//!   submitted items, with a generated explanation
//!
//! An unknown `calculation_type` is answered with `400 Bad Request` and an
//! `{"error": ...}` body. A failing explanation backend never fails the
//! request; `ai_explanation` then carries a fallback text.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use perc_api::{create_app_state, create_router, DEFAULT_ALLOWED_ORIGIN};
//! use perc_explain::{Explainer, LlmConfig};
//!
//! # fn build() -> Result<axum::Router, Box<dyn std::error::Error>> {
//! let explainer = Explainer::from_config(&LlmConfig::from_env()?)?;
//! let state = create_app_state(explainer);
//! let router = create_router(state, DEFAULT_ALLOWED_ORIGIN.parse()?);
//! # Ok(router)
//! # }
//! ```

mod routes;
mod types;

pub use routes::{cors_layer, create_router, DEFAULT_ALLOWED_ORIGIN};
pub use types::{AppState, ErrorResponse, SolveRequest, SolveResponse, WelcomeResponse};

use std::sync::Arc;

use perc_explain::Explainer;

/// Create the shared API state around an explainer.
pub fn create_app_state(explainer: Explainer) -> Arc<AppState> {
    Arc::new(AppState { explainer })
}
