//! API types and DTOs.

use perc_core::{
    big_count, BigUint, CoreResult, ExplanationStyle, SelectionMode, SelectionRequest,
    SelectionResult,
};
use perc_explain::Explainer;
use serde::{Deserialize, Serialize};

/// Shared, immutable application state.
pub struct AppState {
    /// Explanation requester, built once at startup.
    pub explainer: Explainer,
}

/// Welcome message for `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

/// Body of `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub items: Vec<String>,
    pub r: i64,
    /// `"perm"` or `"comb"`; validated by the handler so bad values get a readable error.
    pub calculation_type: String,
    #[serde(default)]
    pub explanation_mode: ExplanationStyle,
}

impl SolveRequest {
    /// Validate the calculation type and convert into an engine request.
    pub fn into_selection(self) -> CoreResult<SelectionRequest> {
        let mode: SelectionMode = self.calculation_type.parse()?;
        Ok(SelectionRequest::new(self.items, self.r, mode).with_style(self.explanation_mode))
    }
}

/// Successful response of `POST /solve`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub items: Vec<String>,
    pub n: usize,
    pub r: i64,
    pub calculation_type: SelectionMode,
    /// Exact count, written as a JSON integer of arbitrary size.
    #[serde(with = "big_count")]
    pub total_count: BigUint,
    pub sample_results: Vec<Vec<String>>,
    pub ai_explanation: String,
}

impl SolveResponse {
    /// Combine the submitted items with the engine result.
    pub fn new(items: Vec<String>, result: SelectionResult) -> Self {
        Self {
            items,
            n: result.n,
            r: result.r,
            calculation_type: result.mode,
            total_count: result.total_count,
            sample_results: result.sample,
            ai_explanation: result.explanation,
        }
    }
}

/// Error payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
