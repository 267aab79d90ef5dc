//! Solve command implementation.

use anyhow::{Context, Result};
use perc_api::SolveResponse;
use perc_core::{ExplanationStyle, SelectionMode, SelectionRequest};
use perc_explain::{Explainer, LlmConfig, ProblemContext};

/// Execute the solve command and print the result as JSON.
///
/// Without `explain`, the explanation field is left empty and no API key is needed.
pub async fn execute(
    items: Vec<String>,
    r: i64,
    mode: SelectionMode,
    explain: bool,
    style: ExplanationStyle,
) -> Result<()> {
    let request = SelectionRequest::new(clean_items(items), r, mode).with_style(style);
    let computation = request.compute();

    let explanation = if explain {
        let config = LlmConfig::from_env().context("Failed to load LLM configuration")?;
        let explainer =
            Explainer::from_config(&config).context("Failed to build explanation client")?;
        explainer
            .explain(
                request.style,
                &ProblemContext::new(&request.items, &computation),
            )
            .await
    } else {
        String::new()
    };

    let response = SolveResponse::new(request.items, computation.with_explanation(explanation));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Trim labels and drop empty ones, so `A, B,,C` means `[A, B, C]`.
fn clean_items(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_empty_labels() {
        let raw = vec![" A".to_string(), "B ".to_string(), "".to_string(), "C".to_string()];
        assert_eq!(clean_items(raw), vec!["A", "B", "C"]);
    }
}
