//! Text classification handler.

use axum::{extract::State, Json};
use serde::Deserialize;

use foodguard::{ClassifiedAnalysis, Classifier, Strategy};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request to classify a block of analysis text.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Raw model output.
    pub text: String,

    /// Strategy override ("line" or "sentence").
    #[serde(default)]
    pub strategy: Option<String>,
}

/// POST /api/classify - Split analysis text into sections.
pub async fn classify_text(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifiedAnalysis>, ApiError> {
    let result = match request.strategy.as_deref() {
        Some(name) => {
            let strategy: Strategy = name.parse()?;
            Classifier::new().with_strategy(strategy).classify(&request.text)
        }
        None => state.classifier.classify(&request.text),
    };

    if state.verbose {
        println!(
            "classify: {} bytes -> {} items",
            request.text.len(),
            result.item_count()
        );
    }

    Ok(Json(result))
}
