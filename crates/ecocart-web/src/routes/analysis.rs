//! AI analysis route handlers.
//!
//! Provider failures surface as the API's opaque public messages:
//! credential and model problems become 500s, throttling becomes 429.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::state::AppState;
use ecocart_ai::AiError;
use ecocart_core::analysis::{self, ProductAnalysis};
use ecocart_core::catalog::PLACEHOLDER_IMAGE;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub product_id: Option<u32>,
    pub product_name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    /// The raw analysis text.
    pub analysis: String,
    #[serde(flatten)]
    pub parsed: ProductAnalysis,
}

#[derive(Serialize)]
pub struct TestResponse {
    pub success: bool,
    pub message: String,
    pub response: String,
    pub model: String,
}

pub async fn analyze_product(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    let (name, image_url) = resolve_target(&state, &req)?;

    let analysis = state
        .ai
        .analyze_product(&name, image_url.as_deref())
        .await
        .map_err(ai_error_response)?;

    let parsed = analysis::extract(&analysis);

    Ok(Json(AnalyzeResponse { analysis, parsed }))
}

pub async fn test_service(
    State(state): State<AppState>,
) -> Result<Json<TestResponse>, (StatusCode, String)> {
    let reply = state
        .ai
        .connection_test()
        .await
        .map_err(ai_error_response)?;

    Ok(Json(TestResponse {
        success: true,
        message: "AI service is operational".to_string(),
        response: reply,
        model: state.ai.model().to_string(),
    }))
}

/// Resolve the request to a product name and usable image URL.
///
/// A `product_id` wins over a free-form name; placeholder images are
/// dropped so the client takes the text-only path.
fn resolve_target(
    state: &AppState,
    req: &AnalyzeRequest,
) -> Result<(String, Option<String>), (StatusCode, String)> {
    if let Some(id) = req.product_id {
        let product = state
            .catalog
            .get(id)
            .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
        let image = product.has_real_image().then(|| product.image.clone());
        return Ok((product.name.clone(), image));
    }

    let name = req
        .product_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or((
            StatusCode::BAD_REQUEST,
            "product_id or product_name is required".to_string(),
        ))?;

    let image = req
        .image_url
        .clone()
        .filter(|url| url != PLACEHOLDER_IMAGE);

    Ok((name.to_string(), image))
}

/// Map client errors to the opaque public messages.
fn ai_error_response(err: AiError) -> (StatusCode, String) {
    error!(error = %err, "analysis request failed");
    match err {
        AiError::MissingApiKey => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "AI service is temporarily unavailable".to_string(),
        ),
        AiError::AuthFailed => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "AI service authentication failed".to_string(),
        ),
        AiError::RateLimited => (
            StatusCode::TOO_MANY_REQUESTS,
            "AI service is busy. Please try again later.".to_string(),
        ),
        AiError::ModelNotFound(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "AI model configuration error".to_string(),
        ),
        AiError::EmptyResponse => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "No analysis received from AI service".to_string(),
        ),
        AiError::Provider { .. } | AiError::Config(_) | AiError::Transport(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "AI analysis service is temporarily unavailable. Please try again later.".to_string(),
        ),
    }
}
