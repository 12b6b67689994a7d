//! Rewards dashboard route handlers.

use axum::extract::State;
use axum::Json;

use crate::state::AppState;
use ecocart_core::rewards::Rewards;

pub async fn get_dashboard(State(state): State<AppState>) -> Json<Rewards> {
    Json(state.rewards.as_ref().clone())
}
