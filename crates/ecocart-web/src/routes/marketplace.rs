//! Marketplace route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use ecocart_core::marketplace::{Listing, CATEGORIES};

#[derive(Deserialize)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Serialize)]
pub struct LikeResponse {
    pub id: u32,
    pub liked: bool,
}

pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> Json<Vec<Listing>> {
    let marketplace = state.marketplace.read().await;
    let listings = marketplace
        .filter(query.category.as_deref(), query.q.as_deref())
        .into_iter()
        .cloned()
        .collect();
    Json(listings)
}

pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(CATEGORIES.to_vec())
}

pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<LikeResponse>, (StatusCode, String)> {
    let mut marketplace = state.marketplace.write().await;
    let liked = marketplace
        .toggle_like(id)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(LikeResponse { id, liked }))
}
