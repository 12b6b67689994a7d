//! Catalog and cart route handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use ecocart_core::catalog::Product;

#[derive(Deserialize)]
pub struct ProductQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct AddToCartRequest {
    pub product_id: u32,
}

#[derive(Serialize)]
pub struct CartSummary {
    pub count: usize,
    pub subtotal: u32,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Json<Vec<Product>> {
    let products = match query.q.as_deref() {
        Some(q) => state.catalog.search(q).into_iter().cloned().collect(),
        None => state.catalog.products().to_vec(),
    };
    Json(products)
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let product = state
        .catalog
        .get(id)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(product.clone()))
}

pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(req): Json<AddToCartRequest>,
) -> Result<Json<CartSummary>, (StatusCode, String)> {
    let mut cart = state.cart.write().await;
    cart.add(&state.catalog, req.product_id)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(CartSummary {
        count: cart.count(),
        subtotal: cart.subtotal(&state.catalog),
    }))
}

pub async fn get_cart(State(state): State<AppState>) -> Json<CartSummary> {
    let cart = state.cart.read().await;
    Json(CartSummary {
        count: cart.count(),
        subtotal: cart.subtotal(&state.catalog),
    })
}
