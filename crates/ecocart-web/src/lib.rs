//! EcoCart Web Server
//!
//! Axum-based JSON API for the storefront data and the AI analysis flow.

pub mod routes;
pub mod state;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ecocart_ai::AiConfig;
use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Catalog & cart
        .route("/products", get(routes::products::list_products))
        .route("/products/{id}", get(routes::products::get_product))
        .route("/cart", get(routes::products::get_cart))
        .route("/cart", post(routes::products::add_to_cart))
        // Marketplace
        .route("/marketplace", get(routes::marketplace::list_listings))
        .route(
            "/marketplace/categories",
            get(routes::marketplace::list_categories),
        )
        .route(
            "/marketplace/{id}/like",
            patch(routes::marketplace::toggle_like),
        )
        // Rewards dashboard
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        // Group shopping
        .route("/groups", get(routes::groups::list_groups))
        .route("/groups", post(routes::groups::create_group))
        .route("/groups/{id}/join", post(routes::groups::join_group))
        // AI analysis
        .route("/analyze-product", post(routes::analysis::analyze_product))
        .route("/ai/test", post(routes::analysis::test_service))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(config: &AiConfig, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> Router {
        create_router(AppState::new(&AiConfig::default()))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_products_endpoint_serves_seeded_catalog() {
        let response = test_app()
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_product_search_filters_by_name() {
        let response = test_app()
            .oneshot(
                Request::get("/api/products?q=solar")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["name"], "Solar Power Bank");
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        let response = test_app()
            .oneshot(Request::get("/api/products/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_returns_profile_and_history() {
        let response = test_app()
            .oneshot(Request::get("/api/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["profile"]["name"], "Priya Sharma");
        assert_eq!(json["purchases"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_join_group_then_duplicate_conflicts() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(Request::get("/api/groups").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(response).await;
        let id = json[0]["id"].as_str().unwrap().to_string();

        let first = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/groups/{id}/join"),
                r#"{"member":"Asha D."}"#,
            ))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let duplicate = app
            .clone()
            .oneshot(json_request(
                "POST",
                &format!("/api/groups/{id}/join"),
                r#"{"member":"Asha D."}"#,
            ))
            .await
            .unwrap();
        assert_eq!(duplicate.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_cart_roundtrip() {
        let app = test_app();

        let added = app
            .clone()
            .oneshot(json_request("POST", "/api/cart", r#"{"product_id":1}"#))
            .await
            .unwrap();
        assert_eq!(added.status(), StatusCode::OK);

        let cart = app
            .clone()
            .oneshot(Request::get("/api/cart").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(cart).await;
        assert_eq!(json["count"], 1);
        assert_eq!(json["subtotal"], 999);
    }

    #[tokio::test]
    async fn test_analyze_without_target_is_bad_request() {
        let response = test_app()
            .oneshot(json_request("POST", "/api/analyze-product", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_without_credential_is_unavailable() {
        // The default config carries no API key, so the handler reports
        // the opaque unavailable message before any network call.
        let response = test_app()
            .oneshot(json_request(
                "POST",
                "/api/analyze-product",
                r#"{"product_id":1}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
