use axum::http::{header, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::handlers::{self as api_handlers, AppState};

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    // Public API routes - read-only, no authentication required
    let api_routes = Router::new()
        .route("/search", get(api_handlers::search_recipes))
        .route("/recipes/:id", get(api_handlers::get_recipe))
        .route("/recipes/:id/text", get(api_handlers::get_recipe_text))
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .with_state(state);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            // CORS - allow all origins for read-only public API
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(
            // Tracing
            TraceLayer::new_for_http(),
        )
}
