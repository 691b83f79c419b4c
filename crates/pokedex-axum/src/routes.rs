//! Route definitions and router construction.

use axum::routing::{get, post};
use axum::{Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::dto::WelcomeMessage;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Pokémon routes, without state applied.
fn pokemon_routes() -> Router<AppState> {
    Router::new()
        .route("/pokemon/all", get(handlers::pokemon::list))
        .route("/pokemon/", post(handlers::pokemon::create))
        .route("/pokemon", post(handlers::pokemon::create))
        .route("/pokemon/name/{name}", get(handlers::pokemon::get_by_name))
        .route(
            "/pokemon/{id}",
            get(handlers::pokemon::get)
                .put(handlers::pokemon::update)
                .delete(handlers::pokemon::remove),
        )
}

/// Create the main Axum router with all routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`, `{name}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(pokemon_routes().with_state(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Welcome endpoint.
pub(crate) async fn root() -> Json<WelcomeMessage> {
    tracing::info!(target: "pokedex.http", "API root endpoint accessed");
    Json(WelcomeMessage::new())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
