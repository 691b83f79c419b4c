//! Shared helpers for router integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use pokedex_axum::bootstrap::{AxumContext, CorsConfig};
use pokedex_axum::routes::create_router;
use pokedex_core::ports::{SeedSourceError, SeedSourcePort};
use pokedex_core::Pokemon;
use pokedex_db::TestDb;

/// Seed source that serves a fixed list.
pub struct StaticSeed(pub Vec<Pokemon>);

#[async_trait]
impl SeedSourcePort for StaticSeed {
    async fn fetch_all(&self) -> Result<Vec<Pokemon>, SeedSourceError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static test seed".to_string()
    }
}

/// Router over a fresh in-memory database seeded with `records`.
pub async fn router_with(records: Vec<Pokemon>) -> Router {
    let db = TestDb::new().await.unwrap();
    let core = db.app_core(Arc::new(StaticSeed(records)));
    core.seeder().load_seed_data().await.unwrap();
    create_router(AxumContext::new(Arc::new(core)), &CorsConfig::AllowAll)
}

/// Send one request with an optional JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
