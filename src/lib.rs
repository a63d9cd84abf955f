pub mod collections;
pub mod config;
pub mod db;
pub mod error;
pub mod lorem;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::lorem::LoremSource;
use crate::state::{AppState, SharedState};
use crate::store::RecordStore;

pub fn build_app(store: Arc<dyn RecordStore>, config: Config) -> Router {
    let deployment = config.deployment;
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        store,
        lorem: LoremSource::new(config.lorem_paragraphs.clone()),
        config,
    });

    Router::new()
        .merge(routes::deployment_routes(deployment))
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                )),
        )
        .layer(DefaultBodyLimit::max(max_body_size))
        .with_state(state)
}

async fn health(State(state): State<SharedState>) -> Response {
    match state.store.ping().await {
        Ok(()) => "ok".into_response(),
        Err(e) => {
            tracing::warn!("Health check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable").into_response()
        }
    }
}
