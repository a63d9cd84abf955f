use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, MethodRouter};
use serde_json::Value;

use crate::collections::Collection;
use crate::error::AppError;
use crate::state::{AppState, SharedState};

use super::save;

pub fn route(collection: Collection) -> MethodRouter<SharedState> {
    get(move |State(state): State<SharedState>| async move {
        generate(&state, collection).await
    })
}

/// Generate a filler passage and store it like a submitted one.
pub async fn generate(state: &AppState, collection: Collection) -> Result<Response, AppError> {
    let passage = state.lorem.passage();
    tracing::debug!("Generated lorem passage of {} chars", passage.len());
    save::store(state, collection, Value::String(passage)).await
}
