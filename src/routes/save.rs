use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, MethodRouter};
use axum::Json;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::collections::{Collection, ResponseShape};
use crate::error::AppError;
use crate::models::payload::{escape_value, is_blank};
use crate::models::Payload;
use crate::state::{AppState, SharedState};

/// `POST /save` with the payload under `collection.input_field`.
pub fn body_route(collection: Collection) -> MethodRouter<SharedState> {
    post(
        move |State(state): State<SharedState>, headers: HeaderMap, body: Bytes| async move {
            save_body(&state, collection, &headers, &body).await
        },
    )
}

/// `GET /save/{quizData}` with a JSON-encoded payload in the path segment.
pub fn path_route(collection: Collection) -> MethodRouter<SharedState> {
    get(move |State(state): State<SharedState>, Path(segment): Path<String>| async move {
        save_segment(&state, collection, &segment).await
    })
}

pub async fn save_body(
    state: &AppState,
    collection: Collection,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Response, AppError> {
    // Only JSON content types are parsed; anything else, or a body that does
    // not parse, is treated like an empty object.
    let mut parsed: Value = if is_json(headers) {
        serde_json::from_slice(body).unwrap_or(Value::Null)
    } else {
        Value::Null
    };

    let value = match parsed.get_mut(collection.input_field).map(Value::take) {
        Some(value) if !is_blank(&value) => value,
        _ => return Err(AppError::MissingInput(collection.input_field.to_string())),
    };

    store(state, collection, value).await
}

pub async fn save_segment(
    state: &AppState,
    collection: Collection,
    segment: &str,
) -> Result<Response, AppError> {
    tracing::debug!("Received {} on GET: {segment}", collection.input_field);

    if segment.is_empty() {
        return Err(AppError::MissingInput(collection.input_field.to_string()));
    }

    let value: Value = serde_json::from_str(segment).map_err(|_| {
        AppError::InvalidInput(format!("{} must be valid JSON", collection.input_field))
    })?;

    if is_blank(&value) {
        return Err(AppError::MissingInput(collection.input_field.to_string()));
    }

    store(state, collection, value).await
}

/// Assign an id, write the payload with a single insert, and build the
/// response for the collection's shape.
pub async fn store(
    state: &AppState,
    collection: Collection,
    value: Value,
) -> Result<Response, AppError> {
    let value = if collection.escape_text {
        escape_value(value)
    } else {
        value
    };
    let payload = Payload::from_value(&value);

    let id = Uuid::new_v4();
    let stored_id = state.store.insert(&collection.table, id, &payload).await?;

    tracing::debug!(
        "Stored {} bytes in {} as {stored_id}",
        payload.as_str().len(),
        collection.table.name
    );

    Ok(respond(state, collection, stored_id))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

fn respond(state: &AppState, collection: Collection, id: Uuid) -> Response {
    match collection.shape {
        ResponseShape::Receipt { message } => (
            StatusCode::OK,
            Json(json!({
                "status": "success",
                "message": message,
                "quizId": id,
            })),
        )
            .into_response(),
        ResponseShape::Pointer { message } => {
            let url = state.config.share_url_for(id);
            (StatusCode::OK, format!("{message} {url}")).into_response()
        }
    }
}
