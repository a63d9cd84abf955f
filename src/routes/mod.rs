pub mod lorem;
pub mod save;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::collections::Deployment;
use crate::state::SharedState;

pub fn deployment_routes(deployment: Deployment) -> Router<SharedState> {
    let collection = deployment.collection();
    let router = Router::new().route("/", get(index));

    match deployment {
        Deployment::Quiz => router
            .route("/save/{quizData}", save::path_route(collection))
            .route("/save", save::body_route(collection)),
        Deployment::Lorem => router.route("/lorem", lorem::route(collection)),
        Deployment::Content => router.route("/save", save::body_route(collection)),
    }
}

async fn index() -> Json<Value> {
    Json(json!({ "message": "Hello from the server!" }))
}
