use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod indicators;
pub mod numeric;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn get_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(get_health))
        .route("/indicators", post(indicators::post_indicator_batch))
        .route("/indicators/:kind", post(indicators::post_indicator))
        .route("/round", post(numeric::post_round))
        .route("/is-number", post(numeric::post_is_number));

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
