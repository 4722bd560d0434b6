use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ErrorResponse;
use crate::{
    models::IndicatorKind,
    services::indicator_service::{self, IndicatorError},
    state::AppState,
};

#[derive(Deserialize)]
pub struct IndicatorRequest {
    pub series: Vec<f64>,
    #[serde(default)]
    pub limit: Option<i64>, // whole series when omitted
}

#[derive(Serialize)]
pub struct IndicatorResponse {
    pub indicator: IndicatorKind,
    pub value: f64,
}

#[derive(Deserialize)]
pub struct BatchRequest {
    pub series: Vec<f64>,
    pub indicators: String, // comma-separated: "sma_20,ema_12,rsi"
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub count: usize,
    pub values: BTreeMap<String, f64>,
}

fn error_response(err: IndicatorError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        IndicatorError::UnknownIndicator(_) => StatusCode::NOT_FOUND,
        IndicatorError::SeriesTooLong { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        IndicatorError::NoValidIndicators => StatusCode::BAD_REQUEST,
    };
    tracing::warn!("Indicator request rejected: {}", err);
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

pub async fn post_indicator(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(req): Json<IndicatorRequest>,
) -> Result<Json<IndicatorResponse>, (StatusCode, Json<ErrorResponse>)> {
    let (indicator, value) =
        indicator_service::evaluate(&state, &kind, &req.series, req.limit).map_err(error_response)?;

    Ok(Json(IndicatorResponse { indicator, value }))
}

pub async fn post_indicator_batch(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let values = indicator_service::evaluate_batch(&state, &req.series, &req.indicators)
        .map_err(error_response)?;

    Ok(Json(BatchResponse {
        count: values.len(),
        values,
    }))
}
