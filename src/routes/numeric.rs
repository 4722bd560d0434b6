use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::numeric::{self, DEFAULT_DECIMALS};

#[derive(Deserialize)]
pub struct RoundRequest {
    pub number: f64,
    #[serde(default)]
    pub decimal: Option<i32>,
}

#[derive(Serialize)]
pub struct RoundResponse {
    pub value: f64,
}

#[derive(Deserialize)]
pub struct IsNumberRequest {
    #[serde(default)]
    pub value: Value,
}

#[derive(Serialize)]
pub struct IsNumberResponse {
    pub is_number: bool,
}

pub async fn post_round(Json(req): Json<RoundRequest>) -> Json<RoundResponse> {
    let decimal = req.decimal.unwrap_or(DEFAULT_DECIMALS);
    Json(RoundResponse {
        value: numeric::round_to_nearest(req.number, decimal),
    })
}

pub async fn post_is_number(Json(req): Json<IsNumberRequest>) -> Json<IsNumberResponse> {
    Json(IsNumberResponse {
        is_number: numeric::is_number(&req.value),
    })
}
