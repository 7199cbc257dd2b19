use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use condensate_core::{CondensedResult, TypedEntity, ENGINE_ID, LAYER_TAG};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct CondenseRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct EntitiesResponse {
    pub entities: Vec<TypedEntity>,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn condense_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/condense", post(condense))
        .route("/api/v1/condense/entities", post(entities))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "engine": ENGINE_ID,
        "layer": LAYER_TAG,
        "uptime_secs": state.uptime_secs(),
    }))
}

fn parse(payload: Result<Json<CondenseRequest>, JsonRejection>) -> Result<CondenseRequest, ApiError> {
    payload
        .map(|Json(req)| req)
        .map_err(|e| ApiError::bad_request(e.body_text()))
}

async fn condense(
    State(state): State<AppState>,
    payload: Result<Json<CondenseRequest>, JsonRejection>,
) -> Result<Json<CondensedResult>, ApiError> {
    let req = parse(payload)?;
    let condenser = state.condenser.clone();
    let result = tokio::task::spawn_blocking(move || condenser.condense(&req.text))
        .await
        .map_err(|e| ApiError::internal(format!("condense task failed: {e}")))?;
    Ok(Json(result))
}

async fn entities(
    State(state): State<AppState>,
    payload: Result<Json<CondenseRequest>, JsonRejection>,
) -> Result<Json<EntitiesResponse>, ApiError> {
    let req = parse(payload)?;
    let entities = state.condenser.typed_entities(&req.text);
    Ok(Json(EntitiesResponse { entities }))
}
