use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CompletedRecordsParams {
    pub limit: Option<usize>,
}

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    match state.dashboard.dashboard().await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn active_records(State(state): State<AppState>) -> impl IntoResponse {
    match state.dashboard.active_records().await {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn completed_records(
    State(state): State<AppState>,
    Query(params): Query<CompletedRecordsParams>,
) -> impl IntoResponse {
    match state.dashboard.completed_records(params.limit).await {
        Ok(records) => Json(records).into_response(),
        Err(error) => error.into_response(),
    }
}
