use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::maintenance_records::core::shift::Shift;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TimelineParams {
    pub shift: Option<Shift>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<TimelineParams>,
) -> impl IntoResponse {
    match state.timeline.timeline(params.shift).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error.into_response(),
    }
}
