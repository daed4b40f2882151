use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::maintenance_records::core::record::MaintenanceType;
use crate::modules::maintenance_records::use_cases::start_call::command::StartCall;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartCallBody {
    #[serde(rename = "type", default)]
    pub record_type: MaintenanceType,
    pub description: String,
    pub location: String,
    pub technician: String,
}

#[derive(Serialize)]
pub struct StartCallResponse {
    pub record_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StartCallBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = StartCall {
        record_id: Uuid::now_v7().to_string(),
        record_type: body.record_type,
        description: body.description,
        location: body.location,
        technician: body.technician,
        started_at: state.clock.now(),
    };

    match state.start_call_handler.handle(command).await {
        Ok(record) => (
            StatusCode::CREATED,
            Json(StartCallResponse {
                record_id: record.id,
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
