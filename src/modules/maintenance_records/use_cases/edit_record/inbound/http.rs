use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::modules::maintenance_records::core::format::{
    TimeOfDayError, adjust_time_of_day, with_time_of_day,
};
use crate::modules::maintenance_records::core::record::MaintenanceType;
use crate::modules::maintenance_records::use_cases::edit_record::command::EditRecord;
use crate::modules::maintenance_records::use_cases::errors::ErrorBody;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EditRecordBody {
    #[serde(rename = "type", default)]
    pub record_type: MaintenanceType,
    pub start_time: DateTime<FixedOffset>,
    pub start_time_of_day: Option<String>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub end_time_of_day: Option<String>,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    #[serde(default)]
    pub parts_used: Vec<String>,
    #[serde(default)]
    pub parts_needed: Vec<String>,
    #[serde(default)]
    pub caused_downtime: bool,
}

fn edited_times(
    body: &EditRecordBody,
) -> Result<(DateTime<FixedOffset>, Option<DateTime<FixedOffset>>), TimeOfDayError> {
    let start_time = match body.start_time_of_day.as_deref() {
        Some(hh_mm) => with_time_of_day(&body.start_time, hh_mm)?,
        None => body.start_time,
    };
    let end_time = adjust_time_of_day(body.end_time, body.end_time_of_day.as_deref())?;
    Ok((start_time, end_time))
}

pub async fn handle(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    body: Result<Json<EditRecordBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let (start_time, end_time) = match edited_times(&body) {
        Ok(times) => times,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: error.to_string(),
                }),
            )
                .into_response();
        }
    };

    let command = EditRecord {
        record_id,
        record_type: body.record_type,
        start_time,
        end_time,
        description: body.description,
        location: body.location,
        technician: body.technician,
        resolution: body.resolution,
        actual_issue: body.actual_issue,
        parts_used: body.parts_used,
        parts_needed: body.parts_needed,
        caused_downtime: body.caused_downtime,
        requested_at: state.clock.now(),
    };

    match state.edit_record_handler.handle(command).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => error.into_response(),
    }
}
