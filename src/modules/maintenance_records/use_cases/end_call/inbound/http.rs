use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::modules::maintenance_records::core::format::resolve_time;
use crate::modules::maintenance_records::use_cases::end_call::command::EndCall;
use crate::modules::maintenance_records::use_cases::errors::ErrorBody;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct EndCallBody {
    pub record_id: Option<String>,
    pub end_time: Option<DateTime<FixedOffset>>,
    /// `HH:MM` on today's date, used when `end_time` is absent.
    pub end_time_of_day: Option<String>,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    #[serde(default)]
    pub caused_downtime: bool,
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EndCallBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let now = state.clock.now();
    let end_time = match resolve_time(body.end_time, body.end_time_of_day.as_deref(), &now) {
        Ok(end_time) => end_time,
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

    let command = EndCall {
        record_id: body.record_id,
        end_time,
        resolution: non_blank(body.resolution),
        actual_issue: non_blank(body.actual_issue),
        caused_downtime: body.caused_downtime,
        requested_at: now,
    };

    match state.end_call_handler.handle(command).await {
        Ok(record) => Json(record).into_response(),
        Err(error) => error.into_response(),
    }
}
