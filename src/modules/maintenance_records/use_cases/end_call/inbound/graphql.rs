use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::DateTime;

use crate::modules::maintenance_records::core::format::resolve_time;
use crate::modules::maintenance_records::use_cases::end_call::command::EndCall;
use crate::modules::maintenance_records::use_cases::end_call::inbound::http::non_blank;
use crate::modules::maintenance_records::use_cases::view_dashboard::inbound::graphql::GqlRecord;
use crate::modules::maintenance_records::use_cases::view_dashboard::projection::RecordView;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EndCallMutation;

#[Object]
impl EndCallMutation {
    /// Ends `record_id`, or the oldest active record when it is omitted.
    #[allow(clippy::too_many_arguments)]
    async fn end_call(
        &self,
        context: &Context<'_>,
        record_id: Option<ID>,
        end_time: Option<String>,
        end_time_of_day: Option<String>,
        resolution: Option<String>,
        actual_issue: Option<String>,
        caused_downtime: Option<bool>,
    ) -> GqlResult<GqlRecord> {
        let state = context.data_unchecked::<AppState>();
        let now = state.clock.now();

        let end_time = end_time
            .as_deref()
            .map(DateTime::parse_from_rfc3339)
            .transpose()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let end_time = resolve_time(end_time, end_time_of_day.as_deref(), &now)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let command = EndCall {
            record_id: record_id.map(|id| id.0),
            end_time,
            resolution: non_blank(resolution),
            actual_issue: non_blank(actual_issue),
            caused_downtime: caused_downtime.unwrap_or(false),
            requested_at: now,
        };

        let record = state
            .end_call_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(RecordView::from_record(&record, &now).into())
    }
}
