use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};
use chrono::DateTime;

use crate::modules::maintenance_records::core::format::{adjust_time_of_day, with_time_of_day};
use crate::modules::maintenance_records::use_cases::edit_record::command::EditRecord;
use crate::modules::maintenance_records::use_cases::view_dashboard::inbound::graphql::{
    GqlMaintenanceType, GqlRecord,
};
use crate::modules::maintenance_records::use_cases::view_dashboard::projection::RecordView;
use crate::shell::state::AppState;

/// Timestamps are RFC 3339. The `*TimeOfDay` fields move them to another
/// `HH:MM` on the same date.
#[derive(InputObject)]
pub struct EditRecordInput {
    #[graphql(name = "type")]
    pub record_type: GqlMaintenanceType,
    pub start_time: String,
    pub start_time_of_day: Option<String>,
    pub end_time: Option<String>,
    pub end_time_of_day: Option<String>,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    #[graphql(default)]
    pub parts_used: Vec<String>,
    #[graphql(default)]
    pub parts_needed: Vec<String>,
    #[graphql(default)]
    pub caused_downtime: bool,
}

#[derive(Default)]
pub struct EditRecordMutation;

#[Object]
impl EditRecordMutation {
    async fn edit_record(
        &self,
        context: &Context<'_>,
        record_id: ID,
        input: EditRecordInput,
    ) -> GqlResult<GqlRecord> {
        let state = context.data_unchecked::<AppState>();
        let now = state.clock.now();

        let start_time = DateTime::parse_from_rfc3339(&input.start_time)
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let end_time = input
            .end_time
            .as_deref()
            .map(DateTime::parse_from_rfc3339)
            .transpose()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let start_time = match input.start_time_of_day.as_deref() {
            Some(hh_mm) => with_time_of_day(&start_time, hh_mm)
                .map_err(|e| async_graphql::Error::new(e.to_string()))?,
            None => start_time,
        };
        let end_time = adjust_time_of_day(end_time, input.end_time_of_day.as_deref())
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        let command = EditRecord {
            record_id: record_id.0,
            record_type: input.record_type.into(),
            start_time,
            end_time,
            description: input.description,
            location: input.location,
            technician: input.technician,
            resolution: input.resolution,
            actual_issue: input.actual_issue,
            parts_used: input.parts_used,
            parts_needed: input.parts_needed,
            caused_downtime: input.caused_downtime,
            requested_at: now,
        };

        let record = state
            .edit_record_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(RecordView::from_record(&record, &now).into())
    }
}
