use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::modules::maintenance_records::core::format::{
    format_clock_time, format_duration, format_mttr, format_time_input,
};
use crate::modules::maintenance_records::core::record::{MaintenanceRecord, MaintenanceType};
use crate::modules::maintenance_records::core::shift::Shift;
use crate::modules::maintenance_records::core::state::MaintenanceLog;

/// Read model of one record as the record lists show it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordView {
    pub id: String,
    #[serde(rename = "type")]
    pub record_type: MaintenanceType,
    pub type_label: &'static str,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub start_label: String,
    pub end_label: Option<String>,
    /// `HH:MM` values for the edit form.
    pub start_time_of_day: String,
    pub end_time_of_day: Option<String>,
    pub duration: String,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    pub caused_downtime: bool,
    pub active: bool,
}

impl RecordView {
    /// Open records report their duration up to `now`.
    pub fn from_record(record: &MaintenanceRecord, now: &DateTime<FixedOffset>) -> Self {
        let end = record.end_time.unwrap_or(*now);
        Self {
            id: record.id.clone(),
            record_type: record.record_type,
            type_label: record.record_type.label(),
            description: record.description.clone(),
            location: record.location.clone(),
            technician: record.technician.clone(),
            start_time: record.start_time,
            end_time: record.end_time,
            start_label: format_clock_time(&record.start_time),
            end_label: record.end_time.as_ref().map(format_clock_time),
            start_time_of_day: format_time_input(&record.start_time),
            end_time_of_day: record.end_time.as_ref().map(format_time_input),
            duration: format_duration(&record.start_time, &end),
            resolution: record.resolution.clone(),
            actual_issue: record.actual_issue.clone(),
            caused_downtime: record.caused_downtime,
            active: record.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub active_calls: usize,
    pub total_records: usize,
    pub downtime_incidents: usize,
    pub mean_time_to_repair_minutes: i64,
    pub mean_time_to_repair: String,
    pub shift: Shift,
    pub active_records: Vec<RecordView>,
    pub recent_completed: Vec<RecordView>,
}

pub fn project_dashboard(
    log: &MaintenanceLog,
    now: &DateTime<FixedOffset>,
    recent_completed_limit: usize,
) -> DashboardView {
    let active: Vec<RecordView> = log
        .active_records()
        .iter()
        .map(|record| RecordView::from_record(record, now))
        .collect();
    let recent_completed = log
        .completed_records(recent_completed_limit)
        .iter()
        .map(|record| RecordView::from_record(record, now))
        .collect();
    let mttr = log.mean_time_to_repair();

    DashboardView {
        active_calls: active.len(),
        total_records: log.len(),
        downtime_incidents: log.downtime_count(),
        mean_time_to_repair_minutes: mttr,
        mean_time_to_repair: format_mttr(mttr),
        shift: Shift::current(now),
        active_records: active,
        recent_completed,
    }
}
