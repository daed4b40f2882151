use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::modules::maintenance_records::core::format::format_clock_time;
use crate::modules::maintenance_records::core::shift::{HourMarker, Shift, half_hour_ticks};
use crate::modules::maintenance_records::core::state::MaintenanceLog;
use crate::modules::maintenance_records::core::timeline::{TimelineSegment, layout};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentView {
    pub record_id: String,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub left_percent: f64,
    pub width_percent: f64,
    pub active: bool,
    pub caused_downtime: bool,
    pub time_label: String,
}

impl From<TimelineSegment<'_>> for SegmentView {
    fn from(segment: TimelineSegment<'_>) -> Self {
        let record = segment.record;
        let end_label = record
            .end_time
            .as_ref()
            .map(format_clock_time)
            .unwrap_or_else(|| "now".to_string());
        Self {
            record_id: record.id.clone(),
            description: record.description.clone(),
            location: record.location.clone(),
            technician: record.technician.clone(),
            left_percent: segment.left_percent,
            width_percent: segment.width_percent,
            active: record.is_active(),
            caused_downtime: record.caused_downtime,
            time_label: format!("{} - {}", format_clock_time(&record.start_time), end_label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineView {
    pub shift: Shift,
    pub markers: Vec<HourMarker>,
    pub half_hour_ticks: Vec<f64>,
    pub segments: Vec<SegmentView>,
}

/// Lays the whole log out on one shift axis. Without an explicit shift the
/// one containing `now` is used.
pub fn project_timeline(
    log: &MaintenanceLog,
    shift: Option<Shift>,
    now: &DateTime<FixedOffset>,
) -> TimelineView {
    let shift = shift.unwrap_or_else(|| Shift::current(now));
    TimelineView {
        shift,
        markers: shift.hour_markers(),
        half_hour_ticks: half_hour_ticks(),
        segments: layout(log.records(), shift, *now).map(SegmentView::from).collect(),
    }
}
