use chrono::{DateTime, FixedOffset};

use crate::modules::maintenance_records::core::record::MaintenanceRecord;
use crate::modules::maintenance_records::core::shift::{SHIFT_HOURS, Shift};

const AXIS_PERCENT: f64 = 100.0;

/// A record placed on the shift axis. Both percentages are relative to the
/// full width of the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineSegment<'a> {
    pub record: &'a MaintenanceRecord,
    pub left_percent: f64,
    pub width_percent: f64,
}

/// Positions every record on the axis of `shift`, earliest start first.
///
/// Records with equal start times keep their insertion order. Open records
/// stretch to `now`. Overlapping records are not stacked.
pub fn layout<'a>(
    records: &'a [MaintenanceRecord],
    shift: Shift,
    now: DateTime<FixedOffset>,
) -> impl Iterator<Item = TimelineSegment<'a>> + 'a {
    let mut ordered: Vec<&'a MaintenanceRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.start_time);
    ordered
        .into_iter()
        .map(move |record| position(record, shift, now))
}

pub fn position(
    record: &MaintenanceRecord,
    shift: Shift,
    now: DateTime<FixedOffset>,
) -> TimelineSegment<'_> {
    let start = record.start_time;
    let end = record.end_time.unwrap_or(now);
    let window_hours = f64::from(SHIFT_HOURS);

    let left_percent =
        (shift.hour_offset(&start) / window_hours * AXIS_PERCENT).clamp(0.0, AXIS_PERCENT);

    let duration_hours = (end - start).num_milliseconds() as f64 / 3_600_000.0;
    let width_percent = (duration_hours / window_hours * AXIS_PERCENT)
        .min(AXIS_PERCENT - left_percent)
        .max(0.0);

    TimelineSegment {
        record,
        left_percent,
        width_percent,
    }
}
