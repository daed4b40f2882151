use chrono::{DateTime, FixedOffset};

/// Closes a maintenance record. Without a `record_id` the oldest active
/// record is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndCall {
    pub record_id: Option<String>,
    pub end_time: DateTime<FixedOffset>,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    pub caused_downtime: bool,
    pub requested_at: DateTime<FixedOffset>,
}
