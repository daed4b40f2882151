use crate::modules::maintenance_records::core::record::MaintenanceType;
use chrono::{DateTime, FixedOffset};

/// Full replacement of the editable fields of one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    pub record_id: String,
    pub record_type: MaintenanceType,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: Option<DateTime<FixedOffset>>,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub resolution: Option<String>,
    pub actual_issue: Option<String>,
    pub parts_used: Vec<String>,
    pub parts_needed: Vec<String>,
    pub caused_downtime: bool,
    pub requested_at: DateTime<FixedOffset>,
}
