use crate::modules::maintenance_records::core::record::MaintenanceType;
use chrono::{DateTime, FixedOffset};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCall {
    pub record_id: String,
    pub record_type: MaintenanceType,
    pub description: String,
    pub location: String,
    pub technician: String,
    pub started_at: DateTime<FixedOffset>,
}
