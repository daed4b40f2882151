use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceType {
    #[default]
    #[serde(rename = "MAINTENANCE_CALL")]
    MaintenanceCall,
    #[serde(rename = "PREVENTATIVE")]
    Preventative,
    #[serde(rename = "PROACTIVE")]
    Proactive,
    #[serde(rename = "PROJECT")]
    Project,
    #[serde(rename = "4S_D")]
    FourSD,
}

impl MaintenanceType {
    /// All types in the order the start-call form lists them.
    pub const ALL: [MaintenanceType; 5] = [
        MaintenanceType::MaintenanceCall,
        MaintenanceType::Preventative,
        MaintenanceType::Proactive,
        MaintenanceType::Project,
        MaintenanceType::FourSD,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MaintenanceType::MaintenanceCall => "Maintenance Call",
            MaintenanceType::Preventative => "Preventative Maintenance",
            MaintenanceType::Proactive => "Proactive Maintenance",
            MaintenanceType::Project => "Project",
            MaintenanceType::FourSD => "4S+D Activity",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub id: String,
    #[serde(rename = "type")]
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
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl MaintenanceRecord {
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    pub fn is_completed(&self) -> bool {
        self.end_time.is_some()
    }

    /// Repair time in minutes, `None` while the record is still open.
    pub fn duration_minutes(&self) -> Option<f64> {
        self.end_time
            .map(|end| (end - self.start_time).num_milliseconds() as f64 / 60_000.0)
    }
}
