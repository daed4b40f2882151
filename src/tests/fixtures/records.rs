// Shared test fixture for MaintenanceRecord values.
// All times fall on 2024-03-04 at UTC+01:00 unless a test picks its own.

use crate::modules::maintenance_records::core::record::{MaintenanceRecord, MaintenanceType};
use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};

pub fn fixture_offset() -> FixedOffset {
    FixedOffset::east_opt(3600).unwrap()
}

/// Wall-clock `HH:MM` on the fixture date.
pub fn at(hh_mm: &str) -> DateTime<FixedOffset> {
    let time = NaiveTime::parse_from_str(hh_mm, "%H:%M").unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
    fixture_offset()
        .from_local_datetime(&date.and_time(time))
        .single()
        .unwrap()
}

pub fn next_day_at(hh_mm: &str) -> DateTime<FixedOffset> {
    at(hh_mm) + Duration::days(1)
}

pub struct MaintenanceRecordBuilder {
    inner: MaintenanceRecord,
}

impl Default for MaintenanceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MaintenanceRecordBuilder {
    pub fn new() -> Self {
        let start = at("08:00");
        Self {
            inner: MaintenanceRecord {
                id: "mr-fixed-0001".to_string(),
                record_type: MaintenanceType::MaintenanceCall,
                start_time: start,
                end_time: None,
                description: "Conveyor belt jammed".to_string(),
                location: "Line 3".to_string(),
                technician: "JDV".to_string(),
                resolution: None,
                actual_issue: None,
                parts_used: Vec::new(),
                parts_needed: Vec::new(),
                caused_downtime: false,
                created_at: start,
                updated_at: start,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn record_type(mut self, v: MaintenanceType) -> Self {
        self.inner.record_type = v;
        self
    }

    /// Start time on the fixture date; also stamps `created_at` and `updated_at`.
    pub fn started(mut self, hh_mm: &str) -> Self {
        let start = at(hh_mm);
        self.inner.start_time = start;
        self.inner.created_at = start;
        self.inner.updated_at = start;
        self
    }

    pub fn ended(mut self, hh_mm: &str) -> Self {
        self.inner.end_time = Some(at(hh_mm));
        self
    }

    pub fn start_time(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: Option<DateTime<FixedOffset>>) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn technician(mut self, v: impl Into<String>) -> Self {
        self.inner.technician = v.into();
        self
    }

    pub fn resolution(mut self, v: impl Into<String>) -> Self {
        self.inner.resolution = Some(v.into());
        self
    }

    pub fn actual_issue(mut self, v: impl Into<String>) -> Self {
        self.inner.actual_issue = Some(v.into());
        self
    }

    pub fn parts_used(mut self, v: Vec<String>) -> Self {
        self.inner.parts_used = v;
        self
    }

    pub fn caused_downtime(mut self, v: bool) -> Self {
        self.inner.caused_downtime = v;
        self
    }

    pub fn created_at(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn updated_at(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> MaintenanceRecord {
        self.inner
    }
}
