// Shared builders for the use-case commands. Defaults line up with
// `MaintenanceRecordBuilder` so a started call and a fixture record match.

use crate::modules::maintenance_records::core::record::MaintenanceType;
use crate::modules::maintenance_records::use_cases::edit_record::command::EditRecord;
use crate::modules::maintenance_records::use_cases::end_call::command::EndCall;
use crate::modules::maintenance_records::use_cases::start_call::command::StartCall;
use crate::tests::fixtures::records::at;
use chrono::{DateTime, FixedOffset};

pub struct StartCallBuilder {
    inner: StartCall,
}

impl Default for StartCallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartCallBuilder {
    pub fn new() -> Self {
        Self {
            inner: StartCall {
                record_id: "mr-fixed-0001".to_string(),
                record_type: MaintenanceType::MaintenanceCall,
                description: "Conveyor belt jammed".to_string(),
                location: "Line 3".to_string(),
                technician: "JDV".to_string(),
                started_at: at("08:00"),
            },
        }
    }

    pub fn record_id(mut self, v: impl Into<String>) -> Self {
        self.inner.record_id = v.into();
        self
    }

    pub fn record_type(mut self, v: MaintenanceType) -> Self {
        self.inner.record_type = v;
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

    pub fn started_at(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.started_at = v;
        self
    }

    pub fn build(self) -> StartCall {
        self.inner
    }
}

pub struct EndCallBuilder {
    inner: EndCall,
}

impl Default for EndCallBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EndCallBuilder {
    pub fn new() -> Self {
        Self {
            inner: EndCall {
                record_id: None,
                end_time: at("09:00"),
                resolution: Some("Cleared the jam".to_string()),
                actual_issue: None,
                caused_downtime: false,
                requested_at: at("09:00"),
            },
        }
    }

    pub fn record_id(mut self, v: impl Into<String>) -> Self {
        self.inner.record_id = Some(v.into());
        self
    }

    pub fn end_time(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.end_time = v;
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

    pub fn caused_downtime(mut self, v: bool) -> Self {
        self.inner.caused_downtime = v;
        self
    }

    pub fn requested_at(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> EndCall {
        self.inner
    }
}

pub struct EditRecordBuilder {
    inner: EditRecord,
}

impl Default for EditRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EditRecordBuilder {
    pub fn new() -> Self {
        Self {
            inner: EditRecord {
                record_id: "mr-fixed-0001".to_string(),
                record_type: MaintenanceType::MaintenanceCall,
                start_time: at("08:00"),
                end_time: None,
                description: "Conveyor belt jammed".to_string(),
                location: "Line 3".to_string(),
                technician: "JDV".to_string(),
                resolution: None,
                actual_issue: None,
                parts_used: Vec::new(),
                parts_needed: Vec::new(),
                caused_downtime: false,
                requested_at: at("12:00"),
            },
        }
    }

    pub fn record_id(mut self, v: impl Into<String>) -> Self {
        self.inner.record_id = v.into();
        self
    }

    pub fn record_type(mut self, v: MaintenanceType) -> Self {
        self.inner.record_type = v;
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

    pub fn caused_downtime(mut self, v: bool) -> Self {
        self.inner.caused_downtime = v;
        self
    }

    pub fn requested_at(mut self, v: DateTime<FixedOffset>) -> Self {
        self.inner.requested_at = v;
        self
    }

    pub fn build(self) -> EditRecord {
        self.inner
    }
}
