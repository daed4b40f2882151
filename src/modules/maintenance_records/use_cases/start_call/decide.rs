use crate::modules::maintenance_records::core::{
    commands::RecordCommand,
    decision::{DecideError, Decision},
    record::MaintenanceRecord,
};
use crate::modules::maintenance_records::use_cases::start_call::command::StartCall;

const TECHNICIAN_INITIALS_MAX: usize = 3;

/// Upper-cased initials, at most three characters.
pub fn normalize_technician(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .take(TECHNICIAN_INITIALS_MAX)
        .collect()
}

pub fn decide_start_call(command: StartCall) -> Decision {
    if command.description.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::DescriptionRequired,
        };
    }
    if command.location.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::LocationRequired,
        };
    }
    if command.technician.trim().is_empty() {
        return Decision::Rejected {
            reason: DecideError::TechnicianRequired,
        };
    }

    let record = MaintenanceRecord {
        id: command.record_id,
        record_type: command.record_type,
        start_time: command.started_at,
        end_time: None,
        description: command.description,
        location: command.location,
        technician: normalize_technician(&command.technician),
        resolution: None,
        actual_issue: None,
        parts_used: Vec::new(),
        parts_needed: Vec::new(),
        caused_downtime: false,
        created_at: command.started_at,
        updated_at: command.started_at,
    };
    Decision::Accepted {
        command: RecordCommand::Add(record),
    }
}
