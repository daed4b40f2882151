use crate::modules::maintenance_records::core::{
    commands::RecordCommand,
    decision::{DecideError, Decision},
    record::MaintenanceRecord,
    state::MaintenanceLog,
};
use crate::modules::maintenance_records::use_cases::edit_record::command::EditRecord;
use crate::modules::maintenance_records::use_cases::start_call::decide::normalize_technician;

pub fn decide_edit_record(log: &MaintenanceLog, command: EditRecord) -> Decision {
    let Some(existing) = log.find(&command.record_id) else {
        return Decision::Rejected {
            reason: DecideError::NotFound(command.record_id),
        };
    };
    if existing.is_completed() && command.end_time.is_none() {
        return Decision::Rejected {
            reason: DecideError::ReopenNotPermitted(command.record_id),
        };
    }

    let record = MaintenanceRecord {
        id: command.record_id,
        record_type: command.record_type,
        start_time: command.start_time,
        end_time: command.end_time,
        description: command.description,
        location: command.location,
        technician: normalize_technician(&command.technician),
        resolution: command.resolution,
        actual_issue: command.actual_issue,
        parts_used: command.parts_used,
        parts_needed: command.parts_needed,
        caused_downtime: command.caused_downtime,
        created_at: existing.created_at,
        updated_at: command.requested_at,
    };
    Decision::Accepted {
        command: RecordCommand::Update(record),
    }
}
