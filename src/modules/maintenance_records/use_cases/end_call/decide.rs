use crate::modules::maintenance_records::core::{
    commands::RecordCommand,
    decision::{DecideError, Decision},
    state::MaintenanceLog,
};
use crate::modules::maintenance_records::use_cases::end_call::command::EndCall;

pub fn decide_end_call(log: &MaintenanceLog, command: EndCall) -> Decision {
    let target = match &command.record_id {
        Some(id) => log.find(id).ok_or_else(|| DecideError::NotFound(id.clone())),
        None => log.first_active().ok_or(DecideError::NoActiveRecord),
    };
    let target = match target {
        Ok(record) => record,
        Err(reason) => return Decision::Rejected { reason },
    };
    if target.is_completed() {
        return Decision::Rejected {
            reason: DecideError::AlreadyCompleted(target.id.clone()),
        };
    }

    let mut record = target.clone();
    record.end_time = Some(command.end_time);
    record.resolution = command.resolution;
    record.actual_issue = command.actual_issue;
    record.caused_downtime = command.caused_downtime;
    record.updated_at = command.requested_at;
    Decision::Accepted {
        command: RecordCommand::Update(record),
    }
}
