use crate::modules::maintenance_records::core::commands::{ApplyOutcome, RecordCommand};
use crate::modules::maintenance_records::core::state::MaintenanceLog;

/// Applies one command to the log.
///
/// `Add` appends unless the id is already taken. `Update` replaces the entry
/// with the same id in place; an unknown id leaves the log untouched. The
/// stored `created_at` survives every update and `updated_at` never drops
/// below it.
pub fn evolve(log: &mut MaintenanceLog, command: RecordCommand) -> ApplyOutcome {
    match command {
        RecordCommand::Add(record) => {
            if log.records.iter().any(|existing| existing.id == record.id) {
                return ApplyOutcome::Ignored;
            }
            log.records.push(record);
            ApplyOutcome::Added
        }
        RecordCommand::Update(mut record) => {
            match log.records.iter_mut().find(|existing| existing.id == record.id) {
                Some(existing) => {
                    record.created_at = existing.created_at;
                    if record.updated_at < record.created_at {
                        record.updated_at = record.created_at;
                    }
                    *existing = record;
                    ApplyOutcome::Updated
                }
                None => ApplyOutcome::Ignored,
            }
        }
    }
}
