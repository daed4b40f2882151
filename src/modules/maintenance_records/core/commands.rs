use crate::modules::maintenance_records::core::record::MaintenanceRecord;

/// Mutations accepted by the maintenance log. Every change to the collection
/// goes through one of these variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordCommand {
    Add(MaintenanceRecord),
    Update(MaintenanceRecord),
}

impl RecordCommand {
    pub fn record(&self) -> &MaintenanceRecord {
        match self {
            RecordCommand::Add(record) | RecordCommand::Update(record) => record,
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record().id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Added,
    Updated,
    /// Duplicate id on add, unknown id on update. The collection is untouched.
    Ignored,
}
