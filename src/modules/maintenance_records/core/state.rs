use crate::modules::maintenance_records::core::commands::{ApplyOutcome, RecordCommand};
use crate::modules::maintenance_records::core::evolve::evolve;
use crate::modules::maintenance_records::core::record::MaintenanceRecord;

/// Insertion-ordered collection of maintenance records.
///
/// Mutated only through [`MaintenanceLog::apply`]. Every read below is a pure
/// recomputation over the current collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceLog {
    pub(crate) records: Vec<MaintenanceRecord>,
}

impl MaintenanceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: RecordCommand) -> ApplyOutcome {
        evolve(self, command)
    }

    pub fn records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&MaintenanceRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn active_records(&self) -> Vec<MaintenanceRecord> {
        self.records
            .iter()
            .filter(|record| record.is_active())
            .cloned()
            .collect()
    }

    /// Oldest open record, the one the "end call" shortcut closes.
    pub fn first_active(&self) -> Option<&MaintenanceRecord> {
        self.records.iter().find(|record| record.is_active())
    }

    /// Most recently closed records first, at most `limit` of them.
    pub fn completed_records(&self, limit: usize) -> Vec<MaintenanceRecord> {
        let mut completed: Vec<MaintenanceRecord> = self
            .records
            .iter()
            .filter(|record| record.is_completed())
            .cloned()
            .collect();
        completed.sort_by(|a, b| b.end_time.cmp(&a.end_time));
        completed.truncate(limit);
        completed
    }

    /// Average repair time of completed records in whole minutes, 0 when none are completed.
    pub fn mean_time_to_repair(&self) -> i64 {
        let durations: Vec<f64> = self
            .records
            .iter()
            .filter_map(MaintenanceRecord::duration_minutes)
            .collect();
        if durations.is_empty() {
            return 0;
        }
        let total: f64 = durations.iter().sum();
        (total / durations.len() as f64).round() as i64
    }

    pub fn downtime_count(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.caused_downtime)
            .count()
    }
}
