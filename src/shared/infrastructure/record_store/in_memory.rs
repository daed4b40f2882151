use crate::modules::maintenance_records::core::commands::{ApplyOutcome, RecordCommand};
use crate::modules::maintenance_records::core::decision::Decision;
use crate::modules::maintenance_records::core::state::MaintenanceLog;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError, Transition};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryRecordStore {
    log: RwLock<MaintenanceLog>,
    is_offline: bool,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

fn trace_outcome(record_id: &str, outcome: ApplyOutcome) {
    match outcome {
        ApplyOutcome::Added => tracing::info!(%record_id, "maintenance record added"),
        ApplyOutcome::Updated => tracing::info!(%record_id, "maintenance record updated"),
        ApplyOutcome::Ignored => tracing::warn!(%record_id, "maintenance record command ignored"),
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn apply(&self, command: RecordCommand) -> Result<ApplyOutcome, RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }

        let record_id = command.record_id().to_string();
        let outcome = self.log.write().await.apply(command);
        trace_outcome(&record_id, outcome);
        Ok(outcome)
    }

    async fn decide_and_apply<F>(&self, decide: F) -> Result<Transition, RecordStoreError>
    where
        F: FnOnce(&MaintenanceLog) -> Decision + Send + 'static,
    {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }

        let mut log = self.log.write().await;
        match decide(&*log) {
            Decision::Accepted { command } => {
                let record = command.record().clone();
                let outcome = log.apply(command);
                trace_outcome(&record.id, outcome);
                Ok(Transition::Applied { record, outcome })
            }
            Decision::Rejected { reason } => Ok(Transition::Rejected { reason }),
        }
    }

    async fn snapshot(&self) -> Result<MaintenanceLog, RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }

        Ok(self.log.read().await.clone())
    }
}
