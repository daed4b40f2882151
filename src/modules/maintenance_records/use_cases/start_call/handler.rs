use crate::modules::maintenance_records::core::commands::ApplyOutcome;
use crate::modules::maintenance_records::core::decision::{DecideError, Decision};
use crate::modules::maintenance_records::core::record::MaintenanceRecord;
use crate::modules::maintenance_records::use_cases::errors::ApplicationError;
use crate::modules::maintenance_records::use_cases::start_call::command::StartCall;
use crate::modules::maintenance_records::use_cases::start_call::decide::decide_start_call;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct StartCallHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> StartCallHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: StartCall) -> Result<MaintenanceRecord, ApplicationError> {
        let command = match decide_start_call(command) {
            Decision::Accepted { command } => command,
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "start call rejected");
                return Err(ApplicationError::Domain(reason));
            }
        };

        let record = command.record().clone();
        match self.store.apply(command).await? {
            ApplyOutcome::Added => Ok(record),
            _ => Err(ApplicationError::Domain(DecideError::AlreadyExists(record.id))),
        }
    }
}
