use crate::modules::maintenance_records::core::commands::ApplyOutcome;
use crate::modules::maintenance_records::core::decision::DecideError;
use crate::modules::maintenance_records::core::record::MaintenanceRecord;
use crate::modules::maintenance_records::use_cases::end_call::command::EndCall;
use crate::modules::maintenance_records::use_cases::end_call::decide::decide_end_call;
use crate::modules::maintenance_records::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::{RecordStore, Transition};
use std::sync::Arc;

pub struct EndCallHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EndCallHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: EndCall) -> Result<MaintenanceRecord, ApplicationError> {
        let transition = self
            .store
            .decide_and_apply(move |log| decide_end_call(log, command))
            .await?;

        match transition {
            Transition::Rejected { reason } => {
                tracing::warn!(%reason, "end call rejected");
                Err(ApplicationError::Domain(reason))
            }
            Transition::Applied {
                record,
                outcome: ApplyOutcome::Updated,
            } => Ok(record),
            Transition::Applied { record, .. } => {
                Err(ApplicationError::Domain(DecideError::NotFound(record.id)))
            }
        }
    }
}
