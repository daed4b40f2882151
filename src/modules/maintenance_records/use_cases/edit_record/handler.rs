use crate::modules::maintenance_records::core::commands::ApplyOutcome;
use crate::modules::maintenance_records::core::decision::DecideError;
use crate::modules::maintenance_records::core::record::MaintenanceRecord;
use crate::modules::maintenance_records::use_cases::edit_record::command::EditRecord;
use crate::modules::maintenance_records::use_cases::edit_record::decide::decide_edit_record;
use crate::modules::maintenance_records::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::record_store::{RecordStore, Transition};
use std::sync::Arc;

pub struct EditRecordHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> EditRecordHandler<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: EditRecord) -> Result<MaintenanceRecord, ApplicationError> {
        let transition = self
            .store
            .decide_and_apply(move |log| decide_edit_record(log, command))
            .await?;

        match transition {
            Transition::Rejected { reason } => {
                tracing::warn!(%reason, "record edit rejected");
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
