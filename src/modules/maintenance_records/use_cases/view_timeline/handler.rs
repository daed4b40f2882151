use crate::modules::maintenance_records::core::shift::Shift;
use crate::modules::maintenance_records::use_cases::errors::ApplicationError;
use crate::modules::maintenance_records::use_cases::view_timeline::projection::{
    TimelineView, project_timeline,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct TimelineQueries<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
}

impl<TStore> TimelineQueries<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn timeline(&self, shift: Option<Shift>) -> Result<TimelineView, ApplicationError> {
        let log = self.store.snapshot().await?;
        let now = self.clock.now();
        Ok(project_timeline(&log, shift, &now))
    }
}
