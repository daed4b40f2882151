use crate::modules::maintenance_records::use_cases::errors::ApplicationError;
use crate::modules::maintenance_records::use_cases::view_dashboard::projection::{
    DashboardView, RecordView, project_dashboard,
};
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;

pub struct DashboardQueries<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    clock: Arc<dyn Clock>,
    recent_completed_limit: usize,
}

impl<TStore> DashboardQueries<TStore>
where
    TStore: RecordStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, clock: Arc<dyn Clock>, recent_completed_limit: usize) -> Self {
        Self {
            store,
            clock,
            recent_completed_limit,
        }
    }

    pub fn recent_completed_limit(&self) -> usize {
        self.recent_completed_limit
    }

    pub async fn dashboard(&self) -> Result<DashboardView, ApplicationError> {
        let log = self.store.snapshot().await?;
        let now = self.clock.now();
        tracing::debug!(records = log.len(), "projecting dashboard");
        Ok(project_dashboard(&log, &now, self.recent_completed_limit))
    }

    pub async fn active_records(&self) -> Result<Vec<RecordView>, ApplicationError> {
        let log = self.store.snapshot().await?;
        let now = self.clock.now();
        Ok(log
            .active_records()
            .iter()
            .map(|record| RecordView::from_record(record, &now))
            .collect())
    }

    /// Most recently completed first; `limit` falls back to the configured one.
    pub async fn completed_records(
        &self,
        limit: Option<usize>,
    ) -> Result<Vec<RecordView>, ApplicationError> {
        let log = self.store.snapshot().await?;
        let now = self.clock.now();
        Ok(log
            .completed_records(limit.unwrap_or(self.recent_completed_limit))
            .iter()
            .map(|record| RecordView::from_record(record, &now))
            .collect())
    }
}
