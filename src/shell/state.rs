use crate::modules::maintenance_records::use_cases::edit_record::handler::EditRecordHandler;
use crate::modules::maintenance_records::use_cases::end_call::handler::EndCallHandler;
use crate::modules::maintenance_records::use_cases::start_call::handler::StartCallHandler;
use crate::modules::maintenance_records::use_cases::view_dashboard::handler::DashboardQueries;
use crate::modules::maintenance_records::use_cases::view_timeline::handler::TimelineQueries;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub start_call_handler: Arc<StartCallHandler<InMemoryRecordStore>>,
    pub end_call_handler: Arc<EndCallHandler<InMemoryRecordStore>>,
    pub edit_record_handler: Arc<EditRecordHandler<InMemoryRecordStore>>,
    pub dashboard: Arc<DashboardQueries<InMemoryRecordStore>>,
    pub timeline: Arc<TimelineQueries<InMemoryRecordStore>>,
}

impl AppState {
    /// Wires every handler to the one store instance of the process.
    pub fn new(
        store: Arc<InMemoryRecordStore>,
        clock: Arc<dyn Clock>,
        recent_completed_limit: usize,
    ) -> Self {
        Self {
            start_call_handler: Arc::new(StartCallHandler::new(store.clone())),
            end_call_handler: Arc::new(EndCallHandler::new(store.clone())),
            edit_record_handler: Arc::new(EditRecordHandler::new(store.clone())),
            dashboard: Arc::new(DashboardQueries::new(
                store.clone(),
                clock.clone(),
                recent_completed_limit,
            )),
            timeline: Arc::new(TimelineQueries::new(store, clock.clone())),
            clock,
        }
    }
}
