use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::FixedClock;
use crate::tests::fixtures::records::at;
use std::sync::Arc;

pub const TEST_RECENT_COMPLETED_LIMIT: usize = 5;

/// Application state over `store` with the clock frozen at 10:00 on the fixture day.
pub fn make_test_state(store: Arc<InMemoryRecordStore>) -> AppState {
    AppState::new(
        store,
        Arc::new(FixedClock::new(at("10:00"))),
        TEST_RECENT_COMPLETED_LIMIT,
    )
}

pub fn make_empty_state() -> AppState {
    make_test_state(Arc::new(InMemoryRecordStore::new()))
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryRecordStore::new();
    store.toggle_offline();
    make_test_state(Arc::new(store))
}
