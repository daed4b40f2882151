// Port over the maintenance log.
//
// The log itself is synchronous. The port lets the async adapter layer share
// the single process-wide log and lets tests swap in a failing backend.

pub mod in_memory;

use crate::modules::maintenance_records::core::commands::{ApplyOutcome, RecordCommand};
use crate::modules::maintenance_records::core::decision::{DecideError, Decision};
use crate::modules::maintenance_records::core::record::MaintenanceRecord;
use crate::modules::maintenance_records::core::state::MaintenanceLog;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result of deciding against the log and applying the accepted command.
#[derive(Debug)]
pub enum Transition {
    Applied {
        record: MaintenanceRecord,
        outcome: ApplyOutcome,
    },
    Rejected {
        reason: DecideError,
    },
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn apply(&self, command: RecordCommand) -> Result<ApplyOutcome, RecordStoreError>;

    /// Copy of the log as it is right now. Derived views are computed from it.
    async fn snapshot(&self) -> Result<MaintenanceLog, RecordStoreError>;

    /// Runs `decide` against the current log and applies an accepted command
    /// before any other writer can observe or change the log.
    async fn decide_and_apply<F>(&self, decide: F) -> Result<Transition, RecordStoreError>
    where
        F: FnOnce(&MaintenanceLog) -> Decision + Send + 'static;
}
