use crate::modules::maintenance_records::core::commands::RecordCommand;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Description is required")]
    DescriptionRequired,

    #[error("Location is required")]
    LocationRequired,

    #[error("Technician initials are required")]
    TechnicianRequired,

    #[error("maintenance record {0} already exists")]
    AlreadyExists(String),

    #[error("maintenance record {0} not found")]
    NotFound(String),

    #[error("no active maintenance record to end")]
    NoActiveRecord,

    #[error("maintenance record {0} is already completed")]
    AlreadyCompleted(String),

    #[error("maintenance record {0} is completed and cannot be reopened")]
    ReopenNotPermitted(String),
}

impl DecideError {
    /// Rejections caused by a missing form field, as opposed to the state of the log.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DecideError::DescriptionRequired
                | DecideError::LocationRequired
                | DecideError::TechnicianRequired
        )
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted { command: RecordCommand },
    Rejected { reason: DecideError },
}
