use crate::modules::maintenance_records::core::decision::DecideError;
use crate::shared::infrastructure::record_store::RecordStoreError;
use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApplicationError::Domain(reason) if reason.is_validation() => StatusCode::BAD_REQUEST,
            ApplicationError::Domain(DecideError::NotFound(_) | DecideError::NoActiveRecord) => {
                StatusCode::NOT_FOUND
            }
            ApplicationError::Domain(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            return status.into_response();
        }
        let error = match self {
            ApplicationError::Domain(reason) => reason.to_string(),
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
