use std::io;

use thiserror::Error;

use crate::types::PathString;

/// Error type for dataset loading, configuration, and artifact failures.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("dataset '{path}' is unavailable: {reason}")]
    DataUnavailable { path: PathString, reason: String },
    #[error("dataset '{path}' is malformed: {details}")]
    DataMalformed { path: PathString, details: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    pub(crate) fn unavailable(path: impl Into<PathString>, reason: impl ToString) -> Self {
        Self::DataUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed(path: impl Into<PathString>, details: impl Into<String>) -> Self {
        Self::DataMalformed {
            path: path.into(),
            details: details.into(),
        }
    }
}
