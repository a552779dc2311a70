//! Unified error type for recording backend operations.

use std::fmt;

/// Error returned by a [`RecordingBackend`](super::RecordingBackend).
#[derive(Debug)]
pub enum BackendError {
    /// The backend could not be reached.
    Unavailable {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The backend refused the request.
    Rejected { operation: String, message: String },

    /// No recording exists for the requested event.
    NotFound { title: String },

    /// The request did not complete in time.
    Timeout { operation: String },
}

impl BackendError {
    /// Returns true if this error might be recoverable via retry.
    pub fn is_retriable(&self) -> bool {
        match self {
            BackendError::Unavailable { .. } => true,
            BackendError::Timeout { .. } => true,
            BackendError::Rejected { .. } => false,
            BackendError::NotFound { .. } => false,
        }
    }

    /// Returns a human-readable error message suitable for display.
    pub fn display_message(&self) -> String {
        match self {
            BackendError::Unavailable { endpoint, .. } => {
                format!("Recording service unavailable at {}", endpoint)
            }
            BackendError::Rejected { operation, message } => {
                format!("{} rejected: {}", operation, message)
            }
            BackendError::NotFound { title } => {
                format!("No recording found for {}", title)
            }
            BackendError::Timeout { operation } => {
                format!("Operation timed out: {}", operation)
            }
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BackendError::Unavailable { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
