//! Record / cancel toggle for the focused event.
//!
//! Resolution happens synchronously against the shared model; the backend
//! call is awaited separately so the host can keep handling input while it is
//! outstanding. The backend's reply replaces the model's recordings wholesale.

use crate::backend::{BackendError, RecordingBackend, RecordingsResult};
use crate::model::{Event, GuideData, Millis, Recording};
use futures::future::BoxFuture;
use std::time::Duration;

/// What a toggle asks the backend to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordingRequest {
    Create(Event),
    Cancel(Recording),
}

impl RecordingRequest {
    pub fn operation(&self) -> &'static str {
        match self {
            RecordingRequest::Create(_) => "create_recording",
            RecordingRequest::Cancel(_) => "cancel_recording",
        }
    }

    pub fn title(&self) -> &str {
        match self {
            RecordingRequest::Create(event) => &event.title,
            RecordingRequest::Cancel(recording) => &recording.title,
        }
    }
}

/// Decide what toggling the event at `(channel, event_position)` means.
///
/// Missing and past-dated events yield `None`.
pub fn resolve_toggle(
    data: &GuideData,
    channel: usize,
    event_position: Option<usize>,
    now: Millis,
) -> Option<RecordingRequest> {
    let event = data.event(channel, event_position?)?;
    if event.is_past_dated(now) {
        tracing::debug!(title = %event.title, "Ignoring toggle on past event");
        return None;
    }
    Some(match data.recording(event) {
        Some(recording) => RecordingRequest::Cancel(recording.clone()),
        None => RecordingRequest::Create(event.clone()),
    })
}

/// Issue `request` against the backend, bounded by `timeout`.
pub async fn execute(
    backend: &dyn RecordingBackend,
    request: RecordingRequest,
    timeout: Duration,
) -> RecordingsResult {
    let operation = request.operation();
    tracing::info!(operation, title = %request.title(), "Recording request");
    let call = match &request {
        RecordingRequest::Create(event) => backend.create_recording(event),
        RecordingRequest::Cancel(recording) => backend.cancel_recording(recording),
    };
    bounded(operation, call, timeout).await
}

/// Fetch the backend's current recordings, bounded by `timeout`.
pub async fn fetch(backend: &dyn RecordingBackend, timeout: Duration) -> RecordingsResult {
    tracing::debug!("Fetching recordings");
    bounded("list_recordings", backend.list_recordings(), timeout).await
}

async fn bounded(
    operation: &'static str,
    call: BoxFuture<'static, RecordingsResult>,
    timeout: Duration,
) -> RecordingsResult {
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(BackendError::Timeout {
            operation: operation.to_string(),
        }),
    }
}

/// Merge a backend reply into the model.
///
/// Returns true when the model changed and the guide needs a repaint. Failures
/// leave the model as it was.
pub fn apply(data: &mut GuideData, result: RecordingsResult) -> bool {
    match result {
        Ok(recordings) => {
            tracing::info!(count = recordings.len(), "Recording request completed");
            data.update_recordings(recordings);
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, retriable = e.is_retriable(), "Recording request failed");
            false
        }
    }
}
