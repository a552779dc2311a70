//! # Backend Module
//!
//! The recording scheduler the guide talks to when the user toggles a
//! recording.
//!
//! ## Overview
//!
//! [`RecordingBackend`] is the seam between the guide and whatever schedules
//! recordings. Every call resolves to the backend's complete, authoritative
//! list of recordings, which the caller merges into the shared model.
//!
//! [`MemoryBackend`] keeps recordings in process. It can simulate network
//! latency and be told to fail the next request.

mod error;

pub use error::BackendError;

use crate::model::{Event, EventKey, Recording, RecordingStatus};
use futures::future::{BoxFuture, FutureExt};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Result of every backend call: the full list of recordings.
pub type RecordingsResult = Result<Vec<Recording>, BackendError>;

/// Asynchronous recording scheduler.
pub trait RecordingBackend: Send + Sync {
    /// Schedule a recording for `event`.
    fn create_recording(&self, event: &Event) -> BoxFuture<'static, RecordingsResult>;

    /// Cancel an existing recording.
    fn cancel_recording(&self, recording: &Recording) -> BoxFuture<'static, RecordingsResult>;

    /// Fetch all known recordings.
    fn list_recordings(&self) -> BoxFuture<'static, RecordingsResult>;
}

#[derive(Debug, Default)]
struct MemoryState {
    recordings: BTreeMap<EventKey, Recording>,
    fail_next: Option<String>,
}

impl MemoryState {
    fn take_failure(&mut self, operation: &str) -> Result<(), BackendError> {
        match self.fail_next.take() {
            Some(message) => Err(BackendError::Rejected {
                operation: operation.to_string(),
                message,
            }),
            None => Ok(()),
        }
    }

    fn snapshot(&self) -> Vec<Recording> {
        self.recordings.values().cloned().collect()
    }
}

/// In-process recording backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
    latency: Duration,
}

impl MemoryBackend {
    pub fn new(latency: Duration) -> Self {
        Self {
            state: Arc::default(),
            latency,
        }
    }

    /// Replace the stored recordings, e.g. with those read from a schedule
    /// file at startup.
    pub async fn restore(&self, recordings: impl IntoIterator<Item = Recording>) {
        let mut state = self.state.lock().await;
        state.recordings = recordings.into_iter().map(|r| (r.key(), r)).collect();
        tracing::debug!(count = state.recordings.len(), "Recordings restored");
    }

    /// Make the next request fail with `message`.
    pub async fn fail_next(&self, message: impl Into<String>) {
        self.state.lock().await.fail_next = Some(message.into());
    }

    async fn delay(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl RecordingBackend for MemoryBackend {
    fn create_recording(&self, event: &Event) -> BoxFuture<'static, RecordingsResult> {
        let state = Arc::clone(&self.state);
        let latency = self.latency;
        let recording = Recording::scheduled(event);
        async move {
            Self::delay(latency).await;
            let mut state = state.lock().await;
            state.take_failure("create_recording")?;
            tracing::debug!(title = %recording.title, start = recording.start, "Recording created");
            state.recordings.insert(recording.key(), recording);
            Ok(state.snapshot())
        }
        .boxed()
    }

    fn cancel_recording(&self, recording: &Recording) -> BoxFuture<'static, RecordingsResult> {
        let state = Arc::clone(&self.state);
        let latency = self.latency;
        let key = recording.key();
        let title = recording.title.clone();
        async move {
            Self::delay(latency).await;
            let mut state = state.lock().await;
            state.take_failure("cancel_recording")?;
            match state.recordings.remove(&key) {
                Some(_) => {
                    tracing::debug!(title = %title, start = key.start, "Recording cancelled");
                    Ok(state.snapshot())
                }
                None => Err(BackendError::NotFound { title }),
            }
        }
        .boxed()
    }

    fn list_recordings(&self) -> BoxFuture<'static, RecordingsResult> {
        let state = Arc::clone(&self.state);
        let latency = self.latency;
        async move {
            Self::delay(latency).await;
            let mut state = state.lock().await;
            state.take_failure("list_recordings")?;
            Ok(state
                .recordings
                .values()
                .filter(|r| r.status != RecordingStatus::Cancelled)
                .cloned()
                .collect())
        }
        .boxed()
    }
}
