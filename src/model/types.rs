//! Domain types for guide data.
//!
//! These types are independent of the schedule file format so the loader can
//! change without touching the guide.

use serde::{Deserialize, Serialize};

/// Milliseconds since the Unix epoch.
pub type Millis = i64;

/// A broadcast channel and its ordered schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Channel {
    /// Ordinal position in the guide (0-based).
    pub position: usize,

    /// Stable channel identifier.
    pub id: String,

    /// Human-readable channel name.
    pub name: String,

    /// Image cache key of the channel logo.
    pub logo: Option<String>,

    /// Events in ascending start order.
    #[serde(skip)]
    pub events: Vec<Event>,
}

/// A scheduled programme on a channel.
///
/// The interval is half-open: an event covers `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Owning channel id.
    pub channel_id: String,

    /// Start time (ms since epoch).
    pub start: Millis,

    /// End time (ms since epoch).
    pub end: Millis,

    /// Programme title.
    pub title: String,

    /// Episode or secondary title.
    pub subtitle: Option<String>,

    /// Long-form description.
    pub description: Option<String>,
}

impl Event {
    /// Stable identity that survives data refreshes.
    pub fn key(&self) -> EventKey {
        EventKey {
            channel_id: self.channel_id.clone(),
            start: self.start,
        }
    }

    pub fn contains(&self, timestamp: Millis) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// Whether the event is airing at `now`.
    pub fn is_current(&self, now: Millis) -> bool {
        self.contains(now)
    }

    /// Whether the event ended before `now`.
    pub fn is_past_dated(&self, now: Millis) -> bool {
        self.end < now
    }
}

/// Identity of an event: its channel plus its start time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventKey {
    pub channel_id: String,
    pub start: Millis,
}

/// A recording entry held by the scheduling backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub channel_id: String,
    pub start: Millis,
    pub end: Millis,
    pub title: String,
    pub status: RecordingStatus,
}

impl Recording {
    /// A freshly scheduled recording for `event`.
    pub fn scheduled(event: &Event) -> Self {
        Self {
            channel_id: event.channel_id.clone(),
            start: event.start,
            end: event.end,
            title: event.title.clone(),
            status: RecordingStatus::Scheduled,
        }
    }

    pub fn key(&self) -> EventKey {
        EventKey {
            channel_id: self.channel_id.clone(),
            start: self.start,
        }
    }
}

/// Backend state of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordingStatus {
    /// Waiting for the event to start.
    #[default]
    Scheduled,

    /// Currently capturing.
    Recording,

    /// Finished successfully.
    Completed,

    /// Cancelled by the user.
    Cancelled,

    /// Capture failed.
    Failed,
}

impl RecordingStatus {
    /// Active recordings are the ones the guide marks on event blocks.
    pub fn is_active(&self) -> bool {
        matches!(self, RecordingStatus::Scheduled | RecordingStatus::Recording)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordingStatus::Scheduled => "Scheduled",
            RecordingStatus::Recording => "Recording",
            RecordingStatus::Completed => "Completed",
            RecordingStatus::Cancelled => "Cancelled",
            RecordingStatus::Failed => "Failed",
        }
    }
}
