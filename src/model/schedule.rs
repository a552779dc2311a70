//! JSON schedule file loading.
//!
//! ```json
//! {
//!   "channels": [
//!     { "id": "bbc1", "name": "BBC One", "logo": "bbc1.png",
//!       "events": [
//!         { "start": "2024-05-01T18:00:00Z", "end": "2024-05-01T18:30:00Z",
//!           "title": "News", "subtitle": null, "description": "..." }
//!       ] }
//!   ],
//!   "recordings": [
//!     { "channel_id": "bbc1", "start": "2024-05-01T18:00:00Z",
//!       "end": "2024-05-01T18:30:00Z", "title": "News", "status": "scheduled" }
//!   ]
//! }
//! ```

use super::{Channel, DataError, Event, GuideData, Recording, RecordingStatus};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct ScheduleFile {
    channels: Vec<ScheduleChannel>,
    #[serde(default)]
    recordings: Vec<ScheduleRecording>,
}

#[derive(Debug, Deserialize)]
struct ScheduleChannel {
    id: String,
    name: String,
    logo: Option<String>,
    #[serde(default)]
    events: Vec<ScheduleEvent>,
}

#[derive(Debug, Deserialize)]
struct ScheduleEvent {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    title: String,
    subtitle: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScheduleRecording {
    channel_id: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    title: String,
    #[serde(default)]
    status: RecordingStatus,
}

/// Load a schedule from a JSON file.
pub fn load_schedule(path: &Path) -> Result<GuideData, DataError> {
    tracing::debug!(path = %path.display(), "Loading schedule file");
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_schedule(&content)
}

/// Parse a schedule from JSON text.
pub fn parse_schedule(content: &str) -> Result<GuideData, DataError> {
    let file: ScheduleFile = serde_json::from_str(content)?;

    let mut seen = HashSet::new();
    let mut channels = Vec::with_capacity(file.channels.len());
    for ch in file.channels {
        if !seen.insert(ch.id.clone()) {
            return Err(DataError::DuplicateChannel(ch.id));
        }

        let events = ch
            .events
            .into_iter()
            .map(|e| {
                if e.end <= e.start {
                    return Err(DataError::InvalidEvent {
                        channel: ch.id.clone(),
                        title: e.title,
                    });
                }
                Ok(Event {
                    channel_id: ch.id.clone(),
                    start: e.start.timestamp_millis(),
                    end: e.end.timestamp_millis(),
                    title: e.title,
                    subtitle: e.subtitle,
                    description: e.description,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        channels.push(Channel {
            position: 0,
            id: ch.id,
            name: ch.name,
            logo: ch.logo,
            events,
        });
    }

    let recordings = file
        .recordings
        .into_iter()
        .map(|r| Recording {
            channel_id: r.channel_id,
            start: r.start.timestamp_millis(),
            end: r.end.timestamp_millis(),
            title: r.title,
            status: r.status,
        })
        .collect();

    let data = GuideData::new(channels, recordings);
    tracing::info!(channels = data.channel_count(), "Schedule loaded");
    Ok(data)
}
