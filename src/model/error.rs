//! Errors raised while loading schedule data.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read schedule file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse schedule: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate channel id: {0}")]
    DuplicateChannel(String),

    #[error("Invalid event '{title}' on channel {channel}: end must be after start")]
    InvalidEvent { channel: String, title: String },

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),
}
