//! Text layout helpers and wall-clock formatting.

use crate::model::Millis;
use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

const ELLIPSIS: char = '…';

/// Break `text` into lines no wider than `max_width`.
///
/// Words are never split; a single word wider than the limit gets a line of
/// its own.
pub fn wrap_lines(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if line.is_empty() {
            line.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", line, word);
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut line, word.to_string()));
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Shorten `text` with a trailing ellipsis until it fits `max_width`.
pub fn clip_to_width(text: &str, max_width: f64, measure: impl Fn(&str) -> f64) -> String {
    if measure(text) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let clipped: String = chars.iter().chain(std::iter::once(&ELLIPSIS)).collect();
        if measure(&clipped) <= max_width {
            return clipped;
        }
    }
    String::new()
}

/// Formats timestamps in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeFormat {
    offset: FixedOffset,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self::local()
    }
}

impl TimeFormat {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// The host's current local offset.
    pub fn local() -> Self {
        Self::new(Local::now().offset().fix())
    }

    /// A configured offset in minutes east of UTC, or the local offset.
    pub fn from_minutes(minutes: Option<i32>) -> Self {
        minutes
            .and_then(|m| FixedOffset::east_opt(m * 60))
            .map(Self::new)
            .unwrap_or_else(Self::local)
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn at(&self, time: Millis) -> Option<DateTime<FixedOffset>> {
        DateTime::from_timestamp_millis(time).map(|t| t.with_timezone(&self.offset))
    }

    fn format(&self, time: Millis, pattern: &str) -> String {
        self.at(time)
            .map(|t| t.format(pattern).to_string())
            .unwrap_or_default()
    }

    /// `HH:MM`
    pub fn time(&self, time: Millis) -> String {
        self.format(time, "%H:%M")
    }

    /// Abbreviated weekday, e.g. `Wed`.
    pub fn weekday(&self, time: Millis) -> String {
        self.format(time, "%a")
    }

    /// `HH:MM - HH:MM`
    pub fn time_frame(&self, start: Millis, end: Millis) -> String {
        format!("{} - {}", self.time(start), self.time(end))
    }

    /// Round `time` to the nearest multiple of `step` on the local clock.
    pub fn round_to(&self, time: Millis, step: Millis) -> Millis {
        if step <= 0 {
            return time;
        }
        let shift = self.offset.local_minus_utc() as Millis * 1000;
        let local = time + shift;
        let rounded = (local + step / 2).div_euclid(step) * step;
        rounded - shift
    }
}
