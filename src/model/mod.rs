//! # Model Module
//!
//! The shared channel / event / recording store the guide reads from.
//!
//! ## Overview
//!
//! [`GuideData`] is owned by the host and handed to the guide by reference.
//! Channels (with their events) are replaced wholesale whenever fresh schedule
//! data arrives; recordings are only ever replaced with a list returned by the
//! recording backend.
//!
//! All lookups by ordinal or timestamp return `Option` so callers never index
//! past the end of a not-yet-loaded schedule.

pub mod demo;
mod error;
mod schedule;
mod types;

pub use error::DataError;
pub use schedule::{load_schedule, parse_schedule};
pub use types::{Channel, Event, EventKey, Millis, Recording, RecordingStatus};

use std::collections::HashMap;

/// Channel, event and recording store.
#[derive(Debug, Clone, Default)]
pub struct GuideData {
    channels: Vec<Channel>,
    recordings: HashMap<EventKey, Recording>,
}

impl GuideData {
    pub fn new(channels: Vec<Channel>, recordings: Vec<Recording>) -> Self {
        let mut data = Self::default();
        data.update_channels(channels);
        data.update_recordings(recordings);
        data
    }

    /// Whether any channel data has been loaded yet.
    pub fn has_data(&self) -> bool {
        !self.channels.is_empty()
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, position: usize) -> Option<&Channel> {
        self.channels.get(position)
    }

    /// Events of a channel in ascending start order. Empty for unknown ordinals.
    pub fn events(&self, position: usize) -> &[Event] {
        self.channels
            .get(position)
            .map(|c| c.events.as_slice())
            .unwrap_or(&[])
    }

    pub fn event_count(&self, position: usize) -> usize {
        self.events(position).len()
    }

    pub fn event(&self, channel: usize, event: usize) -> Option<&Event> {
        self.events(channel).get(event)
    }

    /// The event airing on `channel` at `timestamp`, with its ordinal.
    pub fn event_at(&self, channel: usize, timestamp: Millis) -> Option<(usize, &Event)> {
        let events = self.events(channel);
        let idx = events
            .partition_point(|e| e.start <= timestamp)
            .checked_sub(1)?;
        let event = &events[idx];
        event.contains(timestamp).then_some((idx, event))
    }

    /// Ordinal of the first event on `channel` starting after `timestamp`.
    pub fn first_event_after(&self, channel: usize, timestamp: Millis) -> usize {
        self.events(channel).partition_point(|e| e.start <= timestamp)
    }

    /// The active recording for an event, if one exists.
    pub fn recording(&self, event: &Event) -> Option<&Recording> {
        self.recordings
            .get(&event.key())
            .filter(|r| r.status.is_active())
    }

    pub fn has_recording(&self, event: &Event) -> bool {
        self.recording(event).is_some()
    }

    pub fn recordings(&self) -> impl Iterator<Item = &Recording> {
        self.recordings.values()
    }

    /// Replace the recordings with an authoritative list from the backend.
    pub fn update_recordings(&mut self, recordings: Vec<Recording>) {
        self.recordings = recordings.into_iter().map(|r| (r.key(), r)).collect();
        tracing::debug!(count = self.recordings.len(), "Recordings updated");
    }

    /// Replace all channels, renumbering positions and ordering events by start.
    pub fn update_channels(&mut self, mut channels: Vec<Channel>) {
        for (position, channel) in channels.iter_mut().enumerate() {
            channel.position = position;
            channel.events.sort_by_key(|e| e.start);
        }
        self.channels = channels;
        tracing::debug!(count = self.channels.len(), "Channels updated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(channel: &str, start: Millis, end: Millis) -> Event {
        Event {
            channel_id: channel.to_string(),
            start,
            end,
            title: format!("{}-{}", channel, start),
            subtitle: None,
            description: None,
        }
    }

    fn channel(id: &str, events: Vec<Event>) -> Channel {
        Channel {
            position: 0,
            id: id.to_string(),
            name: id.to_uppercase(),
            logo: None,
            events,
        }
    }

    fn sample() -> GuideData {
        GuideData::new(
            vec![
                channel("a", vec![event("a", 200, 300), event("a", 100, 200)]),
                channel("b", vec![event("b", 0, 1000)]),
            ],
            vec![],
        )
    }

    #[test]
    fn test_empty_data() {
        let data = GuideData::default();
        assert!(!data.has_data());
        assert_eq!(data.channel_count(), 0);
        assert!(data.events(0).is_empty());
        assert!(data.event(0, 0).is_none());
        assert!(data.event_at(0, 10).is_none());
    }

    #[test]
    fn test_update_channels_assigns_positions_and_sorts() {
        let data = sample();
        assert!(data.has_data());
        assert_eq!(data.channel(1).unwrap().position, 1);
        let starts: Vec<_> = data.events(0).iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![100, 200]);
    }

    #[test]
    fn test_out_of_range_lookups_are_none() {
        let data = sample();
        assert!(data.channel(5).is_none());
        assert!(data.event(0, 2).is_none());
        assert!(data.event(9, 0).is_none());
        assert_eq!(data.event_count(9), 0);
    }

    #[test]
    fn test_event_at_half_open() {
        let data = sample();
        assert_eq!(data.event_at(0, 100).map(|(i, _)| i), Some(0));
        assert_eq!(data.event_at(0, 199).map(|(i, _)| i), Some(0));
        assert_eq!(data.event_at(0, 200).map(|(i, _)| i), Some(1));
        assert!(data.event_at(0, 300).is_none());
        assert!(data.event_at(0, 50).is_none());
    }

    #[test]
    fn test_first_event_after() {
        let data = sample();
        assert_eq!(data.first_event_after(0, 50), 0);
        assert_eq!(data.first_event_after(0, 150), 1);
        assert_eq!(data.first_event_after(0, 250), 2);
    }

    #[test]
    fn test_recordings_keyed_by_identity() {
        let mut data = sample();
        let target = data.event(0, 1).unwrap().clone();
        data.update_recordings(vec![Recording::scheduled(&target)]);
        assert!(data.has_recording(&target));

        // Same identity, different object.
        let copy = event("a", 200, 300);
        assert!(data.has_recording(&copy));
        assert!(!data.has_recording(data.event(0, 0).unwrap()));
    }

    #[test]
    fn test_inactive_recording_is_not_reported() {
        let mut data = sample();
        let target = data.event(0, 0).unwrap().clone();
        let mut rec = Recording::scheduled(&target);
        rec.status = RecordingStatus::Cancelled;
        data.update_recordings(vec![rec]);
        assert!(data.recording(&target).is_none());
        assert_eq!(data.recordings().count(), 1);
    }

    #[test]
    fn test_update_recordings_replaces() {
        let mut data = sample();
        let first = data.event(0, 0).unwrap().clone();
        let second = data.event(0, 1).unwrap().clone();
        data.update_recordings(vec![Recording::scheduled(&first)]);
        data.update_recordings(vec![Recording::scheduled(&second)]);
        assert!(!data.has_recording(&first));
        assert!(data.has_recording(&second));
    }
}
