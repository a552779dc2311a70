//! Focus state and the rules for moving it.
//!
//! Two resolution strategies exist. Moving along a channel picks an event by
//! ordinal and recentres the time-pointer on that event. Moving between
//! channels keeps the time-pointer and picks whichever event on the new
//! channel airs at that time.

use crate::model::{Event, EventKey, GuideData, Millis};

/// The highlighted channel / event pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusState {
    pub channel: usize,
    pub event_position: Option<usize>,
    /// Identity of the focused event at the time it was focused.
    pub event: Option<EventKey>,
}

impl FocusState {
    pub fn on_channel(channel: usize) -> Self {
        Self {
            channel,
            ..Self::default()
        }
    }

    /// Whether `event` is the focused one, compared by identity.
    pub fn is_focused(&self, event: &Event) -> bool {
        self.event
            .as_ref()
            .is_some_and(|key| key.start == event.start && key.channel_id == event.channel_id)
    }

    /// Focus the event at `position` on the current channel.
    ///
    /// Returns the time-pointer to recentre on (`start + 1`), or `None` when
    /// the ordinal does not resolve.
    pub fn focus_event_at(&mut self, data: &GuideData, position: usize) -> Option<Millis> {
        let event = data.event(self.channel, position)?;
        self.event_position = Some(position);
        self.event = Some(event.key());
        Some(event.start + 1)
    }

    /// Focus whatever airs on the current channel at `time_pointer`.
    pub fn focus_event_at_time(&mut self, data: &GuideData, time_pointer: Millis) {
        match data.event_at(self.channel, time_pointer) {
            Some((position, event)) => {
                self.event_position = Some(position);
                self.event = Some(event.key());
            }
            None => {
                self.event_position = None;
                self.event = None;
            }
        }
    }
}

/// Step a channel ordinal by `step`, wrapping at both ends.
pub fn wrap_channel(current: usize, step: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    (current as isize + step).rem_euclid(count as isize) as usize
}

/// Step an event ordinal by `step`, clamped to the channel's events.
///
/// With no current ordinal, `first_after` (the first event starting after the
/// time-pointer) is the base: stepping forward lands on it, stepping back on
/// the one before.
pub fn step_event_position(
    current: Option<usize>,
    step: isize,
    event_count: usize,
    first_after: usize,
) -> Option<usize> {
    let last = event_count.checked_sub(1)? as isize;
    let target = match current {
        Some(position) => position as isize + step,
        None if step > 0 => first_after as isize,
        None => first_after as isize - 1,
    };
    Some(target.clamp(0, last) as usize)
}
