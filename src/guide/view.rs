//! The mounted guide: viewport, focus, time-pointer and scroll animation.
//!
//! A [`GuideView`] lives from mount to unmount. Input handlers mutate it and
//! set a dirty flag; the host repaints once per handled transition by
//! checking [`GuideView::take_redraw`].

use super::animator::{ScrollAnimator, Step};
use super::focus::{self, FocusState};
use super::input::GuideInput;
use super::layout::GuideLayout;
use super::recording::{self, RecordingRequest};
use super::viewport::Viewport;
use crate::model::{GuideData, Millis};

/// What the host has to do after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuideOutcome {
    /// The input is not a guide input.
    Ignored,
    /// Guide state was updated (or deliberately left alone).
    Handled,
    /// Close the guide, optionally switching the live channel first.
    Dismiss { select_channel: Option<usize> },
    /// Send a recording request to the backend.
    Record(RecordingRequest),
}

#[derive(Debug, Clone)]
pub struct GuideView {
    viewport: Viewport,
    animator: ScrollAnimator,
    focus: FocusState,
    time_pointer: Millis,
    dirty: bool,
    mounted: bool,
}

impl GuideView {
    /// Mount the guide focused on `channel` at `now`.
    pub fn mount(
        layout: GuideLayout,
        width: f64,
        height: f64,
        data: &GuideData,
        channel: usize,
        now: Millis,
    ) -> Self {
        let channel = channel.min(data.channel_count().saturating_sub(1));
        let mut view = Self {
            viewport: Viewport::new(layout, width, height),
            animator: ScrollAnimator::new(),
            focus: FocusState::on_channel(channel),
            time_pointer: now,
            dirty: true,
            mounted: true,
        };
        view.recalculate(data, now);
        view.focus.focus_event_at_time(data, now);
        tracing::debug!(channel, event = ?view.focus.event_position, "Guide mounted");
        view
    }

    /// Stop any animation. The view must not be stepped afterwards.
    pub fn unmount(&mut self) {
        self.animator.cancel();
        self.mounted = false;
        tracing::debug!("Guide unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layout(&self) -> &GuideLayout {
        self.viewport.layout()
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    /// The user-controlled point in time the guide is centred on.
    pub fn time_pointer(&self) -> Millis {
        self.time_pointer
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }

    /// Consume the dirty flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Recompute boundaries and scroll limits, then re-place the focused row.
    fn recalculate(&mut self, data: &GuideData, now: Millis) {
        if !data.has_data() {
            return;
        }
        self.viewport.reset_boundaries(now);
        self.viewport.update_scroll_limits(data.channel_count());
        self.scroll_to_channel(self.focus.channel, false, data.channel_count());
    }

    /// Channel or event data was replaced.
    pub fn on_data_changed(&mut self, data: &GuideData, now: Millis) {
        let count = data.channel_count();
        if count == 0 {
            self.focus = FocusState::on_channel(0);
            self.dirty = true;
            return;
        }
        self.focus.channel = self.focus.channel.min(count - 1);

        let same = self.focus.event.as_ref().and_then(|key| {
            data.events(self.focus.channel)
                .iter()
                .position(|e| e.start == key.start && e.channel_id == key.channel_id)
        });
        match same {
            Some(position) => self.focus.event_position = Some(position),
            None => self.focus.focus_event_at_time(data, self.time_pointer),
        }

        self.recalculate(data, now);
        self.dirty = true;
    }

    pub fn resize(&mut self, width: f64, height: f64, data: &GuideData, now: Millis) {
        self.viewport.resize(width, height);
        self.animator.cancel();
        self.recalculate(data, now);
        self.dirty = true;
    }

    /// Slide the time window forward with the wall clock.
    pub fn refresh_clock(&mut self, now: Millis) {
        self.viewport.reset_boundaries(now);
        self.dirty = true;
    }

    pub fn handle_key_code(&mut self, code: u32, data: &GuideData, now: Millis) -> GuideOutcome {
        match GuideInput::from_key_code(code) {
            Some(input) => self.handle_input(input, data, now),
            None => {
                tracing::trace!(code, "Unhandled guide key");
                GuideOutcome::Ignored
            }
        }
    }

    pub fn handle_input(&mut self, input: GuideInput, data: &GuideData, now: Millis) -> GuideOutcome {
        tracing::debug!(?input, channel = self.focus.channel, "Guide input");
        match input {
            GuideInput::NextEvent => self.move_event(1, data, now),
            GuideInput::PreviousEvent => self.move_event(-1, data, now),
            GuideInput::ChannelDown => self.move_channel(1, data, now),
            GuideInput::ChannelUp => self.move_channel(-1, data, now),
            GuideInput::ToggleRecording => {
                match recording::resolve_toggle(data, self.focus.channel, self.focus.event_position, now)
                {
                    Some(request) => GuideOutcome::Record(request),
                    None => GuideOutcome::Handled,
                }
            }
            GuideInput::Activate => GuideOutcome::Dismiss {
                select_channel: data.has_data().then_some(self.focus.channel),
            },
            GuideInput::Dismiss => GuideOutcome::Dismiss {
                select_channel: None,
            },
        }
    }

    fn move_event(&mut self, step: isize, data: &GuideData, now: Millis) -> GuideOutcome {
        let channel = self.focus.channel;
        let position = focus::step_event_position(
            self.focus.event_position,
            step,
            data.event_count(channel),
            data.first_event_after(channel, self.time_pointer),
        );
        if let Some(time) = position.and_then(|p| self.focus.focus_event_at(data, p)) {
            self.time_pointer = time;
            self.viewport.reset_boundaries(now);
            self.dirty = true;
        }
        GuideOutcome::Handled
    }

    fn move_channel(&mut self, step: isize, data: &GuideData, now: Millis) -> GuideOutcome {
        let count = data.channel_count();
        if count == 0 {
            return GuideOutcome::Handled;
        }
        let channel = focus::wrap_channel(self.focus.channel, step, count);
        self.focus.channel = channel;
        self.viewport.reset_boundaries(now);
        self.scroll_to_channel(channel, true, count);
        self.focus.focus_event_at_time(data, self.time_pointer);
        self.dirty = true;
        GuideOutcome::Handled
    }

    /// Bring `target` into view, keeping it away from the list edges.
    pub fn scroll_to_channel(&mut self, target: usize, animate: bool, channel_count: usize) {
        let layout = self.viewport.layout();
        let padding = layout.scroll_padding_rows();
        let stride = layout.row_stride();
        let steps = layout.row_height / 5.0;
        self.dirty = true;

        if target < padding {
            self.animator.cancel();
            self.viewport.set_scroll_y(0.0);
            return;
        }

        let bottom_zone = channel_count as isize - 1 - padding as isize;
        if target as isize >= bottom_zone {
            if self.viewport.scroll_y() == 0.0 {
                self.animator.cancel();
                self.viewport.set_scroll_y(self.viewport.max_vertical_scroll());
            }
            return;
        }

        let scroll_target =
            (stride * (target - padding) as f64).min(self.viewport.max_vertical_scroll());
        if animate {
            self.animator.start(self.viewport.scroll_y(), scroll_target, steps);
        } else {
            self.animator.cancel();
            self.viewport.set_scroll_y(scroll_target);
        }
    }

    /// Advance the scroll animation by one frame. Returns true if scroll moved.
    pub fn on_frame(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        match self.animator.step(self.viewport.scroll_y()) {
            Step::Idle => false,
            Step::Moved(y) | Step::Finished(y) => {
                self.viewport.set_scroll_y(y);
                self.dirty = true;
                true
            }
        }
    }
}
