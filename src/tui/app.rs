//! Application state for the TUI.

use crate::config::Config;
use crate::guide::{wrap_channel, GuideOutcome, GuideView, RecordingRequest};
use crate::guide::recording;
use crate::backend::RecordingsResult;
use crate::model::{Event, GuideData, Millis};
use crate::render::{Image, TimeFormat, Theme};
use std::collections::HashMap;

/// Current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Watching the current channel.
    Live,
    /// Programme guide on top of the live channel.
    Guide,
}

/// Main application state.
pub struct App {
    pub config: Config,
    pub screen: Screen,
    pub data: GuideData,
    /// False until the schedule has arrived.
    pub loaded: bool,
    /// Present while the guide is open.
    pub guide: Option<GuideView>,
    /// Channel being watched.
    pub current_channel: usize,
    pub theme: Theme,
    pub time_format: TimeFormat,
    /// Decoded channel logos, keyed by `Channel::logo`.
    pub images: HashMap<String, Image>,
    /// Recording requests sent and not yet answered.
    pub pending_requests: usize,
    pub should_quit: bool,
    pub last_error: Option<String>,
}

impl App {
    pub fn new(config: Config, data: GuideData) -> Self {
        let theme = config.theme();
        let time_format = TimeFormat::from_minutes(config.tui.utc_offset_minutes);
        Self {
            config,
            screen: Screen::Live,
            data,
            loaded: true,
            guide: None,
            current_channel: 0,
            theme,
            time_format,
            images: HashMap::new(),
            pending_requests: 0,
            should_quit: false,
            last_error: None,
        }
    }

    /// App waiting for its schedule to arrive through [`App::update_data`].
    pub fn loading(config: Config) -> Self {
        Self {
            loaded: false,
            ..Self::new(config, GuideData::default())
        }
    }

    /// Surface size in virtual pixels of an area `cols × rows` cells large.
    pub fn surface_size(&self, cols: u16, rows: u16) -> (f64, f64) {
        (
            cols as f64 * self.config.surface.cell_width,
            rows as f64 * self.config.surface.cell_height,
        )
    }

    /// Mount the guide on the current channel.
    pub fn open_guide(&mut self, width: f64, height: f64, now: Millis) {
        let view = GuideView::mount(
            self.config.guide.layout(),
            width,
            height,
            &self.data,
            self.current_channel,
            now,
        );
        self.guide = Some(view);
        self.screen = Screen::Guide;
    }

    pub fn close_guide(&mut self) {
        if let Some(mut view) = self.guide.take() {
            view.unmount();
        }
        self.screen = Screen::Live;
    }

    /// Feed a remote-control code to the open guide.
    ///
    /// Returns the recording request to send to the backend, if any.
    pub fn handle_guide_key(&mut self, code: u32, now: Millis) -> Option<RecordingRequest> {
        let view = self.guide.as_mut()?;
        match view.handle_key_code(code, &self.data, now) {
            GuideOutcome::Ignored | GuideOutcome::Handled => None,
            GuideOutcome::Dismiss { select_channel } => {
                if let Some(channel) = select_channel {
                    tracing::info!(channel, "Channel selected from guide");
                    self.current_channel = channel;
                }
                self.close_guide();
                None
            }
            GuideOutcome::Record(request) => {
                self.pending_requests += 1;
                Some(request)
            }
        }
    }

    /// Merge the reply to a create or cancel request.
    pub fn apply_recording_result(&mut self, result: RecordingsResult) {
        self.pending_requests = self.pending_requests.saturating_sub(1);
        self.sync_recordings(result);
    }

    /// Merge a recordings list from the backend. Failures are kept for the
    /// status line.
    pub fn sync_recordings(&mut self, result: RecordingsResult) {
        if let Err(e) = &result {
            self.set_error(e.display_message());
        }
        if recording::apply(&mut self.data, result) {
            if let Some(view) = self.guide.as_mut() {
                view.request_redraw();
            }
        }
    }

    /// Switch the live channel, wrapping around.
    pub fn zap(&mut self, step: isize) {
        self.current_channel = wrap_channel(self.current_channel, step, self.data.channel_count());
    }

    /// Replace the schedule, keeping the guide's focus where possible.
    pub fn update_data(&mut self, data: GuideData, now: Millis) {
        tracing::info!(channels = data.channel_count(), "Schedule updated");
        self.data = data;
        self.loaded = true;
        self.current_channel = self
            .current_channel
            .min(self.data.channel_count().saturating_sub(1));
        if let Some(view) = self.guide.as_mut() {
            view.on_data_changed(&self.data, now);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64, now: Millis) {
        if let Some(view) = self.guide.as_mut() {
            view.resize(width, height, &self.data, now);
        }
    }

    pub fn refresh_clock(&mut self, now: Millis) {
        if let Some(view) = self.guide.as_mut() {
            view.refresh_clock(now);
        }
    }

    /// Advance the scroll animation. True when a repaint is needed.
    pub fn on_frame(&mut self) -> bool {
        self.guide.as_mut().is_some_and(|view| view.on_frame())
    }

    /// Whether the guide has a pending repaint; clears it.
    pub fn take_redraw(&mut self) -> bool {
        self.guide.as_mut().is_some_and(|view| view.take_redraw())
    }

    /// The event airing now on the current channel.
    pub fn current_event(&self, now: Millis) -> Option<&Event> {
        self.data
            .event_at(self.current_channel, now)
            .map(|(_, event)| event)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_error(&mut self, message: String) {
        self.last_error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }
}
