//! # Guide Module
//!
//! The time × channel program guide: geometry, coordinate mapping, scrolling,
//! focus navigation and the recording toggle.
//!
//! ## Overview
//!
//! The entry point is [`GuideView`], created when the guide is mounted and
//! dropped when it is dismissed. It turns remote-control key codes into state
//! transitions and reports what the host has to do next as a [`GuideOutcome`].
//! Rendering reads the view and the shared [`GuideData`](crate::model::GuideData)
//! but never mutates either.
//!
//! ## Architecture
//!
//! ```text
//! GuideView
//!   ├── Viewport        scroll offsets, visible time window, row culling
//!   │     └── TimeMapper  time/ordinal to pixel conversions
//!   ├── FocusState      focused channel and event
//!   └── ScrollAnimator  frame-stepped vertical tween
//! ```
//!
//! Recording toggles are resolved here and executed by the host against a
//! [`RecordingBackend`](crate::backend::RecordingBackend) via [`recording`].

mod animator;
mod focus;
mod input;
mod layout;
mod mapper;
pub mod recording;
mod view;
mod viewport;

pub use animator::{ScrollAnimator, Step};
pub use focus::{step_event_position, wrap_channel, FocusState};
pub use input::{
    GuideInput, KEY_B, KEY_BACK, KEY_BLUE, KEY_DOWN, KEY_ENTER, KEY_LEFT, KEY_RED, KEY_RIGHT,
    KEY_UP,
};
pub use layout::{GuideLayout, HOUR, MINUTE};
pub use mapper::{TimeMapper, ViewportState};
pub use recording::RecordingRequest;
pub use view::{GuideOutcome, GuideView};
pub use viewport::{ChannelRange, Viewport};
