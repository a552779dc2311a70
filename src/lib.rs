//! # epgrid
//!
//! A programme guide for the terminal: channels down the side, time across
//! the top, one block per broadcast.
//!
//! ## Overview
//!
//! epgrid lays a schedule out on a time × channel grid, keeps the focused
//! programme in view while the user moves through it, and toggles recordings
//! against a scheduling backend. The guide logic works in virtual pixels and
//! paints through a [`render::Canvas`], which the TUI rasterises to
//! half-block terminal cells.
//!
//! ## Modules
//!
//! - [`model`] - Channels, events, recordings and schedule loading
//! - [`guide`] - Time mapping, viewport, focus navigation and scroll animation
//! - [`render`] - Grid renderer, canvas abstraction and themes
//! - [`backend`] - Recording backend interface and the in-memory backend
//! - [`tui`] - Terminal user interface
//! - [`cli`] - Command-line interface commands
//! - [`config`] - Configuration loading and validation

pub mod backend;
pub mod cli;
pub mod config;
pub mod guide;
pub mod logging;
pub mod model;
pub mod render;
pub mod tui;

// Re-export commonly used types
pub use config::Config;
pub use guide::{GuideLayout, GuideView};
pub use model::GuideData;
