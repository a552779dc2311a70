//! Time ↔ pixel and channel ↔ pixel conversions.
//!
//! Everything here is a pure function of the [`GuideLayout`] and the current
//! [`ViewportState`]; the viewport controller owns the state and hands out a
//! [`TimeMapper`] borrowing both.

use super::layout::GuideLayout;
use crate::model::Millis;

/// Scroll offsets, scale and visible time window of the guide.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Surface width in virtual pixels.
    pub width: f64,
    /// Surface height in virtual pixels.
    pub height: f64,
    /// Horizontal scroll. Pinned to zero; kept so the mapping stays general.
    pub scroll_x: f64,
    /// Vertical scroll in `[0, max_vertical_scroll]`.
    pub scroll_y: f64,
    pub millis_per_pixel: f64,
    /// Time at pixel 0 of the time axis.
    pub baseline: Millis,
    pub lower_boundary: Millis,
    pub upper_boundary: Millis,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
            millis_per_pixel: 1.0,
            baseline: 0,
            lower_boundary: 0,
            upper_boundary: 0,
        }
    }
}

/// Coordinate conversions for one viewport state.
#[derive(Debug, Clone, Copy)]
pub struct TimeMapper<'a> {
    layout: &'a GuideLayout,
    state: &'a ViewportState,
}

impl<'a> TimeMapper<'a> {
    pub fn new(layout: &'a GuideLayout, state: &'a ViewportState) -> Self {
        Self { layout, state }
    }

    /// Scale for a surface of `width` pixels. The event area is never treated
    /// as narrower than one pixel.
    pub fn millis_per_pixel(layout: &GuideLayout, width: f64) -> f64 {
        let event_width = (width - layout.column_width - layout.margin).max(1.0);
        layout.visible_window as f64 / event_width
    }

    /// Time at pixel 0 for a given wall-clock time.
    pub fn baseline(layout: &GuideLayout, now: Millis) -> Millis {
        now - layout.look_back
    }

    pub fn time_at(&self, x: f64) -> Millis {
        (x * self.state.millis_per_pixel).round() as Millis + self.state.baseline
    }

    /// Offset of `time` from the lower boundary, in pixels.
    pub fn grid_x(&self, time: Millis) -> f64 {
        ((time - self.state.lower_boundary) as f64 / self.state.millis_per_pixel).floor()
    }

    /// Surface x of `time`, accounting for the channel column.
    pub fn x_at(&self, time: Millis) -> f64 {
        self.grid_x(time) + self.layout.column_width + 2.0 * self.layout.margin
    }

    /// Top of a channel row with no scroll applied.
    pub fn content_y(&self, ordinal: usize) -> f64 {
        ordinal as f64 * self.layout.row_stride() + self.layout.margin + self.layout.timebar_height
    }

    /// Surface y of the top of a channel row.
    pub fn y_at(&self, ordinal: usize) -> f64 {
        self.content_y(ordinal) - self.state.scroll_y
    }

    pub fn max_horizontal_scroll(&self) -> f64 {
        let span = self.layout.look_back + self.layout.look_forward - self.layout.visible_window;
        (span as f64 / self.state.millis_per_pixel).floor()
    }

    pub fn max_vertical_scroll(&self, channel_count: usize) -> f64 {
        let Some(last) = channel_count.checked_sub(1) else {
            return 0.0;
        };
        let bottom = self.content_y(last) + self.layout.row_height;
        (bottom - self.layout.channel_list_height()).max(0.0)
    }
}
