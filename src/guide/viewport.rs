//! Viewport controller: scroll offsets, visible time window, row culling.

use super::layout::GuideLayout;
use super::mapper::{TimeMapper, ViewportState};
use crate::model::Millis;

/// Inclusive range of channel ordinals intersecting the channel list area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub first: usize,
    pub last: usize,
}

impl ChannelRange {
    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.first..=self.last
    }

    pub fn contains(&self, ordinal: usize) -> bool {
        self.iter().contains(&ordinal)
    }
}

#[derive(Debug, Clone)]
pub struct Viewport {
    layout: GuideLayout,
    state: ViewportState,
    max_vertical_scroll: f64,
}

impl Viewport {
    pub fn new(layout: GuideLayout, width: f64, height: f64) -> Self {
        Self {
            layout,
            state: ViewportState::new(width, height),
            max_vertical_scroll: 0.0,
        }
    }

    pub fn layout(&self) -> &GuideLayout {
        &self.layout
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn mapper(&self) -> TimeMapper<'_> {
        TimeMapper::new(&self.layout, &self.state)
    }

    pub fn width(&self) -> f64 {
        self.state.width
    }

    pub fn height(&self) -> f64 {
        self.state.height
    }

    pub fn scroll_y(&self) -> f64 {
        self.state.scroll_y
    }

    pub fn max_vertical_scroll(&self) -> f64 {
        self.max_vertical_scroll
    }

    pub fn lower_boundary(&self) -> Millis {
        self.state.lower_boundary
    }

    pub fn upper_boundary(&self) -> Millis {
        self.state.upper_boundary
    }

    /// Recompute scale, baseline and the visible time window for `now`.
    pub fn reset_boundaries(&mut self, now: Millis) {
        self.state.millis_per_pixel = TimeMapper::millis_per_pixel(&self.layout, self.state.width);
        self.state.baseline = TimeMapper::baseline(&self.layout, now);
        let (lower, upper) = {
            let mapper = self.mapper();
            (
                mapper.time_at(self.state.scroll_x),
                mapper.time_at(self.state.scroll_x + self.state.width),
            )
        };
        self.state.lower_boundary = lower;
        self.state.upper_boundary = upper;
    }

    /// Recompute the scroll limit for `channel_count` rows and re-clamp.
    pub fn update_scroll_limits(&mut self, channel_count: usize) {
        self.max_vertical_scroll = self.mapper().max_vertical_scroll(channel_count);
        self.set_scroll_y(self.state.scroll_y);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.state.width = width;
        self.state.height = height;
    }

    /// Set the vertical scroll, clamped into `[0, max_vertical_scroll]`.
    pub fn set_scroll_y(&mut self, value: f64) {
        self.state.scroll_y = value.clamp(0.0, self.max_vertical_scroll);
    }

    /// Channel rows intersecting the list area. `None` when there are no channels.
    pub fn visible_channels(&self, channel_count: usize) -> Option<ChannelRange> {
        let last_ordinal = channel_count.checked_sub(1)?;
        let layout = &self.layout;
        let y = self.state.scroll_y;
        let stride = layout.row_stride();

        let first = ((y - layout.margin - layout.timebar_height) / stride).round() + 1.0;
        let end = ((y + layout.channel_list_height() - layout.timebar_height - layout.margin)
            / stride)
            .floor()
            + 1.0;

        let first = (first.max(0.0) as usize).min(last_ordinal);
        let last = ((end - 1.0).max(0.0) as usize).clamp(first, last_ordinal);
        Some(ChannelRange { first, last })
    }

    /// Whether `[start, end]` intersects the visible time window (inclusive).
    pub fn event_visible(&self, start: Millis, end: Millis) -> bool {
        let lower = self.state.lower_boundary;
        let upper = self.state.upper_boundary;
        (start >= lower && start <= upper)
            || (end >= lower && end <= upper)
            || (start <= lower && end >= upper)
    }

    /// Whether the now line falls inside the visible window.
    pub fn shows_time(&self, time: Millis) -> bool {
        time >= self.state.lower_boundary && time < self.state.upper_boundary
    }

    #[cfg(test)]
    pub(crate) fn set_boundaries(&mut self, lower: Millis, upper: Millis) {
        self.state.lower_boundary = lower;
        self.state.upper_boundary = upper;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::layout::HOUR;

    const NOW: Millis = 1_714_586_400_000;

    fn viewport() -> Viewport {
        let mut vp = Viewport::new(GuideLayout::default(), 1923.0, 1080.0);
        vp.reset_boundaries(NOW);
        vp
    }

    #[test]
    fn test_reset_boundaries() {
        let vp = viewport();
        assert_eq!(vp.lower_boundary(), NOW - 2 * HOUR);
        // 1923px at 4000ms/px
        assert_eq!(vp.upper_boundary(), NOW - 2 * HOUR + 1923 * 4000);
    }

    #[test]
    fn test_reset_boundaries_follows_now() {
        let mut vp = viewport();
        vp.reset_boundaries(NOW + HOUR);
        assert_eq!(vp.lower_boundary(), NOW - HOUR);
    }

    #[test]
    fn test_visible_channels_at_top() {
        let mut vp = viewport();
        vp.update_scroll_limits(30);
        assert_eq!(
            vp.visible_channels(30),
            Some(ChannelRange { first: 0, last: 7 })
        );
    }

    #[test]
    fn test_visible_channels_scrolled() {
        let mut vp = viewport();
        vp.update_scroll_limits(30);
        vp.set_scroll_y(78.0);
        assert_eq!(
            vp.visible_channels(30),
            Some(ChannelRange { first: 1, last: 8 })
        );
    }

    #[test]
    fn test_visible_channels_clamped_to_count() {
        let vp = viewport();
        assert_eq!(vp.visible_channels(3), Some(ChannelRange { first: 0, last: 2 }));
        assert_eq!(vp.visible_channels(1), Some(ChannelRange { first: 0, last: 0 }));
        assert_eq!(vp.visible_channels(0), None);
    }

    #[test]
    fn test_visible_channels_invariants_for_any_scroll() {
        let mut vp = viewport();
        for count in [1usize, 2, 7, 8, 9, 40] {
            vp.update_scroll_limits(count);
            let max = vp.max_vertical_scroll() as i64;
            for y in (0..=max).step_by(7) {
                vp.set_scroll_y(y as f64);
                let range = vp.visible_channels(count).unwrap();
                assert!(range.first <= range.last);
                assert!(range.last < count);
            }
        }
    }

    #[test]
    fn test_set_scroll_y_clamps() {
        let mut vp = viewport();
        vp.update_scroll_limits(20);
        vp.set_scroll_y(-10.0);
        assert_eq!(vp.scroll_y(), 0.0);
        vp.set_scroll_y(1.0e9);
        assert_eq!(vp.scroll_y(), vp.max_vertical_scroll());
    }

    #[test]
    fn test_update_scroll_limits_reclamps() {
        let mut vp = viewport();
        vp.update_scroll_limits(40);
        vp.set_scroll_y(2000.0);
        vp.update_scroll_limits(10);
        assert_eq!(vp.scroll_y(), 78.0 * 2.0);
    }

    #[test]
    fn test_event_visible_cases() {
        let mut vp = viewport();
        vp.set_boundaries(150, 250);
        // start inside
        assert!(vp.event_visible(200, 400));
        // end inside
        assert!(vp.event_visible(50, 200));
        // spans the window
        assert!(vp.event_visible(0, 1000));
        // inside entirely
        assert!(vp.event_visible(160, 170));
        // touching endpoints count
        assert!(vp.event_visible(100, 150));
        assert!(vp.event_visible(250, 300));
        // strictly outside
        assert!(!vp.event_visible(0, 149));
        assert!(!vp.event_visible(251, 400));
    }

    #[test]
    fn test_event_visible_adjacent_events_scenario() {
        let mut vp = viewport();
        vp.set_boundaries(150, 250);
        assert!(vp.event_visible(100, 200));
        assert!(vp.event_visible(200, 300));
    }

    #[test]
    fn test_shows_time_half_open() {
        let mut vp = viewport();
        vp.set_boundaries(150, 250);
        assert!(vp.shows_time(150));
        assert!(!vp.shows_time(250));
    }
}
