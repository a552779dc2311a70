//! Fixed geometry and time windows of the guide.

use crate::model::Millis;

pub const MINUTE: Millis = 60 * 1000;
pub const HOUR: Millis = 60 * MINUTE;

/// Guide geometry in virtual pixels plus the time windows it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLayout {
    /// How far before now the guide reaches.
    pub look_back: Millis,
    /// How far after now the guide reaches.
    pub look_forward: Millis,
    /// Time span shown across the event area.
    pub visible_window: Millis,
    /// Distance between timebar labels.
    pub time_label_spacing: Millis,
    /// Channel rows shown at once.
    pub visible_channel_count: usize,

    pub row_height: f64,
    pub margin: f64,
    pub padding: f64,
    pub column_width: f64,
    pub timebar_height: f64,
    pub timebar_line_width: f64,
    pub details_logo_width: f64,
    pub details_margin: f64,
    pub details_padding: f64,
}

impl Default for GuideLayout {
    fn default() -> Self {
        Self {
            look_back: 2 * HOUR,
            look_forward: 24 * HOUR,
            visible_window: 2 * HOUR,
            time_label_spacing: 30 * MINUTE,
            visible_channel_count: 8,
            row_height: 75.0,
            margin: 3.0,
            padding: 10.0,
            column_width: 120.0,
            timebar_height: 70.0,
            timebar_line_width: 3.0,
            details_logo_width: 300.0,
            details_margin: 5.0,
            details_padding: 8.0,
        }
    }
}

impl GuideLayout {
    /// Vertical distance between two consecutive channel rows.
    pub fn row_stride(&self) -> f64 {
        self.row_height + self.margin
    }

    /// Height of the timebar plus the visible channel rows.
    pub fn channel_list_height(&self) -> f64 {
        self.timebar_height + self.row_stride() * self.visible_channel_count as f64
    }

    /// Rows kept above (and below) the focused row before scrolling starts.
    pub fn scroll_padding_rows(&self) -> usize {
        (self.visible_channel_count / 2).saturating_sub(1)
    }

    /// Left edge of the event area.
    pub fn event_area_left(&self) -> f64 {
        self.column_width + self.margin
    }

    /// Number of timebar labels across the visible window.
    pub fn time_label_count(&self) -> usize {
        if self.time_label_spacing <= 0 {
            return 0;
        }
        (self.visible_window / self.time_label_spacing).max(0) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let layout = GuideLayout::default();
        assert_eq!(layout.row_stride(), 78.0);
        assert_eq!(layout.channel_list_height(), 70.0 + 78.0 * 8.0);
        assert_eq!(layout.scroll_padding_rows(), 3);
        assert_eq!(layout.event_area_left(), 123.0);
        assert_eq!(layout.time_label_count(), 4);
    }

    #[test]
    fn test_scroll_padding_small_viewport() {
        let layout = GuideLayout {
            visible_channel_count: 1,
            ..GuideLayout::default()
        };
        assert_eq!(layout.scroll_padding_rows(), 0);
    }
}
