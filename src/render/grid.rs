//! Full-repaint renderer for the guide grid.
//!
//! Paint order, back to front:
//!
//! 1. backgrounds (surface, channel column, event-area wash, timebar strip)
//! 2. channel cells for the visible rows
//! 3. event blocks for the visible rows and time window
//! 4. timebar labels, weekday cell and bottom stroke
//! 5. elapsed wash, now line and time-pointer marker
//! 6. details pane for the focused event

use super::text::{self, TimeFormat};
use super::{Canvas, DrawingRect, GradientStop, ImageCache, Paint, TextAlign, TextStyle, Theme};
use crate::guide::{ChannelRange, GuideView, Viewport};
use crate::model::{Event, GuideData, Millis};

pub const LOADING_TEXT: &str = "Loading guide…";

const EVENT_TEXT_SIZE: f64 = 28.0;
const CHANNEL_TEXT_SIZE: f64 = 17.0;
const CHANNEL_LINE_HEIGHT: f64 = 20.0;
const TIMEBAR_TEXT_SIZE: f64 = 32.0;
const NOW_TEXT_SIZE: f64 = 22.0;
const DETAILS_TITLE_SIZE: f64 = 30.0;
const DETAILS_SUBTITLE_SIZE: f64 = 26.0;
const DETAILS_DESCRIPTION_SIZE: f64 = 28.0;
const RECORDING_BAR_HEIGHT: f64 = 4.0;
const SEPARATOR_WIDTH: f64 = 0.5;
const ELAPSED_ALPHA: f32 = 0.2;

const WASH_STOPS: [GradientStop; 4] = [
    GradientStop::new(0.0, 0.4),
    GradientStop::new(0.3, 0.9),
    GradientStop::new(0.7, 0.9),
    GradientStop::new(1.0, 0.4),
];

/// Paints a mounted guide. Holds no state between frames.
pub struct GridRenderer<'a> {
    theme: &'a Theme,
    time_format: TimeFormat,
    images: &'a dyn ImageCache,
}

impl<'a> GridRenderer<'a> {
    pub fn new(theme: &'a Theme, time_format: TimeFormat, images: &'a dyn ImageCache) -> Self {
        Self {
            theme,
            time_format,
            images,
        }
    }

    /// Repaint the whole guide.
    pub fn render(&self, canvas: &mut dyn Canvas, view: &GuideView, data: &GuideData, now: Millis) {
        let viewport = view.viewport();
        if !data.has_data() {
            self.draw_loading(canvas, viewport);
            return;
        }

        self.draw_background(canvas, viewport);
        if let Some(range) = viewport.visible_channels(data.channel_count()) {
            self.draw_channels(canvas, viewport, data, range);
            self.draw_events(canvas, view, data, range, now);
        }
        self.draw_timebar(canvas, viewport);
        self.draw_time_line(canvas, view, now);
        self.draw_details(canvas, view, data);
    }

    fn draw_loading(&self, canvas: &mut dyn Canvas, viewport: &Viewport) {
        let surface = DrawingRect::new(0.0, 0.0, viewport.width(), viewport.height());
        canvas.fill_rect(surface, Paint::solid(self.theme.surface));
        let style = TextStyle::new(EVENT_TEXT_SIZE, self.theme.text_dim).align(TextAlign::Center);
        canvas.fill_text(LOADING_TEXT, surface.center(), surface.middle(), &style);
    }

    fn draw_background(&self, canvas: &mut dyn Canvas, viewport: &Viewport) {
        let layout = viewport.layout();
        let width = viewport.width();
        let list_height = layout.channel_list_height();

        canvas.fill_rect(
            DrawingRect::new(0.0, 0.0, width, viewport.height()),
            Paint::solid(self.theme.surface),
        );
        canvas.fill_rect(
            DrawingRect::new(0.0, 0.0, layout.column_width, list_height),
            Paint::solid(self.theme.channel_background),
        );

        let area = DrawingRect::new(
            layout.event_area_left(),
            layout.timebar_height + layout.margin,
            width,
            list_height,
        );
        canvas.fill_gradient_h(area, self.theme.wash, &WASH_STOPS);
        canvas.stroke_line(
            (area.left, area.top),
            (area.left, area.bottom),
            SEPARATOR_WIDTH,
            self.theme.text,
        );

        canvas.fill_rect(
            DrawingRect::new(layout.event_area_left(), 0.0, width, layout.timebar_height),
            Paint::solid(self.theme.channel_background),
        );
    }

    fn draw_channels(
        &self,
        canvas: &mut dyn Canvas,
        viewport: &Viewport,
        data: &GuideData,
        range: ChannelRange,
    ) {
        let layout = viewport.layout();
        let mapper = viewport.mapper();
        let style = TextStyle::new(CHANNEL_TEXT_SIZE, self.theme.text)
            .bold()
            .align(TextAlign::Center);

        for position in range.iter() {
            let Some(channel) = data.channel(position) else {
                continue;
            };
            let cell = DrawingRect::from_size(
                0.0,
                mapper.y_at(position),
                layout.column_width,
                layout.row_height,
            );
            match channel.logo.as_deref().and_then(|key| self.images.get(key)) {
                Some(image) => {
                    let fitted =
                        cell.fit_image(image.width() as f64, image.height() as f64, layout.padding);
                    canvas.draw_image(image, fitted);
                }
                None => draw_centered_lines(canvas, &channel.name, cell, CHANNEL_LINE_HEIGHT, &style),
            }
        }
    }

    fn draw_events(
        &self,
        canvas: &mut dyn Canvas,
        view: &GuideView,
        data: &GuideData,
        range: ChannelRange,
        now: Millis,
    ) {
        let viewport = view.viewport();
        let left = viewport.layout().event_area_left();
        let mapper = viewport.mapper();

        for position in range.iter() {
            let top = mapper.y_at(position);
            canvas.stroke_line((left, top), (viewport.width(), top), SEPARATOR_WIDTH, self.theme.text);

            // Events are ordered by start, so nothing after the first
            // invisible event past a visible one can be on screen.
            let mut seen = false;
            for event in data.events(position) {
                if viewport.event_visible(event.start, event.end) {
                    seen = true;
                    self.draw_event(canvas, view, data, position, event, now);
                } else if seen {
                    break;
                }
            }
        }
    }

    fn draw_event(
        &self,
        canvas: &mut dyn Canvas,
        view: &GuideView,
        data: &GuideData,
        position: usize,
        event: &Event,
        now: Millis,
    ) {
        let viewport = view.viewport();
        let layout = viewport.layout();
        let mapper = viewport.mapper();

        let top = mapper.y_at(position);
        let block = DrawingRect::new(
            mapper.x_at(event.start),
            top,
            mapper.x_at(event.end) - layout.margin,
            top + layout.row_height,
        );
        // Clip at the channel column.
        let row = DrawingRect::new(layout.event_area_left(), top, f64::INFINITY, top + layout.row_height);
        let Some(block) = block.intersection(&row) else {
            return;
        };

        let color = if view.focus().is_focused(event) {
            self.theme.event_focus
        } else if event.is_current(now) {
            self.theme.event_current
        } else {
            self.theme.event
        };
        canvas.fill_rect(
            DrawingRect::from_size(
                block.left + 1.0,
                block.top + 1.0,
                block.width() + 1.0,
                block.height() + 1.0,
            ),
            Paint::solid(color),
        );
        canvas.stroke_line(
            (block.left, block.top + 1.0),
            (block.left, block.bottom + 2.0),
            SEPARATOR_WIDTH,
            self.theme.text,
        );

        if data.has_recording(event) {
            canvas.fill_rect(
                DrawingRect::from_size(block.left, block.top, block.width(), RECORDING_BAR_HEIGHT),
                Paint::solid(self.theme.recording),
            );
        }

        let inner = DrawingRect::new(
            block.left + layout.padding,
            block.top,
            block.right - layout.padding,
            block.bottom,
        );
        if inner.width() <= 0.0 {
            return;
        }
        let style = TextStyle::new(EVENT_TEXT_SIZE, self.theme.text).max_width(inner.width());
        let title = text::clip_to_width(&event.title, inner.width(), |s| {
            canvas.measure_text(s, &style)
        });
        if !title.is_empty() {
            canvas.fill_text(&title, inner.left, inner.middle(), &style);
        }
    }

    fn draw_timebar(&self, canvas: &mut dyn Canvas, viewport: &Viewport) {
        let layout = viewport.layout();
        let mapper = viewport.mapper();
        let width = viewport.width();
        let lower = viewport.lower_boundary();
        let spacing = layout.time_label_spacing;

        // Repainted so rows scrolled under the timebar stay hidden.
        canvas.fill_rect(
            DrawingRect::new(layout.event_area_left(), 0.0, width, layout.timebar_height),
            Paint::solid(self.theme.channel_background),
        );

        let label_style = TextStyle::new(EVENT_TEXT_SIZE, self.theme.text)
            .bold()
            .align(TextAlign::Center);
        for i in 0..layout.time_label_count() {
            let time = self
                .time_format
                .round_to(lower + spacing * i as Millis + spacing / 2, spacing);
            canvas.fill_text(
                &self.time_format.time(time),
                mapper.x_at(time),
                layout.timebar_height / 2.0,
                &label_style,
            );
        }

        let day = DrawingRect::new(0.0, 0.0, layout.column_width, layout.timebar_height);
        canvas.fill_rect(day, Paint::solid(self.theme.channel_background));
        let day_style = TextStyle::new(TIMEBAR_TEXT_SIZE, self.theme.text)
            .bold()
            .align(TextAlign::Center);
        canvas.fill_text(&self.time_format.weekday(lower), day.center(), day.middle(), &day_style);

        canvas.fill_rect(
            DrawingRect::from_size(0.0, layout.timebar_height, width, layout.margin),
            Paint::solid(self.theme.background),
        );
    }

    fn draw_time_line(&self, canvas: &mut dyn Canvas, view: &GuideView, now: Millis) {
        let viewport = view.viewport();
        let layout = viewport.layout();
        let mapper = viewport.mapper();
        let list_height = layout.channel_list_height();

        if now >= viewport.lower_boundary() {
            let elapsed = DrawingRect::new(
                layout.event_area_left(),
                0.0,
                mapper.x_at(now).min(viewport.width()),
                list_height,
            );
            if !elapsed.is_empty() {
                canvas.fill_rect(elapsed, Paint::translucent(self.theme.now_line, ELAPSED_ALPHA));
            }
        }

        if viewport.shows_time(now) {
            canvas.fill_rect(
                DrawingRect::from_size(mapper.x_at(now), 0.0, layout.timebar_line_width, list_height),
                Paint::solid(self.theme.now_line),
            );
        }

        let pointer = view.time_pointer();
        if !viewport.shows_time(pointer) {
            return;
        }
        let x = mapper.x_at(pointer);
        let top = layout.timebar_height - TIMEBAR_TEXT_SIZE + 10.0;
        canvas.fill_rect(
            DrawingRect::from_size(x, top, layout.timebar_line_width, list_height),
            Paint::solid(self.theme.time_pointer),
        );
        let style = TextStyle::new(NOW_TEXT_SIZE, self.theme.time_pointer).bold();
        canvas.fill_text(
            &self.time_format.time(pointer),
            x + layout.padding,
            top + NOW_TEXT_SIZE / 2.0,
            &style,
        );
    }

    fn draw_details(&self, canvas: &mut dyn Canvas, view: &GuideView, data: &GuideData) {
        let viewport = view.viewport();
        let layout = viewport.layout();
        let width = viewport.width();
        let top = layout.channel_list_height();
        let pane = DrawingRect::new(0.0, top, width, viewport.height());
        if pane.is_empty() {
            return;
        }
        canvas.fill_rect(pane, Paint::solid(self.theme.surface));

        let focus = view.focus();
        let Some(channel) = data.channel(focus.channel) else {
            return;
        };
        let logo_cell = DrawingRect::new(0.0, top, layout.details_logo_width, pane.bottom);
        match channel.logo.as_deref().and_then(|key| self.images.get(key)) {
            Some(image) => {
                let fitted =
                    logo_cell.fit_image(image.width() as f64, image.height() as f64, layout.padding);
                canvas.draw_image(image, fitted);
            }
            None => {
                let style = TextStyle::new(DETAILS_SUBTITLE_SIZE, self.theme.text_dim)
                    .bold()
                    .align(TextAlign::Center);
                draw_centered_lines(
                    canvas,
                    &channel.name,
                    logo_cell.inset(layout.padding),
                    DETAILS_SUBTITLE_SIZE + layout.details_margin,
                    &style,
                );
            }
        }

        let Some(event) = focus
            .event_position
            .and_then(|position| data.event(focus.channel, position))
        else {
            return;
        };

        let margin = layout.details_margin;
        let area = DrawingRect::new(
            logo_cell.right + margin,
            top + DETAILS_TITLE_SIZE + margin,
            width - margin,
            pane.bottom - margin,
        );
        let text_right = width - layout.padding;

        let frame_style = TextStyle::new(DETAILS_TITLE_SIZE, self.theme.text)
            .bold()
            .align(TextAlign::Right);
        let frame = self.time_format.time_frame(event.start, event.end);
        let frame_width = canvas.measure_text(&frame, &frame_style);
        canvas.fill_text(&frame, text_right, area.top, &frame_style);

        let title_width = (text_right - frame_width - layout.padding - area.left).max(0.0);
        let title_style = TextStyle::new(DETAILS_TITLE_SIZE, self.theme.text)
            .bold()
            .max_width(title_width);
        let title = text::clip_to_width(&event.title, title_width, |s| {
            canvas.measure_text(s, &title_style)
        });
        canvas.fill_text(&title, area.left, area.top, &title_style);

        if let Some(subtitle) = &event.subtitle {
            let style = TextStyle::new(DETAILS_SUBTITLE_SIZE, self.theme.text_dim)
                .bold()
                .max_width(area.width());
            let subtitle = text::clip_to_width(subtitle, area.width(), |s| {
                canvas.measure_text(s, &style)
            });
            canvas.fill_text(
                &subtitle,
                area.left,
                area.top + DETAILS_TITLE_SIZE + layout.details_padding,
                &style,
            );
        }

        if let Some(description) = &event.description {
            let style = TextStyle::new(DETAILS_DESCRIPTION_SIZE, self.theme.text);
            let max_width = text_right - area.left;
            let line_height = DETAILS_TITLE_SIZE + 5.0;
            let lines = text::wrap_lines(description, max_width, |s| canvas.measure_text(s, &style));
            let mut y = area.top + (DETAILS_TITLE_SIZE + layout.details_padding) * 2.0 + 3.0;
            for line in &lines {
                if y > area.bottom {
                    break;
                }
                canvas.fill_text(line, area.left, y, &style);
                y += line_height;
            }
        }
    }
}

/// Word-wrap `text` to `cell` and centre the block of lines in it.
fn draw_centered_lines(
    canvas: &mut dyn Canvas,
    label: &str,
    cell: DrawingRect,
    line_height: f64,
    style: &TextStyle,
) {
    let lines = text::wrap_lines(label, cell.width(), |s| canvas.measure_text(s, style));
    let first = cell.middle() - (lines.len().saturating_sub(1)) as f64 * line_height / 2.0;
    for (i, line) in lines.iter().enumerate() {
        canvas.fill_text(line, cell.center(), first + i as f64 * line_height, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::{GuideInput, GuideLayout, HOUR, MINUTE};
    use crate::model::{Channel, Recording};
    use crate::render::display_list::{DisplayList, DrawOp};
    use crate::render::{Image, NoImages};
    use ratatui::style::Color;
    use std::collections::HashMap;

    // 2024-05-01T18:00:00Z, a Wednesday
    const NOW: Millis = 1_714_586_400_000;
    const WIDTH: f64 = 1923.0;
    const HEIGHT: f64 = 1080.0;

    /// Half-hour events from NOW-3h; odd channels are shifted by 10 minutes.
    fn data(count: usize) -> GuideData {
        let channels = (0..count)
            .map(|pos| {
                let id = format!("c{}", pos);
                let offset = if pos % 2 == 1 { 10 * MINUTE } else { 0 };
                let events = (0..12)
                    .map(|i| {
                        let start = NOW - 3 * HOUR + offset + i * 30 * MINUTE;
                        Event {
                            channel_id: id.clone(),
                            start,
                            end: start + 30 * MINUTE,
                            title: format!("Show {}-{}", pos, i),
                            subtitle: Some("Pilot".to_string()),
                            description: Some("A long description of the show".to_string()),
                        }
                    })
                    .collect();
                Channel {
                    position: pos,
                    id,
                    name: format!("Channel {}", pos),
                    logo: Some(format!("logo{}", pos)),
                    events,
                }
            })
            .collect();
        GuideData::new(channels, vec![])
    }

    fn paint(data: &GuideData, view: &GuideView, images: &dyn ImageCache) -> DisplayList {
        let theme = Theme::classic();
        let renderer = GridRenderer::new(&theme, TimeFormat::utc(), images);
        let mut canvas = DisplayList::new(WIDTH, HEIGHT);
        renderer.render(&mut canvas, view, data, NOW);
        canvas
    }

    fn mount(data: &GuideData, channel: usize) -> GuideView {
        GuideView::mount(GuideLayout::default(), WIDTH, HEIGHT, data, channel, NOW)
    }

    /// Event block fills, identified by their height.
    fn blocks(canvas: &DisplayList, color: Color) -> Vec<DrawingRect> {
        canvas
            .rects_with(color)
            .into_iter()
            .filter(|r| r.height() == 76.0)
            .collect()
    }

    #[test]
    fn test_loading_state() {
        let data = GuideData::default();
        let view = mount(&data, 0);
        let canvas = paint(&data, &view, &NoImages);
        assert_eq!(canvas.texts(), vec![LOADING_TEXT]);
        assert_eq!(
            canvas.ops[0],
            DrawOp::Rect(
                DrawingRect::new(0.0, 0.0, WIDTH, HEIGHT),
                Paint::solid(Theme::classic().surface)
            )
        );
    }

    #[test]
    fn test_paint_order() {
        let data = data(5);
        let view = mount(&data, 0);
        let canvas = paint(&data, &view, &NoImages);

        let gradient = canvas
            .position(|op| matches!(op, DrawOp::Gradient(..)))
            .unwrap();
        let channel = canvas
            .position(|op| matches!(op, DrawOp::Text(t, ..) if t == "Channel 0"))
            .unwrap();
        let event = canvas
            .position(|op| matches!(op, DrawOp::Text(t, ..) if t.starts_with("Show")))
            .unwrap();
        let weekday = canvas
            .position(|op| matches!(op, DrawOp::Text(t, ..) if t == "Wed"))
            .unwrap();
        let frame = canvas
            .position(|op| matches!(op, DrawOp::Text(t, ..) if t == "18:00 - 18:30"))
            .unwrap();

        assert!(gradient < channel);
        assert!(channel < event);
        assert!(event < weekday);
        assert!(weekday < frame);
    }

    #[test]
    fn test_only_visible_channels_are_painted() {
        let data = data(20);
        let view = mount(&data, 0);
        let canvas = paint(&data, &view, &NoImages);
        let texts = canvas.texts();
        for pos in 0..8 {
            assert!(texts.contains(&format!("Channel {}", pos).as_str()), "{}", pos);
        }
        assert!(!texts.contains(&"Channel 8"));
        assert!(!texts.iter().any(|t| t.starts_with("Show 8-")));
    }

    #[test]
    fn test_channel_logo_replaces_name() {
        let data = data(3);
        let view = mount(&data, 0);
        let mut images = HashMap::new();
        images.insert(
            "logo1".to_string(),
            Image::new(2, 1, vec![Color::Red, Color::Blue]).unwrap(),
        );
        let canvas = paint(&data, &view, &images);

        let texts = canvas.texts();
        assert!(texts.contains(&"Channel 0"));
        assert!(!texts.contains(&"Channel 1"));
        let fitted = canvas.ops.iter().find_map(|op| match op {
            DrawOp::Image(2, 1, rect) => Some(*rect),
            _ => None,
        });
        // Row 1 top is 73 + 78; padded by 10, 100 wide, 50 tall centred in 55
        let rect = fitted.unwrap();
        assert_eq!(rect.left, 10.0);
        assert_eq!(rect.right, 110.0);
        assert_eq!(rect.top, 151.0 + 10.0 + 2.0);
    }

    #[test]
    fn test_focused_and_current_colours() {
        let data = data(5);
        let view = mount(&data, 2);
        let theme = Theme::classic();
        let canvas = paint(&data, &view, &NoImages);

        let focused = blocks(&canvas, theme.event_focus);
        assert_eq!(focused.len(), 1);
        // Channel 2's row top is 73 + 2 * 78
        assert_eq!(focused[0].top, 229.0 + 1.0);

        // Every other channel has an event airing now.
        assert_eq!(blocks(&canvas, theme.event_current).len(), 4);
        assert!(!blocks(&canvas, theme.event).is_empty());
    }

    #[test]
    fn test_focus_follows_navigation() {
        let data = data(5);
        let mut view = mount(&data, 0);
        view.handle_input(GuideInput::PreviousEvent, &data, NOW);
        let theme = Theme::classic();
        let canvas = paint(&data, &view, &NoImages);

        let focused = blocks(&canvas, theme.event_focus);
        assert_eq!(focused.len(), 1);
        // Event 5 on channel 0 starts at NOW - 30min: grid x 1350
        assert_eq!(focused[0].left, 126.0 + 1350.0 + 1.0);
        // The event airing now on channel 0 is painted as current again.
        assert_eq!(blocks(&canvas, theme.event_current).len(), 5);
    }

    #[test]
    fn test_blocks_clipped_at_channel_column() {
        let data = data(2);
        let view = mount(&data, 0);
        let theme = Theme::classic();
        let canvas = paint(&data, &view, &NoImages);

        let min_left = blocks(&canvas, theme.event)
            .iter()
            .map(|r| r.left)
            .fold(f64::INFINITY, f64::min);
        // Channel 1's event starting at NOW - 2h20 is clipped to the area edge.
        assert_eq!(min_left, 123.0 + 1.0);
    }

    #[test]
    fn test_recording_bar() {
        let mut data = data(3);
        let event = data.event(1, 5).unwrap().clone();
        data.update_recordings(vec![Recording::scheduled(&event)]);
        let view = mount(&data, 0);
        let theme = Theme::classic();
        let canvas = paint(&data, &view, &NoImages);

        let bars: Vec<_> = canvas
            .rects_with(theme.recording)
            .into_iter()
            .filter(|r| r.height() == RECORDING_BAR_HEIGHT)
            .collect();
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].top, 151.0);
    }

    #[test]
    fn test_long_titles_are_clipped() {
        let mut data = data(1);
        let mut channels = data.channels().to_vec();
        channels[0].events[4].title = "An Extraordinarily Long Programme Title".to_string();
        data.update_channels(channels);
        let view = mount(&data, 0);
        let canvas = paint(&data, &view, &NoImages);

        let (_, _, style) = canvas
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text(t, x, y, style) if t.starts_with("An Extra") => Some((x, y, style)),
                _ => None,
            })
            .unwrap();
        let clipped = canvas
            .texts()
            .into_iter()
            .find(|t| t.starts_with("An Extra"))
            .unwrap();
        assert!(clipped.ends_with('…'));
        let width = clipped.chars().count() as f64 * style.size / 2.0;
        assert!(width <= style.max_width.unwrap());
    }

    #[test]
    fn test_timebar_labels_on_half_hours() {
        let data = data(3);
        let view = mount(&data, 0);
        let canvas = paint(&data, &view, &NoImages);
        // Lower boundary is 16:00 UTC
        for label in ["16:30", "17:00", "17:30", "18:00"] {
            let (x, y, style) = canvas.text(label).unwrap();
            assert_eq!(y, 35.0);
            assert_eq!(style.align, TextAlign::Center);
            assert!(x > 123.0);
        }
        let (x, _, _) = canvas.text("17:00").unwrap();
        assert_eq!(x, 126.0 + 900.0);
        assert!(canvas.text("Wed").is_some());
    }

    #[test]
    fn test_now_line_and_elapsed_wash() {
        let data = data(3);
        let view = mount(&data, 0);
        let theme = Theme::classic();
        let canvas = paint(&data, &view, &NoImages);

        let x_now = 126.0 + 1800.0;
        let list_height = 70.0 + 78.0 * 8.0;
        let now_line = DrawingRect::from_size(x_now, 0.0, 3.0, list_height);
        assert!(canvas
            .ops
            .contains(&DrawOp::Rect(now_line, Paint::solid(theme.now_line))));

        let wash = canvas.ops.iter().find_map(|op| match op {
            DrawOp::Rect(rect, paint) if paint.alpha < 1.0 => Some(*rect),
            _ => None,
        });
        assert_eq!(wash, Some(DrawingRect::new(123.0, 0.0, WIDTH, list_height)));
    }

    #[test]
    fn test_time_pointer_marker() {
        let data = data(3);
        let mut view = mount(&data, 0);
        view.handle_input(GuideInput::PreviousEvent, &data, NOW);
        let theme = Theme::classic();
        let canvas = paint(&data, &view, &NoImages);

        // Pointer at NOW - 30min + 1ms
        let x = 126.0 + 1350.0;
        let marker = DrawingRect::from_size(x, 48.0, 3.0, 70.0 + 78.0 * 8.0);
        assert!(canvas
            .ops
            .contains(&DrawOp::Rect(marker, Paint::solid(theme.time_pointer))));
        let (label_x, label_y, _) = canvas.text("17:30").map(|(x, y, s)| (x, y, *s)).unwrap();
        // The timebar also has a 17:30 label; the marker label is the later one.
        let marker_label = canvas.ops.iter().rev().find_map(|op| match op {
            DrawOp::Text(t, x, y, _) if t == "17:30" => Some((*x, *y)),
            _ => None,
        });
        assert_eq!(marker_label, Some((x + 10.0, 59.0)));
        assert_ne!((label_x, label_y), (x + 10.0, 59.0));
    }

    #[test]
    fn test_details_pane() {
        let data = data(3);
        let view = mount(&data, 1);
        let canvas = paint(&data, &view, &NoImages);

        // Channel 1 airs event 5 (17:40 - 18:10) at NOW. Its block title is
        // painted first; the details title is the last one.
        let (x, y, size) = canvas
            .ops
            .iter()
            .rev()
            .find_map(|op| match op {
                DrawOp::Text(t, x, y, style) if t == "Show 1-5" => Some((*x, *y, style.size)),
                _ => None,
            })
            .unwrap();
        assert_eq!(x, 305.0);
        assert_eq!(y, 694.0 + 35.0);
        assert_eq!(size, 30.0);

        let (fx, fy, fstyle) = canvas.text("17:40 - 18:10").unwrap();
        assert_eq!(fx, WIDTH - 10.0);
        assert_eq!(fy, y);
        assert_eq!(fstyle.align, TextAlign::Right);

        let (_, sy, _) = canvas.text("Pilot").unwrap();
        assert_eq!(sy, y + 38.0);
        let (_, dy, _) = canvas.text("A long description of the show").unwrap();
        assert_eq!(dy, y + 76.0 + 3.0);
    }

    #[test]
    fn test_details_pane_without_focused_event() {
        let mut data = data(2);
        let mut channels = data.channels().to_vec();
        channels[0].events.clear();
        data.update_channels(channels);
        let view = mount(&data, 0);
        assert_eq!(view.focus().event_position, None);
        let canvas = paint(&data, &view, &NoImages);

        // Only the channel name is shown below the grid.
        let below: Vec<_> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(t, _, y, _) if *y > 694.0 => Some(t.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(below, vec!["Channel 0"]);
    }
}
