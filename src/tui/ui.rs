//! UI rendering functions.

use super::app::{App, Screen};
use super::canvas::TerminalCanvas;
use crate::model::{Event, Millis};
use crate::render::{GridRenderer, Theme};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

const GUIDE_HINTS: &[(&str, &str)] = &[
    ("←→", "Programme"),
    ("↑↓", "Channel"),
    ("r", "Record"),
    ("Enter", "Watch"),
    ("Esc", "Back"),
];

const LIVE_HINTS: &[(&str, &str)] = &[("g", "Guide"), ("↑↓", "Channel"), ("q", "Quit")];

pub fn render(frame: &mut Frame, app: &App, now: Millis) {
    let area = frame.area();
    match app.screen {
        Screen::Live => render_live(frame, app, area, now),
        Screen::Guide => render_guide(frame, app, area, now),
    }
}

/// Cells the guide surface occupies within the terminal `area`.
pub fn guide_area(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(1),
        ..area
    }
}

fn render_guide(frame: &mut Frame, app: &App, area: Rect, now: Millis) {
    let guide = guide_area(area);
    if let Some(view) = &app.guide {
        let mut canvas = TerminalCanvas::new(
            guide.width,
            guide.height,
            app.config.surface.cell_width,
            app.config.surface.cell_height,
        );
        GridRenderer::new(&app.theme, app.time_format, &app.images).render(
            &mut canvas,
            view,
            &app.data,
            now,
        );
        canvas.flush(frame.buffer_mut(), guide);
    }

    let status = Rect {
        y: guide.y + guide.height,
        height: area.height - guide.height,
        ..area
    };
    frame.render_widget(status_line(app, GUIDE_HINTS), status);
}

fn status_line<'a>(app: &'a App, hints: &[(&str, &str)]) -> Paragraph<'a> {
    let t = &app.theme;
    let mut spans = hint_spans(t, hints);
    if app.pending_requests > 0 {
        spans.push(Span::styled("  ◌ Saving…", Style::default().fg(t.text_dim)));
    }
    if let Some(error) = &app.last_error {
        spans.push(Span::styled(
            format!("  ✕ {}", error),
            Style::default().fg(t.error),
        ));
    }
    Paragraph::new(Line::from(spans)).style(Style::default().bg(t.surface))
}

fn hint_spans(t: &Theme, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(t.key_hint).bold();
    let desc_style = Style::default().fg(t.text_dim);
    hints
        .iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" [{}] ", key), key_style),
                Span::styled(desc.to_string(), desc_style),
            ]
        })
        .collect()
}

fn render_live(frame: &mut Frame, app: &App, area: Rect, now: Millis) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, app, chunks[0], now);
    render_now_playing(frame, app, chunks[1], now);
    render_footer(frame, app, chunks[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, now: Millis) {
    let t = &app.theme;
    let channel = match app.data.channel(app.current_channel) {
        Some(channel) => Span::styled(
            format!(" {} {} ", channel.position + 1, channel.name),
            Style::default().fg(t.text).bold(),
        ),
        None if !app.loaded => Span::styled(" Loading… ", Style::default().fg(t.text_dim)),
        None => Span::styled(" No channels ", Style::default().fg(t.text_dim)),
    };

    let title = Line::from(vec![
        Span::styled(" epgrid ", Style::default().bold().fg(t.text)),
        Span::raw("│"),
        channel,
        Span::raw("│"),
        Span::styled(
            format!(" {} {} ", app.time_format.weekday(now), app.time_format.time(now)),
            Style::default().fg(t.now_line),
        ),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.text_dim)),
    );

    frame.render_widget(header, area);
}

fn render_now_playing(frame: &mut Frame, app: &App, area: Rect, now: Millis) {
    let t = &app.theme;
    let block = Block::default()
        .title(" On now ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.text_dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(event) = app.current_event(now) else {
        let msg = Paragraph::new("No programme information")
            .style(Style::default().fg(t.text_dim))
            .alignment(Alignment::Center);
        frame.render_widget(msg, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(t.event_focus).bg(t.channel_background))
        .ratio(progress(event, now))
        .label(app.time_format.time_frame(event.start, event.end));
    frame.render_widget(gauge, chunks[0]);

    let mut lines = vec![Line::from(vec![
        Span::styled(event.title.clone(), Style::default().fg(t.text).bold()),
        recording_badge(app, event),
    ])];
    if let Some(subtitle) = &event.subtitle {
        lines.push(Line::styled(subtitle.clone(), Style::default().fg(t.text_dim)));
    }
    if let Some(description) = &event.description {
        lines.push(Line::from(""));
        lines.push(Line::styled(description.clone(), Style::default().fg(t.text)));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), chunks[1]);

    let next = app
        .data
        .event(app.current_channel, app.data.first_event_after(app.current_channel, now));
    let next_line = match next {
        Some(next) => Line::from(vec![
            Span::styled("Next ", Style::default().fg(t.text_dim)),
            Span::styled(app.time_format.time(next.start), Style::default().fg(t.key_hint)),
            Span::styled(format!("  {}", next.title), Style::default().fg(t.text)),
            recording_badge(app, next),
        ]),
        None => Line::default(),
    };
    frame.render_widget(Paragraph::new(next_line), chunks[2]);
}

fn recording_badge(app: &App, event: &Event) -> Span<'static> {
    if app.data.has_recording(event) {
        Span::styled("  ● REC", Style::default().fg(app.theme.recording).bold())
    } else {
        Span::raw("")
    }
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = status_line(app, LIVE_HINTS)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.text_dim)),
        );

    frame.render_widget(footer, area);
}

/// Elapsed share of `event` at `now`, in `[0, 1]`.
fn progress(event: &Event, now: Millis) -> f64 {
    let length = (event.end - event.start) as f64;
    if length <= 0.0 {
        return 0.0;
    }
    ((now - event.start) as f64 / length).clamp(0.0, 1.0)
}
