//! # TUI Module
//!
//! Terminal host for the programme guide, built on ratatui and crossterm.
//!
//! ## Overview
//!
//! The host starts on the live screen while a loader task reads the
//! schedule and then fetches the recordings list; both arrive through the
//! event channel like any other event. Opening the guide mounts a
//! [`GuideView`](crate::guide::GuideView) sized to the terminal; key presses
//! are translated to remote-control codes and fed to it. Every guide repaint
//! goes through [`TerminalCanvas`], which turns the renderer's virtual pixels
//! into half-block cells.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  Key / Resize   ┌──────────┐  codes   ┌───────────┐
//! │ input thread │────────────────▶│          │─────────▶│ GuideView │
//! ├──────────────┤  Frame / Clock  │ run_app  │          └───────────┘
//! │   tickers    │────────────────▶│  (App)   │  spawn   ┌───────────┐
//! ├──────────────┤  Data / Recs    │          │─────────▶│  backend  │
//! │ spawned tasks│────────────────▶│          │          └───────────┘
//! └──────────────┘                 └──────────┘
//! ```

mod app;
mod canvas;
mod event;
mod ui;

pub use app::{App, Screen};
pub use canvas::TerminalCanvas;
pub use event::{guide_key_code, Action, Event, EventHandler};

use crate::backend::{MemoryBackend, RecordingBackend};
use crate::config::Config;
use crate::guide::recording::{self, RecordingRequest};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let backend = Arc::new(MemoryBackend::new(config.backend.latency));

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, App::loading(config), backend).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    backend: Arc<MemoryBackend>,
) -> anyhow::Result<()> {
    let mut events = EventHandler::new(app.config.tui.frame_interval, app.config.tui.clock_interval);
    spawn_loader(&app.config, Arc::clone(&backend), events.tx());
    let backend: Arc<dyn RecordingBackend> = backend;
    let mut needs_draw = true;

    loop {
        let now = crate::cli::now_millis();
        if needs_draw || app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, &app, now))?;
            needs_draw = false;
        }

        let Some(event) = events.next().await else {
            break;
        };
        let now = crate::cli::now_millis();
        match event {
            Event::Key(key) => {
                app.clear_error();
                needs_draw = true;
                match app.screen {
                    Screen::Live => match Action::from(key) {
                        Action::Quit => app.quit(),
                        Action::OpenGuide => {
                            let size = terminal.size()?;
                            let (width, height) =
                                guide_surface(&app, Rect::new(0, 0, size.width, size.height));
                            app.open_guide(width, height, now);
                        }
                        Action::ChannelUp => app.zap(-1),
                        Action::ChannelDown => app.zap(1),
                        Action::None => {}
                    },
                    Screen::Guide => {
                        if Action::from(key) == Action::Quit {
                            app.quit();
                        } else if let Some(code) = guide_key_code(&key) {
                            if let Some(request) = app.handle_guide_key(code, now) {
                                spawn_request(&backend, request, &app.config, events.tx());
                            }
                        }
                    }
                }
            }
            Event::Frame => {
                app.on_frame();
            }
            Event::Clock => {
                app.refresh_clock(now);
                needs_draw = app.screen == Screen::Live;
            }
            Event::Resize(w, h) => {
                let (width, height) = guide_surface(&app, Rect::new(0, 0, w, h));
                app.resize(width, height, now);
                needs_draw = true;
            }
            Event::Data(Ok(data)) => {
                app.update_data(data, now);
                needs_draw = true;
            }
            Event::Data(Err(e)) => return Err(e.into()),
            Event::Recording(result) => {
                app.apply_recording_result(result);
                needs_draw = true;
            }
            Event::RecordingList(result) => {
                app.sync_recordings(result);
                needs_draw = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Virtual surface size of the guide inside a terminal of `area` cells.
fn guide_surface(app: &App, area: Rect) -> (f64, f64) {
    let guide = ui::guide_area(area);
    app.surface_size(guide.width, guide.height)
}

/// Load the schedule off the host loop, then fetch the backend's recordings.
///
/// Recordings listed in the schedule file seed the backend before the list is
/// fetched, so the reply reflects them.
fn spawn_loader(config: &Config, backend: Arc<MemoryBackend>, tx: mpsc::UnboundedSender<Event>) {
    let config = config.clone();
    let timeout = config.backend.request_timeout;
    tokio::spawn(async move {
        let now = crate::cli::now_millis();
        let loaded = tokio::task::spawn_blocking(move || crate::cli::load_data(&config, now)).await;
        let data = match loaded {
            Ok(Ok(data)) => data,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Schedule load failed");
                let _ = tx.send(Event::Data(Err(e)));
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Schedule loader aborted");
                return;
            }
        };

        backend.restore(data.recordings().cloned()).await;
        if tx.send(Event::Data(Ok(data))).is_err() {
            return;
        }
        let result = recording::fetch(backend.as_ref(), timeout).await;
        if tx.send(Event::RecordingList(result)).is_err() {
            tracing::debug!("Host loop gone before recordings list");
        }
    });
}

/// Run a recording request in the background and post its result back.
fn spawn_request(
    backend: &Arc<dyn RecordingBackend>,
    request: RecordingRequest,
    config: &Config,
    tx: mpsc::UnboundedSender<Event>,
) {
    let backend = Arc::clone(backend);
    let timeout = config.backend.request_timeout;
    tokio::spawn(async move {
        let result = recording::execute(backend.as_ref(), request, timeout).await;
        if tx.send(Event::Recording(result)).is_err() {
            tracing::debug!("Host loop gone before recording reply");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataError;

    #[tokio::test]
    async fn test_loader_delivers_schedule_then_recordings() {
        let mut config = Config::default();
        config.data.demo_channels = 3;
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_loader(&config, Arc::new(MemoryBackend::default()), tx);

        match rx.recv().await {
            Some(Event::Data(Ok(data))) => assert_eq!(data.channel_count(), 3),
            other => panic!("unexpected event: {:?}", other),
        }
        match rx.recv().await {
            Some(Event::RecordingList(Ok(recordings))) => assert!(recordings.is_empty()),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_loader_reports_missing_schedule() {
        let mut config = Config::default();
        config.data.schedule = Some("/nonexistent/epgrid/guide.json".into());
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_loader(&config, Arc::new(MemoryBackend::default()), tx);

        assert!(matches!(
            rx.recv().await,
            Some(Event::Data(Err(DataError::Read { .. })))
        ));
        assert!(rx.recv().await.is_none());
    }
}
