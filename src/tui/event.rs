//! Event handling for the TUI.
//!
//! Terminal input, frame and clock ticks, the schedule loader and recording
//! backend replies all arrive on one channel and are handled one at a time by
//! the host loop.

use crate::backend::RecordingsResult;
use crate::model::{DataError, GuideData};
use crate::guide::{KEY_B, KEY_BACK, KEY_DOWN, KEY_ENTER, KEY_LEFT, KEY_RED, KEY_RIGHT, KEY_UP};
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

const INPUT_POLL: Duration = Duration::from_millis(250);

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    /// Drives the scroll animation.
    Frame,
    /// Wall-clock refresh for the now line and the live screen.
    Clock,
    Resize(u16, u16),
    /// Schedule load finished.
    Data(Result<GuideData, DataError>),
    /// Reply to a create or cancel request.
    Recording(RecordingsResult),
    /// Recordings fetched once the schedule is in.
    RecordingList(RecordingsResult),
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    tx: mpsc::UnboundedSender<Event>,
}

impl EventHandler {
    /// Start the input thread and both tickers. Must be called inside a
    /// tokio runtime.
    pub fn new(frame_interval: Duration, clock_interval: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let input_tx = tx.clone();
        std::thread::spawn(move || loop {
            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) if !input_tx.is_closed() => continue,
                _ => break,
            }
            let sent = match event::read() {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    input_tx.send(Event::Key(key))
                }
                Ok(CrosstermEvent::Resize(w, h)) => input_tx.send(Event::Resize(w, h)),
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        });

        spawn_ticker(tx.clone(), frame_interval, || Event::Frame);
        spawn_ticker(tx.clone(), clock_interval, || Event::Clock);

        Self { rx, tx }
    }

    /// Sender for tasks that report back to the host loop.
    pub fn tx(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

fn spawn_ticker(tx: mpsc::UnboundedSender<Event>, period: Duration, event: fn() -> Event) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            if tx.send(event()).is_err() {
                break;
            }
        }
    });
}

/// Host-level actions, outside the guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    OpenGuide,
    ChannelUp,
    ChannelDown,
    None,
}

impl From<KeyEvent> for Action {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('g') | KeyCode::Enter => Action::OpenGuide,
            KeyCode::Up | KeyCode::Char('k') => Action::ChannelUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ChannelDown,
            _ => Action::None,
        }
    }
}

/// Remote-control code for a key pressed while the guide is open.
pub fn guide_key_code(key: &KeyEvent) -> Option<u32> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::Char('l') => Some(KEY_RIGHT),
        KeyCode::Left | KeyCode::Char('h') => Some(KEY_LEFT),
        KeyCode::Down | KeyCode::Char('j') => Some(KEY_DOWN),
        KeyCode::Up | KeyCode::Char('k') => Some(KEY_UP),
        KeyCode::Char('r') => Some(KEY_RED),
        KeyCode::Enter => Some(KEY_ENTER),
        KeyCode::Esc | KeyCode::Backspace => Some(KEY_BACK),
        KeyCode::Char('b') => Some(KEY_B),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_live_actions() {
        assert_eq!(Action::from(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            Action::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(Action::from(key(KeyCode::Char('g'))), Action::OpenGuide);
        assert_eq!(Action::from(key(KeyCode::Enter)), Action::OpenGuide);
        assert_eq!(Action::from(key(KeyCode::Char('k'))), Action::ChannelUp);
        assert_eq!(Action::from(key(KeyCode::Down)), Action::ChannelDown);
        assert_eq!(Action::from(key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_guide_key_codes() {
        assert_eq!(guide_key_code(&key(KeyCode::Right)), Some(39));
        assert_eq!(guide_key_code(&key(KeyCode::Char('h'))), Some(37));
        assert_eq!(guide_key_code(&key(KeyCode::Char('j'))), Some(40));
        assert_eq!(guide_key_code(&key(KeyCode::Up)), Some(38));
        assert_eq!(guide_key_code(&key(KeyCode::Char('r'))), Some(403));
        assert_eq!(guide_key_code(&key(KeyCode::Enter)), Some(13));
        assert_eq!(guide_key_code(&key(KeyCode::Esc)), Some(461));
        assert_eq!(guide_key_code(&key(KeyCode::Backspace)), Some(461));
        assert_eq!(guide_key_code(&key(KeyCode::Char('b'))), Some(66));
        assert_eq!(guide_key_code(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_control_keys_are_not_guide_input() {
        let ctrl_b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL);
        assert_eq!(guide_key_code(&ctrl_b), None);
    }

    #[tokio::test]
    async fn test_sender_reaches_receiver() {
        let mut events = EventHandler::new(Duration::from_secs(3600), Duration::from_secs(3600));
        // Both tickers fire once immediately.
        events.tx().send(Event::Recording(Ok(Vec::new()))).unwrap();
        let mut saw_recording = false;
        for _ in 0..3 {
            if let Some(Event::Recording(Ok(list))) = events.next().await {
                assert!(list.is_empty());
                saw_recording = true;
            }
        }
        assert!(saw_recording);
    }
}
