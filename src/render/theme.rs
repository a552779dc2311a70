//! Colour themes for the guide.
//!
//! A theme covers every colour the grid renderer and the terminal host use,
//! so swapping it changes the whole look.

use ratatui::style::Color;

/// A complete color theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Name of the theme
    pub name: &'static str,

    // === Surfaces ===
    /// Cleared surface and the details pane
    pub surface: Color,
    /// Strokes between the timebar and the grid
    pub background: Color,
    /// Channel column and timebar
    pub channel_background: Color,
    /// Colour of the event-area gradient wash
    pub wash: Color,

    // === Event blocks ===
    pub event: Color,
    /// Event airing now
    pub event_current: Color,
    /// Focused event, wins over current
    pub event_focus: Color,
    /// Top bar of events with an active recording
    pub recording: Color,

    // === Text ===
    pub text: Color,
    /// Subtitles and hints
    pub text_dim: Color,

    // === Time indicators ===
    /// Now line and the elapsed wash
    pub now_line: Color,
    /// Time-pointer marker
    pub time_pointer: Color,

    // === Status line ===
    pub key_hint: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Default theme - the dark blue set-top box look
    pub fn classic() -> Self {
        Self {
            name: "Classic",

            surface: Color::Rgb(0, 0, 0),
            background: Color::Rgb(30, 30, 30),
            channel_background: Color::Rgb(50, 50, 50),
            wash: Color::Rgb(35, 64, 84),

            event: Color::Rgb(35, 64, 84),
            event_current: Color::Rgb(50, 85, 110),
            event_focus: Color::Rgb(65, 182, 230),
            recording: Color::Rgb(218, 0, 0),

            text: Color::Rgb(214, 214, 214),
            text_dim: Color::Rgb(150, 150, 150),

            now_line: Color::Rgb(197, 113, 32),
            time_pointer: Color::Rgb(65, 182, 230),

            key_hint: Color::Rgb(197, 113, 32),
            error: Color::Rgb(218, 0, 0),
        }
    }

    /// Nord - cool, muted arctic theme
    pub fn nord() -> Self {
        Self {
            name: "Nord",

            surface: Color::Rgb(46, 52, 64),              // Polar Night 0
            background: Color::Rgb(59, 66, 82),           // Polar Night 1
            channel_background: Color::Rgb(67, 76, 94),   // Polar Night 2
            wash: Color::Rgb(94, 129, 172),               // Frost dark blue

            event: Color::Rgb(59, 66, 82),                // Polar Night 1
            event_current: Color::Rgb(76, 86, 106),       // Polar Night 3
            event_focus: Color::Rgb(136, 192, 208),       // Frost cyan
            recording: Color::Rgb(191, 97, 106),          // Aurora red

            text: Color::Rgb(236, 239, 244),              // Snow Storm 0
            text_dim: Color::Rgb(216, 222, 233),          // Snow Storm 2

            now_line: Color::Rgb(208, 135, 112),          // Aurora orange
            time_pointer: Color::Rgb(136, 192, 208),      // Frost cyan

            key_hint: Color::Rgb(235, 203, 139),          // Aurora yellow
            error: Color::Rgb(191, 97, 106),              // Aurora red
        }
    }

    /// Dracula - purple/pink dark theme
    pub fn dracula() -> Self {
        Self {
            name: "Dracula",

            surface: Color::Rgb(40, 42, 54),              // Background
            background: Color::Rgb(33, 34, 44),           // Darker
            channel_background: Color::Rgb(68, 71, 90),   // Current Line
            wash: Color::Rgb(98, 114, 164),               // Comment

            event: Color::Rgb(68, 71, 90),                // Current Line
            event_current: Color::Rgb(98, 114, 164),      // Comment
            event_focus: Color::Rgb(189, 147, 249),       // Purple
            recording: Color::Rgb(255, 85, 85),           // Red

            text: Color::Rgb(248, 248, 242),              // Foreground
            text_dim: Color::Rgb(98, 114, 164),           // Comment

            now_line: Color::Rgb(255, 184, 108),          // Orange
            time_pointer: Color::Rgb(255, 121, 198),      // Pink

            key_hint: Color::Rgb(241, 250, 140),          // Yellow
            error: Color::Rgb(255, 85, 85),               // Red
        }
    }

    /// Gruvbox Dark - warm retro theme
    pub fn gruvbox() -> Self {
        Self {
            name: "Gruvbox",

            surface: Color::Rgb(29, 32, 33),              // Bg0 hard
            background: Color::Rgb(40, 40, 40),           // Bg0
            channel_background: Color::Rgb(60, 56, 54),   // Bg1
            wash: Color::Rgb(69, 133, 136),               // Dark blue

            event: Color::Rgb(80, 73, 69),                // Bg2
            event_current: Color::Rgb(102, 92, 84),       // Bg3
            event_focus: Color::Rgb(131, 165, 152),       // Blue
            recording: Color::Rgb(251, 73, 52),           // Red

            text: Color::Rgb(235, 219, 178),              // Fg
            text_dim: Color::Rgb(146, 131, 116),          // Gray

            now_line: Color::Rgb(254, 128, 25),           // Orange
            time_pointer: Color::Rgb(142, 192, 124),      // Aqua

            key_hint: Color::Rgb(250, 189, 47),           // Yellow
            error: Color::Rgb(251, 73, 52),               // Red
        }
    }

    /// Get a theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" | "default" => Some(Self::classic()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            "gruvbox" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// List all available theme names
    pub fn available_themes() -> &'static [&'static str] {
        &["classic", "nord", "dracula", "gruvbox"]
    }
}
