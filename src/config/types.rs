//! Configuration types.

use crate::guide::GuideLayout;
use crate::model::Millis;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub guide: GuideConfig,
    pub surface: SurfaceConfig,
    pub data: DataConfig,
    pub backend: BackendConfig,
    pub tui: TuiConfig,
    pub logging: LoggingConfig,
}

/// Time windows and row count of the guide.
#[derive(Debug, Clone)]
pub struct GuideConfig {
    /// How far before now the guide reaches.
    pub look_back: Duration,

    /// How far after now the guide reaches.
    pub look_forward: Duration,

    /// Time span shown across the event area.
    pub visible_window: Duration,

    /// Distance between timebar labels.
    pub time_label_spacing: Duration,

    /// Channel rows shown at once.
    pub visible_channels: usize,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            look_back: Duration::from_secs(2 * 3600),
            look_forward: Duration::from_secs(24 * 3600),
            visible_window: Duration::from_secs(2 * 3600),
            time_label_spacing: Duration::from_secs(30 * 60),
            visible_channels: 8,
        }
    }
}

impl GuideConfig {
    /// Guide geometry with these windows applied.
    pub fn layout(&self) -> GuideLayout {
        let millis = |d: Duration| d.as_millis() as Millis;
        GuideLayout {
            look_back: millis(self.look_back),
            look_forward: millis(self.look_forward),
            visible_window: millis(self.visible_window),
            time_label_spacing: millis(self.time_label_spacing),
            visible_channel_count: self.visible_channels,
            ..GuideLayout::default()
        }
    }
}

/// Mapping between guide pixels and terminal cells.
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    /// Virtual pixels per terminal column.
    pub cell_width: f64,

    /// Virtual pixels per terminal row.
    pub cell_height: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            cell_width: 16.0,
            cell_height: 32.0,
        }
    }
}

/// Where the schedule comes from.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// JSON schedule file. The demo schedule is used when unset.
    pub schedule: Option<PathBuf>,

    /// Channels in the demo schedule.
    pub demo_channels: usize,

    /// Seed for the demo schedule.
    pub demo_seed: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            schedule: None,
            demo_channels: 12,
            demo_seed: 42,
        }
    }
}

/// Recording backend settings.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Artificial latency of the in-memory backend.
    pub latency: Duration,

    /// Request timeout.
    pub request_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(300),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// TUI settings.
#[derive(Debug, Clone)]
pub struct TuiConfig {
    /// Animation frame interval.
    pub frame_interval: Duration,

    /// Now-line refresh interval.
    pub clock_interval: Duration,

    /// Color theme name.
    pub theme: String,

    /// Offset for displayed times, minutes east of UTC. Local time when unset.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            clock_interval: Duration::from_millis(1000),
            theme: "classic".to_string(),
            utc_offset_minutes: None,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level.
    pub level: LogLevel,

    /// Log file path.
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Off,
            file: dirs::state_dir()
                .or_else(dirs::data_local_dir)
                .unwrap_or_else(|| PathBuf::from("."))
                .join("epgrid/epgrid.log"),
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(()),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => tracing::Level::ERROR, // Will be filtered anyway
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

// --- File config (for TOML parsing) ---

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub guide: Option<FileGuideConfig>,
    pub surface: Option<FileSurfaceConfig>,
    pub data: Option<FileDataConfig>,
    pub backend: Option<FileBackendConfig>,
    pub tui: Option<FileTuiConfig>,
    pub logging: Option<FileLoggingConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileGuideConfig {
    pub look_back_minutes: Option<u64>,
    pub look_forward_minutes: Option<u64>,
    pub visible_window_minutes: Option<u64>,
    pub time_label_spacing_minutes: Option<u64>,
    pub visible_channels: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSurfaceConfig {
    pub cell_width: Option<f64>,
    pub cell_height: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDataConfig {
    pub schedule: Option<String>,
    pub demo_channels: Option<usize>,
    pub demo_seed: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileBackendConfig {
    pub latency_ms: Option<u64>,
    pub request_timeout: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTuiConfig {
    pub frame_interval: Option<u64>,
    pub clock_interval: Option<u64>,
    pub theme: Option<String>,
    pub utc_offset_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// --- Errors ---

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid window: {} must be positive", .0)]
    InvalidWindow(&'static str),

    #[error("Invalid window: {} exceeds 31 days", .0)]
    WindowTooLong(&'static str),

    #[error("Invalid visible window: must be shorter than look_back + look_forward")]
    VisibleWindowTooLarge,

    #[error("Invalid visible channels: at least 2 required")]
    TooFewVisibleChannels,

    #[error("Invalid cell size: width and height must be positive")]
    InvalidCellSize,

    #[error("Invalid demo channels: must be non-zero")]
    InvalidDemoChannels,

    #[error("Invalid timeout: {} must be positive", .0)]
    InvalidTimeout(&'static str),

    #[error("Invalid frame interval: must be between 5ms and 1s")]
    InvalidFrameInterval,

    #[error("Invalid clock interval: must be between 100ms and 60s")]
    InvalidClockInterval,

    #[error("Invalid UTC offset: must be within ±24h")]
    InvalidUtcOffset,

    #[error(
        "Unknown theme '{0}' (available: {available})",
        available = crate::render::Theme::available_themes().join(", ")
    )]
    UnknownTheme(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::{HOUR, MINUTE};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.guide.look_back, Duration::from_secs(7200));
        assert_eq!(config.guide.visible_channels, 8);
        assert_eq!(config.surface.cell_width, 16.0);
        assert!(config.data.schedule.is_none());
        assert_eq!(config.backend.request_timeout, Duration::from_secs(10));
        assert_eq!(config.tui.frame_interval, Duration::from_millis(16));
        assert_eq!(config.tui.theme, "classic");
        assert_eq!(config.logging.level, LogLevel::Off);
    }

    #[test]
    fn test_guide_layout_uses_windows() {
        let guide = GuideConfig {
            look_back: Duration::from_secs(3600),
            look_forward: Duration::from_secs(6 * 3600),
            visible_window: Duration::from_secs(90 * 60),
            time_label_spacing: Duration::from_secs(15 * 60),
            visible_channels: 5,
        };
        let layout = guide.layout();
        assert_eq!(layout.look_back, HOUR);
        assert_eq!(layout.look_forward, 6 * HOUR);
        assert_eq!(layout.visible_window, 90 * MINUTE);
        assert_eq!(layout.time_label_spacing, 15 * MINUTE);
        assert_eq!(layout.visible_channel_count, 5);
        assert_eq!(layout.row_height, GuideLayout::default().row_height);
    }

    #[test]
    fn test_default_layout_matches_guide_default() {
        assert_eq!(GuideConfig::default().layout(), GuideLayout::default());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Off);
        assert_eq!("error".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Error), tracing::Level::ERROR);
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
    }

    #[test]
    fn test_file_config_deserialization() {
        let toml = r#"
[guide]
look_back_minutes = 60
visible_channels = 6

[surface]
cell_width = 12.5

[data]
schedule = "~/guide.json"
demo_seed = 7

[backend]
latency_ms = 0

[tui]
frame_interval = 33
theme = "nord"
utc_offset_minutes = -300

[logging]
level = "debug"
"#;
        let file_config: FileConfig = toml::from_str(toml).unwrap();
        let guide = file_config.guide.as_ref().unwrap();
        assert_eq!(guide.look_back_minutes, Some(60));
        assert_eq!(guide.visible_channels, Some(6));
        assert!(guide.look_forward_minutes.is_none());
        assert_eq!(file_config.surface.as_ref().unwrap().cell_width, Some(12.5));
        assert_eq!(
            file_config.data.as_ref().unwrap().schedule,
            Some("~/guide.json".to_string())
        );
        assert_eq!(file_config.backend.as_ref().unwrap().latency_ms, Some(0));
        let tui = file_config.tui.as_ref().unwrap();
        assert_eq!(tui.frame_interval, Some(33));
        assert_eq!(tui.theme, Some("nord".to_string()));
        assert_eq!(tui.utc_offset_minutes, Some(-300));
        assert_eq!(
            file_config.logging.as_ref().unwrap().level,
            Some("debug".to_string())
        );
    }

    #[test]
    fn test_file_config_partial() {
        let toml = r#"
[tui]
theme = "gruvbox"
"#;
        let file_config: FileConfig = toml::from_str(toml).unwrap();
        assert!(file_config.tui.as_ref().unwrap().frame_interval.is_none());
        assert!(file_config.guide.is_none());
        assert!(file_config.logging.is_none());
    }
}
