//! Configuration loading and management.
//!
//! Configuration is loaded with the following precedence (highest first):
//! 1. CLI flags
//! 2. Environment variables (`EPGRID_*`)
//! 3. Config file
//! 4. Defaults

mod types;

pub use types::*;

use crate::cli::Cli;
use crate::render::Theme;
use std::path::PathBuf;
use std::time::Duration;

const MINUTES: u64 = 60;

/// Longest accepted guide window.
const MAX_WINDOW: Duration = Duration::from_secs(31 * 24 * 60 * MINUTES);

impl Config {
    /// Load configuration from all sources with proper precedence.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        // Start with defaults
        let mut config = Config::default();

        // Load config file if it exists
        if let Some(file_config) = Self::load_file(cli)? {
            config.merge(file_config)?;
        }

        // Apply environment variables
        config.apply_env();

        // Apply CLI flags (highest precedence)
        config.apply_cli(cli);

        // Validate final config
        config.validate()?;

        Ok(config)
    }

    fn load_file(cli: &Cli) -> Result<Option<FileConfig>, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| std::env::var("EPGRID_CONFIG").ok().map(PathBuf::from))
            .or_else(|| dirs::config_dir().map(|d| d.join("epgrid/config.toml")));

        match path {
            Some(p) if p.exists() => {
                tracing::debug!(path = %p.display(), "Loading config file");
                let content = std::fs::read_to_string(&p).map_err(|e| ConfigError::Read {
                    path: p.clone(),
                    source: e,
                })?;
                let file_config: FileConfig = toml::from_str(&content)
                    .map_err(|e| ConfigError::Parse { path: p, source: e })?;
                Ok(Some(file_config))
            }
            _ => Ok(None),
        }
    }

    fn merge(&mut self, file: FileConfig) -> Result<(), ConfigError> {
        if let Some(guide) = file.guide {
            if let Some(minutes) = guide.look_back_minutes {
                self.guide.look_back = window("look_back", minutes)?;
            }
            if let Some(minutes) = guide.look_forward_minutes {
                self.guide.look_forward = window("look_forward", minutes)?;
            }
            if let Some(minutes) = guide.visible_window_minutes {
                self.guide.visible_window = window("visible_window", minutes)?;
            }
            if let Some(minutes) = guide.time_label_spacing_minutes {
                self.guide.time_label_spacing = window("time_label_spacing", minutes)?;
            }
            if let Some(count) = guide.visible_channels {
                self.guide.visible_channels = count;
            }
        }

        if let Some(surface) = file.surface {
            if let Some(width) = surface.cell_width {
                self.surface.cell_width = width;
            }
            if let Some(height) = surface.cell_height {
                self.surface.cell_height = height;
            }
        }

        if let Some(data) = file.data {
            if let Some(schedule) = data.schedule {
                self.data.schedule = Some(expand_tilde(&schedule));
            }
            if let Some(count) = data.demo_channels {
                self.data.demo_channels = count;
            }
            if let Some(seed) = data.demo_seed {
                self.data.demo_seed = seed;
            }
        }

        if let Some(backend) = file.backend {
            if let Some(latency) = backend.latency_ms {
                self.backend.latency = Duration::from_millis(latency);
            }
            if let Some(timeout) = backend.request_timeout {
                self.backend.request_timeout = Duration::from_secs(timeout);
            }
        }

        if let Some(tui) = file.tui {
            if let Some(interval) = tui.frame_interval {
                self.tui.frame_interval = Duration::from_millis(interval);
            }
            if let Some(interval) = tui.clock_interval {
                self.tui.clock_interval = Duration::from_millis(interval);
            }
            if let Some(theme) = tui.theme {
                self.tui.theme = theme;
            }
            if let Some(offset) = tui.utc_offset_minutes {
                self.tui.utc_offset_minutes = Some(offset);
            }
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level.parse().unwrap_or_default();
            }
            if let Some(file) = logging.file {
                self.logging.file = expand_tilde(&file);
            }
        }

        Ok(())
    }

    fn apply_env(&mut self) {
        if let Ok(schedule) = std::env::var("EPGRID_SCHEDULE") {
            self.data.schedule = Some(expand_tilde(&schedule));
        }
        if let Ok(seed) = std::env::var("EPGRID_DEMO_SEED") {
            if let Ok(s) = seed.parse() {
                self.data.demo_seed = s;
            }
        }
        if let Ok(theme) = std::env::var("EPGRID_THEME") {
            self.tui.theme = theme;
        }
        if let Ok(offset) = std::env::var("EPGRID_UTC_OFFSET") {
            if let Ok(o) = offset.parse() {
                self.tui.utc_offset_minutes = Some(o);
            }
        }
        if let Ok(level) = std::env::var("EPGRID_LOG_LEVEL") {
            self.logging.level = level.parse().unwrap_or_default();
        }
        if let Ok(file) = std::env::var("EPGRID_LOG_FILE") {
            self.logging.file = PathBuf::from(file);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(ref schedule) = cli.schedule {
            self.data.schedule = Some(schedule.clone());
        }
        if let Some(channels) = cli.channels {
            self.data.demo_channels = channels;
        }
        if let Some(ref theme) = cli.theme {
            self.tui.theme = theme.clone();
        }
        if cli.verbose > 0 {
            self.logging.level = match cli.verbose {
                1 => LogLevel::Info,
                2 => LogLevel::Debug,
                _ => LogLevel::Trace,
            };
        }
        if let Some(ref log) = cli.log {
            self.logging.file = log.clone();
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let guide = &self.guide;
        if guide.look_forward.is_zero() {
            return Err(ConfigError::InvalidWindow("look_forward"));
        }
        if guide.visible_window.is_zero() {
            return Err(ConfigError::InvalidWindow("visible_window"));
        }
        if guide.time_label_spacing.is_zero() {
            return Err(ConfigError::InvalidWindow("time_label_spacing"));
        }
        for (field, value) in [
            ("look_back", guide.look_back),
            ("look_forward", guide.look_forward),
            ("visible_window", guide.visible_window),
            ("time_label_spacing", guide.time_label_spacing),
        ] {
            if value > MAX_WINDOW {
                return Err(ConfigError::WindowTooLong(field));
            }
        }
        let span = guide
            .look_back
            .checked_add(guide.look_forward)
            .ok_or(ConfigError::WindowTooLong("look_back + look_forward"))?;
        if guide.visible_window >= span {
            return Err(ConfigError::VisibleWindowTooLarge);
        }
        if guide.visible_channels < 2 {
            return Err(ConfigError::TooFewVisibleChannels);
        }

        if !(self.surface.cell_width > 0.0 && self.surface.cell_height > 0.0) {
            return Err(ConfigError::InvalidCellSize);
        }

        if self.data.schedule.is_none() && self.data.demo_channels == 0 {
            return Err(ConfigError::InvalidDemoChannels);
        }

        if self.backend.request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout("request_timeout"));
        }

        let frame = self.tui.frame_interval.as_millis();
        if !(5..=1000).contains(&frame) {
            return Err(ConfigError::InvalidFrameInterval);
        }

        let clock = self.tui.clock_interval.as_millis();
        if !(100..=60_000).contains(&clock) {
            return Err(ConfigError::InvalidClockInterval);
        }

        if let Some(offset) = self.tui.utc_offset_minutes {
            if offset.abs() >= 24 * 60 {
                return Err(ConfigError::InvalidUtcOffset);
            }
        }

        if Theme::by_name(&self.tui.theme).is_none() {
            return Err(ConfigError::UnknownTheme(self.tui.theme.clone()));
        }

        Ok(())
    }

    /// The configured theme, falling back to the default for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.tui.theme).unwrap_or_default()
    }
}

/// A window of `minutes` from the config file.
fn window(field: &'static str, minutes: u64) -> Result<Duration, ConfigError> {
    minutes
        .checked_mul(MINUTES)
        .map(Duration::from_secs)
        .ok_or(ConfigError::WindowTooLong(field))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
