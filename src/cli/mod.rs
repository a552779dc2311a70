//! CLI command definitions and implementations.

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::model::{self, DataError, GuideData, Millis};

pub mod channels;
pub mod exit;
pub mod schedule;

pub use exit::{exit_code_for_error, Exit};

/// epgrid: browse a TV programme guide in the terminal
#[derive(Parser, Debug)]
#[command(name = "epgrid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, short = 'c', env = "EPGRID_CONFIG")]
    pub config: Option<std::path::PathBuf>,

    /// Schedule file (JSON); a demo schedule is generated when omitted
    #[arg(long, short = 's')]
    pub schedule: Option<std::path::PathBuf>,

    /// Number of channels in the demo schedule
    #[arg(long)]
    pub channels: Option<usize>,

    /// Color theme (classic, nord, dracula, gruvbox)
    #[arg(long, short = 't')]
    pub theme: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log file path
    #[arg(long)]
    pub log: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List channels with the programme airing now
    Channels {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List a channel's programmes in the guide window
    Schedule {
        /// Channel id, name or number
        channel: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load the configured schedule file, or generate the demo schedule around
/// `now`.
pub fn load_data(config: &Config, now: Millis) -> Result<GuideData, DataError> {
    match &config.data.schedule {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading schedule");
            model::load_schedule(path)
        }
        None => {
            let layout = config.guide.layout();
            tracing::info!(
                channels = config.data.demo_channels,
                seed = config.data.demo_seed,
                "Generating demo schedule"
            );
            Ok(model::demo::generate(
                config.data.demo_channels,
                now - layout.look_back,
                now + layout.look_forward,
                config.data.demo_seed,
            ))
        }
    }
}

/// Wall-clock time in milliseconds since the epoch.
pub fn now_millis() -> Millis {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Millis = 1_714_586_400_000;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::parse_from(["epgrid", "schedule", "ch03", "--json"]);
        match cli.command {
            Some(Commands::Schedule { channel, json }) => {
                assert_eq!(channel, "ch03");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let cli = Cli::parse_from(["epgrid", "-v", "channels"]);
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Some(Commands::Channels { json: false })));

        let cli = Cli::parse_from(["epgrid"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_load_demo_data_covers_window() {
        let mut config = Config::default();
        config.data.demo_channels = 4;
        let data = load_data(&config, NOW).unwrap();
        assert_eq!(data.channel_count(), 4);
        let layout = config.guide.layout();
        for position in 0..4 {
            assert!(data.event_at(position, NOW - layout.look_back).is_some());
            assert!(data.event_at(position, NOW).is_some());
        }
    }

    #[test]
    fn test_load_missing_schedule_file() {
        let mut config = Config::default();
        config.data.schedule = Some("/nonexistent/epgrid/guide.json".into());
        assert!(matches!(load_data(&config, NOW), Err(DataError::Read { .. })));
    }
}
