//! Exit code definitions for CLI commands.
//!
//! - 0: Success
//! - 1: General error
//! - 3: Invalid arguments or configuration
//! - 4: Resource not found (schedule file, channel)

use std::process::ExitCode;

use crate::config::ConfigError;
use crate::model::DataError;

/// Exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    /// Success
    Ok = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    Args = 3,
    /// Resource not found (schedule file or channel)
    NotFound = 4,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

/// Maps an error to the appropriate exit code.
pub fn exit_code_for_error(err: &anyhow::Error) -> Exit {
    if err.downcast_ref::<ConfigError>().is_some() || err.downcast_ref::<clap::Error>().is_some() {
        return Exit::Args;
    }

    if let Some(data_err) = err.downcast_ref::<DataError>() {
        return match data_err {
            DataError::ChannelNotFound(_) => Exit::NotFound,
            DataError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Exit::NotFound
            }
            _ => Exit::Error,
        };
    }

    Exit::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(Exit::Ok as u8, 0);
        assert_eq!(Exit::Error as u8, 1);
        assert_eq!(Exit::Args as u8, 3);
        assert_eq!(Exit::NotFound as u8, 4);
    }

    #[test]
    fn test_config_error_maps_to_code_3() {
        let err = anyhow::Error::new(ConfigError::TooFewVisibleChannels);
        assert_eq!(exit_code_for_error(&err), Exit::Args);
    }

    #[test]
    fn test_channel_not_found_maps_to_code_4() {
        let err = anyhow::Error::new(DataError::ChannelNotFound("ch99".into()));
        assert_eq!(exit_code_for_error(&err), Exit::NotFound);
    }

    #[test]
    fn test_missing_schedule_maps_to_code_4() {
        let err = DataError::Read {
            path: "/missing.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(exit_code_for_error(&anyhow::Error::new(err)), Exit::NotFound);
    }

    #[test]
    fn test_unreadable_schedule_maps_to_code_1() {
        let err = DataError::Read {
            path: "/root.json".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(exit_code_for_error(&anyhow::Error::new(err)), Exit::Error);

        let err = DataError::DuplicateChannel("one".into());
        assert_eq!(exit_code_for_error(&anyhow::Error::new(err)), Exit::Error);
    }

    #[test]
    fn test_other_errors_map_to_code_1() {
        let err = anyhow::anyhow!("terminal went away");
        assert_eq!(exit_code_for_error(&err), Exit::Error);
    }
}
