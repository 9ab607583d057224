// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use thiserror::Error as ThisError;

/// Result type used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    /// The session loop has stopped and no longer accepts input.
    #[error("player session is not running")]
    SessionClosed,

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Backend command that produced a [`BackendError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    Start,
    Stop,
    Seek,
}

impl fmt::Display for BackendCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendCommand::Start => "start",
            BackendCommand::Stop => "stop",
            BackendCommand::Seek => "seek",
        };
        f.write_str(name)
    }
}

/// Failure reported by the remote player backend for a single command.
///
/// These never escape the playback controller: they are logged and the
/// controller falls back to the stopped state.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum BackendError {
    /// The backend received the command and refused it.
    #[error("backend rejected {command} command: {reason}")]
    Rejected {
        command: BackendCommand,
        reason: String,
    },

    /// The backend could not be reached.
    #[error("backend is not reachable")]
    Disconnected,
}

impl BackendError {
    /// Convenience constructor for a rejected command.
    pub fn rejected(command: BackendCommand, reason: impl Into<String>) -> Self {
        BackendError::Rejected {
            command,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_to_io_variant() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing settings");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing settings")));
    }

    #[test]
    fn backend_error_display_names_the_command() {
        let err = BackendError::rejected(BackendCommand::Seek, "out of range");
        assert_eq!(
            err.to_string(),
            "backend rejected seek command: out of range"
        );
    }

    #[test]
    fn backend_error_is_transparent_inside_crate_error() {
        let err: Error = BackendError::Disconnected.into();
        assert_eq!(err.to_string(), "backend is not reachable");
    }
}
