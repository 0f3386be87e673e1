//! Error types for VTERM.

use std::io;

/// Errors produced by the VTERM crates.
#[derive(Debug, thiserror::Error)]
pub enum VtermError {
    /// The leading token of a submitted line matched no registry entry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, VtermError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_display() {
        let e = VtermError::UnknownCommand("frobnicate".into());
        assert_eq!(format!("{e}"), "unknown command: frobnicate");
    }

    #[test]
    fn command_error_display() {
        let e = VtermError::Command("bad arguments".into());
        assert_eq!(format!("{e}"), "command error: bad arguments");
    }

    #[test]
    fn config_error_display() {
        let e = VtermError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn io_error_converts() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: VtermError = io.into();
        assert!(format!("{e}").contains("gone"));
    }
}
