//! Error types for dropcon.
//!
//! Interaction-level failures (duplicate command registration, unknown
//! command names) are deliberately NOT errors: they are reported as boolean
//! results plus a diagnostic line in the console output. This type covers
//! the configuration-loading surface only.

use std::io;

/// Errors produced when loading console configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ConsoleError>;
