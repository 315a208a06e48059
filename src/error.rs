//! Error types for Rekha
//!
//! The intersection engine itself never fails (it returns `Option`), so these
//! errors only come from configuration loading, scene validation and the
//! simulation state machine.

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rekha error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Scene geometry failed validation
    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    /// State machine transition not allowed from the current state
    #[error("Cannot {action} while {from}")]
    InvalidTransition {
        /// State the simulation was in
        from: &'static str,
        /// Requested transition
        action: &'static str,
    },
}
