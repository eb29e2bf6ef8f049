//! Error types for iconport services
//!
//! Centralized error handling using thiserror. One variant per failure
//! class the export pipeline can surface to the UI.

use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Remote icon service unreachable, or the icon does not exist
    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The SVG could not be parsed or rasterized
    #[error("Could not render SVG: {0}")]
    Decode(String),

    /// The user dismissed the save dialog. Not a real error: callers
    /// treat it as a silent no-op rather than surfacing a notification.
    #[error("Export cancelled")]
    Cancelled,

    /// A required setting is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem write failure (permissions, disk full, bad path)
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for iconport services
pub type Result<T> = std::result::Result<T, AppError>;
