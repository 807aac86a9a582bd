//! Error types for mdhighlight

use thiserror::Error;

/// Result type alias for mdhighlight operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighter error types
///
/// Highlighting itself never fails; only loading a configuration can.
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown style class: {0}")]
    UnknownStyle(String),
}
