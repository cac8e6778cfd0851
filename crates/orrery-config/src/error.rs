//! Configuration error types.

/// Errors raised while reading, writing, or validating `config.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// The config directory or file could not be written.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// A value parsed but is outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
