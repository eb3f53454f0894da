use std::path::PathBuf;

use thiserror::Error;

/// Configuration that failed to parse or validate.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: toml error: {toml}; json error: {json}")]
    Parse {
        origin: String,
        toml: String,
        json: String,
    },

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Failures of the preference store backing the dark-mode flag.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No preference directory available on this platform")]
    NoPreferenceDir,
}

#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
