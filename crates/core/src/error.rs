use std::io;

/// Errors that can occur around a luascope scan
///
/// Scanning itself never fails; these cover reading sources, loading
/// configuration and resolving editor locations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid position: line {line}, character {character}")]
    InvalidPosition { line: u32, character: u32 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for luascope operations
pub type Result<T> = std::result::Result<T, Error>;
