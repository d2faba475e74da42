//! Error types for text acquisition and shaping

use std::path::PathBuf;
use thiserror::Error;

/// Error type for acquisition and shaping operations
#[derive(Debug, Error)]
pub enum Error {
    /// Both a literal text and a codepoint list were configured
    #[error("only one of text and codepoints can be set")]
    ConflictingSources,

    /// The codepoint list contained a token that is neither a delimiter
    /// nor a hex number
    #[error("failed parsing codepoint values at: '{0}'")]
    MalformedCodepoints(String),

    /// The text file could not be opened for reading
    #[error("failed opening text file `{}`: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error occurred mid-read (not end-of-stream)
    #[error("failed reading text: {0}")]
    StreamRead(#[from] std::io::Error),

    /// The font file could not be read or parsed
    #[error("failed loading font `{}`: {reason}", path.display())]
    FontLoad { path: PathBuf, reason: String },
}

/// Result type for acquisition and shaping operations
pub type Result<T> = std::result::Result<T, Error>;
