//! Error types for word recommendation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading a dictionary or ranking suggestions.
#[derive(Error, Debug)]
pub enum SpellError {
    /// The word list could not be opened or read.
    #[error("failed to load dictionary from {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A parameter outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A settings file that could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellError::Config(msg.into())
    }

    pub(crate) fn load<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        SpellError::Load {
            path: path.into(),
            source,
        }
    }
}
