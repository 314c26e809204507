// ABOUTME: Error types for JSON Feed encode/decode operations.
// ABOUTME: Provides FeedError with Syntax, Invalid, and Io variants.

use crate::validate::ValidationError;
use std::io;
use thiserror::Error;

/// Errors that can occur while decoding or encoding a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The input is not well-formed JSON, or a field has the wrong type.
    #[error("jsonfeed: malformed document: {0}")]
    Syntax(#[from] serde_json::Error),

    /// The document is well-formed but breaks a JSON Feed rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// Writing the encoded feed to its sink failed.
    #[error("jsonfeed: write failed: {0}")]
    Io(#[from] io::Error),
}

impl FeedError {
    /// Maps a serializer error, separating sink failures from the rest.
    pub(crate) fn from_write(err: serde_json::Error) -> Self {
        if err.is_io() {
            FeedError::Io(err.into())
        } else {
            FeedError::Syntax(err)
        }
    }

    /// True for malformed input.
    pub fn is_syntax(&self) -> bool {
        matches!(self, FeedError::Syntax(_))
    }

    /// True when validation rejected the document.
    pub fn is_invalid(&self) -> bool {
        matches!(self, FeedError::Invalid(_))
    }

    /// The validation failure, if that is what this error is.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            FeedError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}
