//! Application error types using thiserror
//!
//! Only the reader layer has failure modes worth typing: launching the
//! external utility can fail, and its output can be undecodable. Neither
//! is fatal to a run; the inspector degrades both to an absent version
//! and keeps the message as a diagnostic.

use thiserror::Error;

/// Errors from invoking the external metadata reader
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The reader process could not be launched
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The reader produced output that is not valid UTF-8
    #[error("{tool} produced non-UTF-8 output")]
    NonUtf8Output { tool: String },
}

impl ReaderError {
    /// Creates a new Launch error
    pub fn launch(tool: impl Into<String>, source: std::io::Error) -> Self {
        ReaderError::Launch {
            tool: tool.into(),
            source,
        }
    }

    /// Creates a new NonUtf8Output error
    pub fn non_utf8_output(tool: impl Into<String>) -> Self {
        ReaderError::NonUtf8Output { tool: tool.into() }
    }
}
