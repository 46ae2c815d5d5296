//! Error type for the portfolio engine.
//!
//! Missing page elements are deliberately not errors: every engine
//! operation degrades to a no-op when its target is absent. Errors are
//! reserved for content loading and cancellation.

/// Error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// Site content failed to load or validate.
    #[error("content error: {0}")]
    Content(String),

    /// An I/O error occurred while reading a content file.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The engine was cancelled.
    #[error("cancelled")]
    Cancelled,
}
