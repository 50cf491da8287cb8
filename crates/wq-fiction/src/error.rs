//! Error types for file-level persistence.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while saving or loading a game.
///
/// Gameplay problems are narrated, never returned as errors.
#[derive(Debug, Error)]
pub enum FictionError {
    /// The snapshot file could not be read, written, or removed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be decoded into a world.
    #[error("{0}")]
    Core(#[from] wq_core::WqError),
}
