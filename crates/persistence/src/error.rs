//! Persistence errors.

use thiserror::Error;

/// Failures while writing a snapshot.
///
/// Reads never surface an error: a snapshot that cannot be loaded is treated
/// as absent.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The snapshot could not be written to its backing storage.
    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be serialized.
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}
