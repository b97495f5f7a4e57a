//! Audio conversion port.

use std::path::Path;

use async_trait::async_trait;

/// Errors from the conversion port.
///
/// The dispatcher recovers from every variant by keeping the raw synthesized
/// audio as the final artifact, so none of these ever surfaces as a failed
/// job outcome.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    /// The conversion program could not be invoked at all.
    #[error("Audio converter not available: {0}")]
    Unavailable(String),

    /// The conversion program ran and exited unsuccessfully.
    #[error("Audio conversion failed: {0}")]
    Failed(String),

    /// IO error around the conversion input/output files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Backend-agnostic audio transcoder.
///
/// Implementations must be `Send + Sync` so the dispatcher can share them
/// across concurrently settling jobs behind an `Arc`.
#[async_trait]
pub trait AudioConverter: Send + Sync {
    /// Rewrite `source` into the normalized target format at `dest`.
    ///
    /// The target format is implied by `dest`'s extension. `source` is left
    /// in place either way; the caller decides what to do with it.
    async fn convert(&self, source: &Path, dest: &Path) -> Result<(), ConversionError>;
}
