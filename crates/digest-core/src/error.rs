//! Error type for digest computation.

use thiserror::Error;

/// Failures surfaced by [`crate::digest`] and friends.
#[derive(Debug, Error)]
pub enum DigestError {
    /// A working or result buffer could not be reserved.
    #[error("failed to allocate {requested} bytes")]
    AllocationFailure {
        /// Bytes that were asked for.
        requested: usize,
    },
    /// Hex rendering rejected the output buffer.
    #[error("hex encoding failed: {0}")]
    Encoding(#[from] hex::FromHexError),
}
