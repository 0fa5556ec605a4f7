//! MD5-style 128-bit message digest.
//!
//! [`digest`] pads the message to 64-byte blocks, runs each block through a
//! four-stage, 64-step compression function and renders the four accumulators
//! as lowercase hex. The output is identical to RFC 1321 MD5, which is not
//! collision resistant; do not use it where that matters.
//!
//! There is no incremental API: the whole message is hashed in one call.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod error;
mod padding;
mod state;

pub use crate::engine::{digest, digest_bytes, DIGEST_SIZE, HEX_DIGEST_LEN};
pub use crate::error::DigestError;
pub use crate::padding::{pad, padded_len, BLOCK_SIZE};
pub use crate::state::DigestState;
