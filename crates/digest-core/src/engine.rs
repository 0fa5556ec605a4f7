//! One-shot digest entry points.

use crate::error::DigestError;
use crate::padding::{pad, BLOCK_SIZE};
use crate::state::DigestState;

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 16;

/// Length of the rendered hex digest.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_SIZE;

/// Computes the 16-byte digest of `message`.
pub fn digest_bytes(message: &[u8]) -> Result<[u8; DIGEST_SIZE], DigestError> {
    let padded = pad(message)?;
    let mut state = DigestState::new();
    for chunk in padded.chunks_exact(BLOCK_SIZE) {
        let mut block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        state.compress(&block);
    }
    Ok(state.to_bytes())
}

/// Computes the digest of `message` as 32 lowercase hex characters.
pub fn digest(message: &[u8]) -> Result<String, DigestError> {
    let bytes = digest_bytes(message)?;

    let mut rendered = [0u8; HEX_DIGEST_LEN];
    hex::encode_to_slice(bytes, &mut rendered)?;

    let mut out = String::new();
    out.try_reserve_exact(HEX_DIGEST_LEN)
        .map_err(|_| DigestError::AllocationFailure {
            requested: HEX_DIGEST_LEN,
        })?;
    out.extend(rendered.iter().map(|&b| char::from(b)));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message() {
        assert_eq!(digest(b"").unwrap(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn abc() {
        assert_eq!(digest(b"abc").unwrap(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn hex_matches_raw_bytes() {
        let raw = digest_bytes(b"message digest").unwrap();
        assert_eq!(digest(b"message digest").unwrap(), hex::encode(raw));
    }

    #[test]
    fn output_is_lowercase_and_fixed_width() {
        let out = digest(&[0xffu8; 300]).unwrap();
        assert_eq!(out.len(), HEX_DIGEST_LEN);
        assert!(out.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
