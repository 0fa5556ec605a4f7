//! Message padding.

use crate::error::DigestError;

/// Compression block size in bytes.
pub const BLOCK_SIZE: usize = 64;

const LENGTH_BYTES: usize = 8;

/// Length of the padded message for an input of `len` bytes.
///
/// This is the smallest multiple of [`BLOCK_SIZE`] that fits the message, the
/// 0x80 marker and the 8-byte bit length.
pub fn padded_len(len: usize) -> usize {
    (len + 1 + LENGTH_BYTES).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Pads `message` to a whole number of blocks.
///
/// Appends 0x80, zero fill, then the message length in bits as a little-endian
/// `u64` (wrapping modulo 2^64).
pub fn pad(message: &[u8]) -> Result<Vec<u8>, DigestError> {
    let total = padded_len(message.len());
    let mut padded = Vec::new();
    padded
        .try_reserve_exact(total)
        .map_err(|_| DigestError::AllocationFailure { requested: total })?;

    let bit_len = (message.len() as u64).wrapping_mul(8);

    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(total - LENGTH_BYTES, 0);
    padded.extend_from_slice(&bit_len.to_le_bytes());

    debug_assert_eq!(padded.len() % BLOCK_SIZE, 0);
    Ok(padded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_len_boundaries() {
        let cases = [
            (0, 64),
            (55, 64),
            (56, 128),
            (63, 128),
            (64, 128),
            (119, 128),
            (120, 192),
        ];
        for (len, expected) in cases {
            assert_eq!(padded_len(len), expected, "len {len}");
        }
    }

    #[test]
    fn pad_layout() {
        let padded = pad(b"abc").unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(&padded[..3], b"abc");
        assert_eq!(padded[3], 0x80);
        assert!(padded[4..56].iter().all(|&b| b == 0));
        assert_eq!(&padded[56..], &24u64.to_le_bytes());
    }

    #[test]
    fn pad_spills_into_extra_block() {
        let message = [0xffu8; 56];
        let padded = pad(&message).unwrap();
        assert_eq!(padded.len(), 128);
        assert_eq!(padded[56], 0x80);
        assert!(padded[57..120].iter().all(|&b| b == 0));
        assert_eq!(&padded[120..], &448u64.to_le_bytes());
    }

    #[test]
    fn pad_empty_message() {
        let padded = pad(&[]).unwrap();
        assert_eq!(padded.len(), 64);
        assert_eq!(padded[0], 0x80);
        assert!(padded[1..].iter().all(|&b| b == 0));
    }
}
