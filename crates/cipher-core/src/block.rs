//! Block and key representations.

/// Cipher block of 16 bytes, column-major 4x4 state.
pub type Block = [u8; 16];

/// 128-bit cipher key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherKey(pub [u8; 16]);

impl From<[u8; 16]> for CipherKey {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
