//! Accumulator state and the per-block compression function.

use crate::padding::BLOCK_SIZE;

const IV: [u32; 4] = [0x6745_2301, 0xefcd_ab89, 0x98ba_dcfe, 0x1032_5476];

/// floor(2^32 * |sin(i + 1)|).
const K: [u32; 64] = [
    0xd76aa478, 0xe8c7b756, 0x242070db, 0xc1bdceee, 0xf57c0faf, 0x4787c62a, 0xa8304613, 0xfd469501,
    0x698098d8, 0x8b44f7af, 0xffff5bb1, 0x895cd7be, 0x6b901122, 0xfd987193, 0xa679438e, 0x49b40821,
    0xf61e2562, 0xc040b340, 0x265e5a51, 0xe9b6c7aa, 0xd62f105d, 0x02441453, 0xd8a1e681, 0xe7d3fbc8,
    0x21e1cde6, 0xc33707d6, 0xf4d50d87, 0x455a14ed, 0xa9e3e905, 0xfcefa3f8, 0x676f02d9, 0x8d2a4c8a,
    0xfffa3942, 0x8771f681, 0x6d9d6122, 0xfde5380c, 0xa4beea44, 0x4bdecfa9, 0xf6bb4b60, 0xbebfbc70,
    0x289b7ec6, 0xeaa127fa, 0xd4ef3085, 0x04881d05, 0xd9d4d039, 0xe6db99e5, 0x1fa27cf8, 0xc4ac5665,
    0xf4292244, 0x432aff97, 0xab9423a7, 0xfc93a039, 0x655b59c3, 0x8f0ccc92, 0xffeff47d, 0x85845dd1,
    0x6fa87e4f, 0xfe2ce6e0, 0xa3014314, 0x4e0811a1, 0xf7537e82, 0xbd3af235, 0x2ad7d2bb, 0xeb86d391,
];

/// Left-rotation amounts, four per stage.
const S: [[u32; 4]; 4] = [[7, 12, 17, 22], [5, 9, 14, 20], [4, 11, 16, 23], [6, 10, 15, 21]];

/// The four 32-bit accumulators A, B, C, D.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestState([u32; 4]);

impl Default for DigestState {
    fn default() -> Self {
        Self::new()
    }
}

impl DigestState {
    /// State loaded with the initial values.
    pub fn new() -> Self {
        Self(IV)
    }

    /// State with arbitrary accumulator values.
    pub fn from_words(words: [u32; 4]) -> Self {
        Self(words)
    }

    /// Current accumulator values in A, B, C, D order.
    pub fn words(&self) -> [u32; 4] {
        self.0
    }

    /// Serializes the accumulators, each word little-endian, A first.
    pub fn to_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Mixes one 64-byte block into the state.
    #[allow(clippy::many_single_char_names)]
    pub fn compress(&mut self, block: &[u8; BLOCK_SIZE]) {
        let mut x = [0u32; 16];
        for (word, bytes) in x.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        }

        let [mut a, mut b, mut c, mut d] = self.0;

        for i in 0..64 {
            let stage = i / 16;
            let (f, g) = match stage {
                0 => ((b & c) | (!b & d), i),
                1 => ((b & d) | (c & !d), (5 * i + 1) % 16),
                2 => (b ^ c ^ d, (3 * i + 5) % 16),
                _ => (c ^ (b | !d), (7 * i) % 16),
            };

            let sum = a.wrapping_add(f).wrapping_add(K[i]).wrapping_add(x[g]);
            let rotated = b.wrapping_add(sum.rotate_left(S[stage][i % 4]));
            a = d;
            d = c;
            c = b;
            b = rotated;
        }

        for (acc, v) in self.0.iter_mut().zip([a, b, c, d]) {
            *acc = acc.wrapping_add(v);
        }
    }
}
