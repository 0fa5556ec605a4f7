//! Per-round state transformations.
//!
//! The state is a column-major 4x4 matrix: byte `state[4 * col + row]` sits at
//! (`row`, `col`).

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Substitutes every state byte through the forward S-box.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Substitutes every state byte through the inverse S-box.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Rotates matrix row `r` left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[4 * col + row] = src[4 * ((col + row) % 4) + row];
        }
    }
}

/// Rotates matrix row `r` right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for col in 0..4 {
        for row in 1..4 {
            state[4 * ((col + row) % 4) + row] = src[4 * col + row];
        }
    }
}

fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn mix_with(state: &mut Block, coeffs: [u8; 4]) {
    for column in state.chunks_exact_mut(4) {
        let src = [column[0], column[1], column[2], column[3]];
        for (row, out) in column.iter_mut().enumerate() {
            *out = (0..4).fold(0, |acc, k| acc ^ gmul(src[k], coeffs[(k + 4 - row) % 4]));
        }
    }
}

/// MixColumns: multiplies each column by {02, 03, 01, 01} in GF(2^8).
#[inline]
pub fn mix_columns(state: &mut Block) {
    mix_with(state, [0x02, 0x03, 0x01, 0x01]);
}

/// Inverse MixColumns: multiplies each column by {0e, 0b, 0d, 09}.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    mix_with(state, [0x0e, 0x0b, 0x0d, 0x09]);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
