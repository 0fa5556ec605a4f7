//! 128-bit substitution-permutation block cipher modeled on AES-128.
//!
//! The default [`Profile::REDUCED`] runs ten AES-shaped rounds but uses the
//! cipher key only as round key 0 (round keys 1..=10 are zero) and skips
//! MixColumns, so it is not AES and offers no diffusion across bytes.
//! [`Profile::FIPS197`] switches on the real key expansion and MixColumns and
//! reproduces standard AES-128.
//!
//! Neither profile is constant-time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{Block, CipherKey};
pub use crate::cipher::{decrypt_block, encrypt_block, BlockCipher, Diffusion, Profile};
pub use crate::key::{expand_key, KeySchedule, RoundKeys, ROUNDS};
pub use crate::sbox::{inv_sbox, sbox};
