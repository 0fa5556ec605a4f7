//! Single-block encryption and decryption.

use crate::block::{Block, CipherKey};
use crate::key::{expand_key, KeySchedule, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Column-mixing step applied in the inner rounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Diffusion {
    /// No column mixing. Each output byte depends on exactly one input byte.
    #[default]
    Omitted,
    /// AES MixColumns in rounds 1..=9.
    MixColumns,
}

/// Key schedule and diffusion choice for a [`BlockCipher`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    /// Round-key derivation.
    pub schedule: KeySchedule,
    /// Inner-round column mixing.
    pub diffusion: Diffusion,
}

impl Profile {
    /// Raw key reuse without column mixing.
    pub const REDUCED: Self = Self {
        schedule: KeySchedule::Raw,
        diffusion: Diffusion::Omitted,
    };

    /// Standard AES-128.
    pub const FIPS197: Self = Self {
        schedule: KeySchedule::Rijndael,
        diffusion: Diffusion::MixColumns,
    };
}

/// A keyed block cipher instance.
#[derive(Clone, Debug)]
pub struct BlockCipher {
    round_keys: RoundKeys,
    diffusion: Diffusion,
}

impl BlockCipher {
    /// Builds a cipher with the [`Profile::REDUCED`] profile.
    pub fn new(key: &CipherKey) -> Self {
        Self::with_profile(key, Profile::REDUCED)
    }

    /// Builds a cipher with an explicit profile.
    pub fn with_profile(key: &CipherKey, profile: Profile) -> Self {
        Self {
            round_keys: expand_key(key, profile.schedule),
            diffusion: profile.diffusion,
        }
    }

    /// Round keys in use.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        let rks = &self.round_keys;
        let mut state = *block;

        add_round_key(&mut state, rks.get(0));

        for round in 1..ROUNDS {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            if self.diffusion == Diffusion::MixColumns {
                mix_columns(&mut state);
            }
            add_round_key(&mut state, rks.get(round));
        }

        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, rks.get(ROUNDS));

        state
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        let rks = &self.round_keys;
        let mut state = *block;

        add_round_key(&mut state, rks.get(ROUNDS));

        for round in (1..ROUNDS).rev() {
            inv_shift_rows(&mut state);
            inv_sub_bytes(&mut state);
            add_round_key(&mut state, rks.get(round));
            if self.diffusion == Diffusion::MixColumns {
                inv_mix_columns(&mut state);
            }
        }

        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, rks.get(0));

        state
    }
}

/// Encrypts a single block under `key` with the reduced profile.
pub fn encrypt_block(block: &Block, key: &CipherKey) -> Block {
    BlockCipher::new(key).encrypt_block(block)
}

/// Decrypts a single block under `key` with the reduced profile.
pub fn decrypt_block(block: &Block, key: &CipherKey) -> Block {
    BlockCipher::new(key).decrypt_block(block)
}
