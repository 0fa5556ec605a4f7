//! Round-key material and the key schedules that produce it.

use crate::block::{Block, CipherKey};
use crate::sbox::sbox;

/// Number of rounds.
pub const ROUNDS: usize = 10;

const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Round-key material: one 16-byte key per round plus the initial whitening key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; ROUNDS + 1]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

/// How the cipher key is turned into [`RoundKeys`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeySchedule {
    /// The key is used as round key 0; round keys 1..=10 stay all-zero.
    ///
    /// This is not a key expansion. Every round after the initial whitening
    /// adds nothing, so the key only enters the cipher once.
    #[default]
    Raw,
    /// The AES-128 key expansion from FIPS-197.
    Rijndael,
}

/// Derives round keys from `key` with the given schedule.
pub fn expand_key(key: &CipherKey, schedule: KeySchedule) -> RoundKeys {
    match schedule {
        KeySchedule::Raw => raw_schedule(key),
        KeySchedule::Rijndael => rijndael_schedule(key),
    }
}

fn raw_schedule(key: &CipherKey) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    round_keys[0] = key.0;
    RoundKeys(round_keys)
}

fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(sbox)
}

fn rijndael_schedule(key: &CipherKey) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    round_keys[0] = key.0;

    for round in 1..=ROUNDS {
        let prev = round_keys[round - 1];
        let mut temp = [prev[12], prev[13], prev[14], prev[15]];
        temp.rotate_left(1);
        temp = sub_word(temp);
        temp[0] ^= RCON[round - 1];

        let mut next = [0u8; 16];
        for word in 0..4 {
            for byte in 0..4 {
                let i = 4 * word + byte;
                next[i] = prev[i] ^ temp[byte];
                temp[byte] = next[i];
            }
        }
        round_keys[round] = next;
    }

    RoundKeys(round_keys)
}
